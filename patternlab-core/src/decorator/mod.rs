//! Decorator chain — a text-producing component wrapped by decorators.
//!
//! A chain is built bottom-up: the leaf ([`ConcreteComponent`]) is wrapped by
//! zero or more decorators, each exclusively owning the layer below it. Once
//! built, a chain is never re-wrapped in place; wrapping consumes the inner
//! box and returns a new outer one.
//!
//! ## Concrete implementations
//!
//! - [`ConcreteComponent`] — leaf, returns a fixed string
//! - [`Decorator`] — pure forwarding layer
//! - [`ConcreteDecoratorA`] — wraps the forwarded text in `ConcreteDecoratorA(...)`
//! - [`ConcreteDecoratorB`] — wraps the forwarded text in `ConcreteDecoratorB(...)`

pub mod chain;
pub mod concrete_component;
pub mod decorator_a;
pub mod decorator_b;
pub mod forwarding;

pub use chain::{build_chain, chain_stages, wrap, DecoratorKind};
pub use concrete_component::ConcreteComponent;
pub use decorator_a::ConcreteDecoratorA;
pub use decorator_b::ConcreteDecoratorB;
pub use forwarding::Decorator;

/// Trait for anything that produces text and can sit in a decorator chain.
///
/// `operation` is total and side-effect free. Implementations must be
/// `Send + Sync` so a finished chain can be handed to another thread.
pub trait Component: Send + Sync {
    /// Produce this component's text.
    fn operation(&self) -> String;

    /// Number of decorator layers between this component and the leaf.
    fn depth(&self) -> usize {
        0
    }
}
