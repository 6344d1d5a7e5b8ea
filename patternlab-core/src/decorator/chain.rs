//! Chain construction — builds decorator chains from a list of layer tags.
//!
//! Layers are applied in list order, so the first tag ends up innermost:
//! `[A, B]` produces `B(A(leaf))`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Component, ConcreteComponent, ConcreteDecoratorA, ConcreteDecoratorB, Decorator};

/// Closed set of decorator layers that configuration can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecoratorKind {
    /// Pure forwarding layer, adds no text.
    #[serde(rename = "plain")]
    Plain,
    #[serde(rename = "a", alias = "decorator_a")]
    A,
    #[serde(rename = "b", alias = "decorator_b")]
    B,
}

impl DecoratorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::A => "a",
            Self::B => "b",
        }
    }
}

impl fmt::Display for DecoratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wrap `component` in one layer of the given kind.
pub fn wrap(kind: DecoratorKind, component: Box<dyn Component>) -> Box<dyn Component> {
    match kind {
        DecoratorKind::Plain => Box::new(Decorator::new(component)),
        DecoratorKind::A => Box::new(ConcreteDecoratorA::new(component)),
        DecoratorKind::B => Box::new(ConcreteDecoratorB::new(component)),
    }
}

/// Build a chain over [`ConcreteComponent`], applying `layers` innermost-first.
pub fn build_chain(layers: &[DecoratorKind]) -> Box<dyn Component> {
    let chain = layers
        .iter()
        .fold(Box::new(ConcreteComponent) as Box<dyn Component>, |inner, &kind| {
            wrap(kind, inner)
        });
    tracing::debug!(layers = layers.len(), depth = chain.depth(), "built decorator chain");
    chain
}

/// Output of the chain after each wrap step, starting with the bare leaf.
///
/// Returns `layers.len() + 1` entries; the last one equals
/// `build_chain(layers).operation()`.
pub fn chain_stages(layers: &[DecoratorKind]) -> Vec<String> {
    let mut current: Box<dyn Component> = Box::new(ConcreteComponent);
    let mut stages = Vec::with_capacity(layers.len() + 1);
    stages.push(current.operation());
    for &kind in layers {
        current = wrap(kind, current);
        stages.push(current.operation());
    }
    stages
}
