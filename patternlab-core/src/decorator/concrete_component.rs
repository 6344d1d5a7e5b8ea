//! Leaf component — the innermost link of every chain.

use super::Component;

/// Text returned by [`ConcreteComponent::operation`].
pub const CONCRETE_COMPONENT_TEXT: &str = "concrete component";

/// Stateless leaf that always produces [`CONCRETE_COMPONENT_TEXT`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteComponent;

impl Component for ConcreteComponent {
    fn operation(&self) -> String {
        CONCRETE_COMPONENT_TEXT.to_string()
    }
}
