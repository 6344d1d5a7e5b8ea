//! Forwarding decorator — the base layer every concrete decorator builds on.
//!
//! On its own it adds nothing: `operation()` returns the wrapped component's
//! text verbatim. Concrete decorators hold one of these and override only
//! how the forwarded text is presented.

use super::Component;

/// Owns exactly one wrapped component and forwards to it.
pub struct Decorator {
    component: Box<dyn Component>,
}

impl Decorator {
    pub fn new(component: Box<dyn Component>) -> Self {
        Self { component }
    }

    /// The wrapped component (read-only; chains are never re-wrapped in place).
    pub fn component(&self) -> &dyn Component {
        self.component.as_ref()
    }
}

impl Component for Decorator {
    fn operation(&self) -> String {
        self.component.operation()
    }

    fn depth(&self) -> usize {
        self.component.depth() + 1
    }
}
