//! Decorator B — wraps the forwarded text in `ConcreteDecoratorB(...)`.

use super::{Component, Decorator};

/// Tagging decorator, label `ConcreteDecoratorB`.
pub struct ConcreteDecoratorB {
    inner: Decorator,
}

impl ConcreteDecoratorB {
    pub const LABEL: &'static str = "ConcreteDecoratorB";

    pub fn new(component: Box<dyn Component>) -> Self {
        Self {
            inner: Decorator::new(component),
        }
    }

    pub fn component(&self) -> &dyn Component {
        self.inner.component()
    }
}

impl Component for ConcreteDecoratorB {
    fn operation(&self) -> String {
        format!("{}({})", Self::LABEL, self.component().operation())
    }

    fn depth(&self) -> usize {
        self.inner.depth()
    }
}
