//! Decorator A — wraps the forwarded text in `ConcreteDecoratorA(...)`.

use super::{Component, Decorator};

/// Tagging decorator, label `ConcreteDecoratorA`.
pub struct ConcreteDecoratorA {
    inner: Decorator,
}

impl ConcreteDecoratorA {
    pub const LABEL: &'static str = "ConcreteDecoratorA";

    pub fn new(component: Box<dyn Component>) -> Self {
        Self {
            inner: Decorator::new(component),
        }
    }

    pub fn component(&self) -> &dyn Component {
        self.inner.component()
    }
}

impl Component for ConcreteDecoratorA {
    fn operation(&self) -> String {
        format!("{}({})", Self::LABEL, self.component().operation())
    }

    fn depth(&self) -> usize {
        self.inner.depth()
    }
}
