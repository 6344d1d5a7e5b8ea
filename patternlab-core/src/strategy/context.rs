//! Context — owns the active strategy and delegates to it.

use super::{Strategy, StrategyError};

/// Holds exactly one active strategy.
///
/// The slot can never be empty: `new` takes an owned strategy, and
/// `set_strategy` swaps one box for another.
pub struct Context {
    strategy: Box<dyn Strategy>,
}

impl Context {
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Self { strategy }
    }

    /// The currently active strategy.
    pub fn strategy(&self) -> &dyn Strategy {
        self.strategy.as_ref()
    }

    /// Replace the active strategy, returning the one it displaced.
    pub fn set_strategy(&mut self, strategy: Box<dyn Strategy>) -> Box<dyn Strategy> {
        tracing::debug!(
            from = self.strategy.name(),
            to = strategy.name(),
            "replacing strategy"
        );
        std::mem::replace(&mut self.strategy, strategy)
    }

    /// Run the active strategy on `input`, returning its result unmodified.
    pub fn run_strategy(&self, input: &str) -> Result<String, StrategyError> {
        self.strategy.run(input)
    }

    /// Consume the context, handing back its strategy.
    pub fn into_strategy(self) -> Box<dyn Strategy> {
        self.strategy
    }
}
