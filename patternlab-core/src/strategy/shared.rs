//! Shared context — the strategy slot behind a reader/writer lock.
//!
//! Same semantics as [`Context`], but every method takes `&self` so one
//! instance can sit behind an `Arc` and serve several threads. Runs hold the
//! read lock for the duration of the transform; a swap waits for in-flight
//! runs and is visible to every run that starts after it returns.

use parking_lot::RwLock;

use super::{Context, Strategy, StrategyError};

pub struct SharedContext {
    slot: RwLock<Box<dyn Strategy>>,
}

impl SharedContext {
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Self {
            slot: RwLock::new(strategy),
        }
    }

    /// Name of the currently active strategy.
    pub fn strategy_name(&self) -> String {
        self.slot.read().name().to_string()
    }

    /// Replace the active strategy, returning the one it displaced.
    pub fn set_strategy(&self, strategy: Box<dyn Strategy>) -> Box<dyn Strategy> {
        let mut slot = self.slot.write();
        tracing::debug!(from = slot.name(), to = strategy.name(), "replacing shared strategy");
        std::mem::replace(&mut *slot, strategy)
    }

    pub fn run_strategy(&self, input: &str) -> Result<String, StrategyError> {
        self.slot.read().run(input)
    }

    /// Drop the lock and return a plain single-owner context.
    pub fn into_context(self) -> Context {
        Context::new(self.slot.into_inner())
    }
}

impl From<Context> for SharedContext {
    fn from(context: Context) -> Self {
        Self::new(context.into_strategy())
    }
}
