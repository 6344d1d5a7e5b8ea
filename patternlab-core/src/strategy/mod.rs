//! Strategy context — interchangeable text transforms behind one slot.
//!
//! A [`Context`] owns exactly one active [`Strategy`] at a time and forwards
//! `run_strategy` calls to it. The active strategy is replaced only by an
//! explicit `set_strategy` call from the context's owner.
//!
//! ## Concrete implementations
//!
//! - [`SortingStrategy`] — characters in ascending code-point order
//! - [`ReverseStrategy`] — characters in reverse order

pub mod context;
pub mod reverse;
pub mod shared;
pub mod sorting;

pub use context::Context;
pub use reverse::ReverseStrategy;
pub use shared::SharedContext;
pub use sorting::SortingStrategy;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by strategies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    /// The strategy never overrode [`Strategy::run`]. This is a programming
    /// error in the variant, not a condition callers can recover from.
    #[error("strategy '{strategy}' does not implement run")]
    NotImplemented { strategy: String },
}

/// Trait for text strategies.
///
/// Every concrete strategy must override `run`; the default body fails with
/// [`StrategyError::NotImplemented`].
pub trait Strategy: Send + Sync {
    /// Human-readable name (e.g., "sorting").
    fn name(&self) -> &str;

    /// Transform `input` into a new string.
    fn run(&self, input: &str) -> Result<String, StrategyError> {
        let _ = input;
        Err(StrategyError::NotImplemented {
            strategy: self.name().to_string(),
        })
    }
}

/// Closed set of strategies that configuration can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    Sorting,
    Reverse,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sorting => "sorting",
            Self::Reverse => "reverse",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
