//! Reverse strategy — characters in reverse sequence order.

use super::{Strategy, StrategyError};

#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseStrategy;

impl Strategy for ReverseStrategy {
    fn name(&self) -> &str {
        "reverse"
    }

    fn run(&self, input: &str) -> Result<String, StrategyError> {
        Ok(input.chars().rev().collect())
    }
}
