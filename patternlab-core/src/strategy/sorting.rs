//! Sorting strategy — reorders characters into ascending code-point order.
//!
//! Operates on `char`s (Unicode scalar values), so multi-byte characters are
//! moved whole. The output is a permutation of the input.

use super::{Strategy, StrategyError};

#[derive(Debug, Clone, Copy, Default)]
pub struct SortingStrategy;

impl Strategy for SortingStrategy {
    fn name(&self) -> &str {
        "sorting"
    }

    fn run(&self, input: &str) -> Result<String, StrategyError> {
        let mut chars: Vec<char> = input.chars().collect();
        chars.sort_unstable();
        Ok(chars.into_iter().collect())
    }
}
