//! Factory system — converts names from configuration into runtime trait objects.
//!
//! Two parsers (`parse_strategy`, `parse_decorator`) turn user-facing names
//! into the closed kind enums; `create_strategy` and `create_chain` turn those
//! into boxed trait objects. The `*_by_name` helpers do both in one step.

use std::str::FromStr;

use crate::decorator::{build_chain, Component, DecoratorKind};
use crate::strategy::{ReverseStrategy, SortingStrategy, Strategy, StrategyKind};

// ─── Error type ──────────────────────────────────────────────────────

/// Errors that can occur during component construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FactoryError {
    #[error("Unknown strategy type: {0}")]
    UnknownStrategy(String),
    #[error("Unknown decorator type: {0}")]
    UnknownDecorator(String),
}

// ─── Strategy factory ────────────────────────────────────────────────

/// Resolve a strategy name (case-insensitive).
pub fn parse_strategy(name: &str) -> Result<StrategyKind, FactoryError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "sorting" | "sort" => Ok(StrategyKind::Sorting),
        "reverse" | "reversed" => Ok(StrategyKind::Reverse),
        _ => Err(FactoryError::UnknownStrategy(name.to_string())),
    }
}

/// Create a strategy from its kind.
pub fn create_strategy(kind: StrategyKind) -> Box<dyn Strategy> {
    match kind {
        StrategyKind::Sorting => Box::new(SortingStrategy),
        StrategyKind::Reverse => Box::new(ReverseStrategy),
    }
}

/// Create a strategy from a configuration name.
pub fn create_strategy_by_name(name: &str) -> Result<Box<dyn Strategy>, FactoryError> {
    parse_strategy(name).map(create_strategy)
}

impl FromStr for StrategyKind {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_strategy(s)
    }
}

// ─── Decorator factory ───────────────────────────────────────────────

/// Resolve a decorator layer name (case-insensitive).
pub fn parse_decorator(name: &str) -> Result<DecoratorKind, FactoryError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "plain" | "decorator" => Ok(DecoratorKind::Plain),
        "a" | "decorator_a" => Ok(DecoratorKind::A),
        "b" | "decorator_b" => Ok(DecoratorKind::B),
        _ => Err(FactoryError::UnknownDecorator(name.to_string())),
    }
}

/// Create a decorator chain over the leaf component; see [`build_chain`].
pub fn create_chain(layers: &[DecoratorKind]) -> Box<dyn Component> {
    build_chain(layers)
}

/// Create a decorator chain from configuration names, innermost first.
pub fn create_chain_by_names<S: AsRef<str>>(
    names: &[S],
) -> Result<Box<dyn Component>, FactoryError> {
    let layers = names
        .iter()
        .map(|n| parse_decorator(n.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(create_chain(&layers))
}

impl FromStr for DecoratorKind {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_decorator(s)
    }
}
