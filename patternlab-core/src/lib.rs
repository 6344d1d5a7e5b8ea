//! PatternLab Core — decorator chains and swappable text strategies.
//!
//! This crate contains two independent building blocks:
//! - Decorator chain: a text-producing component wrapped by forwarding and
//!   tagging decorators, composed bottom-up and immutable once built
//! - Strategy context: a single owned strategy slot, replaceable at runtime,
//!   delegating text transforms to whichever strategy is active
//! - Factory: name → variant resolution used by configuration files and the CLI
//!
//! The two modules share nothing; the factory is the only place that knows
//! about both.

pub mod decorator;
pub mod factory;
pub mod strategy;
