//! PatternLab Runner — scenario orchestration and reporting.
//!
//! This crate builds on `patternlab-core` to provide:
//! - TOML scenario files (decorator chains, strategy swap sequences)
//! - A built-in demo scenario reproducing the classic walkthrough
//! - A runner that executes scenarios and collects every step's output
//! - Plain-text and JSON report rendering

pub mod config;
pub mod report;
pub mod runner;

pub use config::{ConfigError, DecoratorScenario, ScenarioConfig, StrategyScenario, DEMO_INPUT};
pub use runner::{
    run_file, run_scenarios, PatternKind, RunError, RunReport, ScenarioResult, StepOutput,
};
