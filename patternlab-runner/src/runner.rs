//! Scenario runner — wires configuration to the core patterns.
//!
//! Decorator scenarios run before strategy scenarios, each group in file
//! order. Every scenario yields one [`StepOutput`] per observable result:
//! a decorator scenario reports the chain after each wrap (leaf first), a
//! strategy scenario reports the context's output after each swap.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use patternlab_core::decorator::chain_stages;
use patternlab_core::factory::{create_strategy, parse_decorator, parse_strategy, FactoryError};
use patternlab_core::strategy::{Context, StrategyError};

use crate::config::{ConfigError, DecoratorScenario, ScenarioConfig, StrategyScenario};

/// Errors from the runner.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("composition error: {0}")]
    Factory(#[from] FactoryError),
    #[error("strategy error: {0}")]
    Strategy(#[from] StrategyError),
}

/// Current schema version for serialized reports.
pub const SCHEMA_VERSION: u32 = 1;

/// Label of the first decorator stage (the bare leaf).
pub const LEAF_LABEL: &str = "leaf";

/// Which pattern a scenario exercised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    Decorator,
    Strategy,
}

/// One observable result within a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutput {
    /// Layer or strategy name that produced this output.
    pub label: String,
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub name: String,
    pub pattern: PatternKind,
    pub steps: Vec<StepOutput>,
}

/// Complete result of a scenario run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub scenarios: Vec<ScenarioResult>,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

/// Run every scenario in `config`.
pub fn run_scenarios(config: &ScenarioConfig) -> Result<RunReport, RunError> {
    config.validate()?;

    let mut scenarios = Vec::with_capacity(config.scenario_count());
    for scenario in &config.decorators {
        scenarios.push(run_decorator_scenario(scenario)?);
    }
    for scenario in &config.strategies {
        scenarios.push(run_strategy_scenario(scenario)?);
    }

    Ok(RunReport {
        schema_version: SCHEMA_VERSION,
        scenarios,
    })
}

/// Load a scenario file and run it.
pub fn run_file(path: &Path) -> Result<RunReport, RunError> {
    let config = ScenarioConfig::from_file(path)?;
    run_scenarios(&config)
}

/// Build the chain layer by layer and record the text after each wrap.
pub fn run_decorator_scenario(scenario: &DecoratorScenario) -> Result<ScenarioResult, RunError> {
    let layers = scenario
        .layers
        .iter()
        .map(|name| parse_decorator(name))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!(scenario = %scenario.name, layers = layers.len(), "running decorator scenario");

    let labels = std::iter::once(LEAF_LABEL.to_string())
        .chain(layers.iter().map(|kind| kind.to_string()));
    let steps = labels
        .zip(chain_stages(&layers))
        .map(|(label, output)| StepOutput { label, output })
        .collect();

    Ok(ScenarioResult {
        name: scenario.name.clone(),
        pattern: PatternKind::Decorator,
        steps,
    })
}

/// Install the first step's strategy, run, then swap to each later step and
/// run again on the same input.
pub fn run_strategy_scenario(scenario: &StrategyScenario) -> Result<ScenarioResult, RunError> {
    let kinds = scenario
        .steps
        .iter()
        .map(|name| parse_strategy(name))
        .collect::<Result<Vec<_>, _>>()?;

    let Some((&first, rest)) = kinds.split_first() else {
        return Err(ConfigError::Invalid(format!(
            "strategy scenario '{}' has no steps",
            scenario.name
        ))
        .into());
    };

    tracing::info!(scenario = %scenario.name, steps = kinds.len(), "running strategy scenario");

    let mut context = Context::new(create_strategy(first));
    let mut steps = Vec::with_capacity(kinds.len());
    steps.push(StepOutput {
        label: first.to_string(),
        output: context.run_strategy(&scenario.input)?,
    });

    for &kind in rest {
        context.set_strategy(create_strategy(kind));
        steps.push(StepOutput {
            label: kind.to_string(),
            output: context.run_strategy(&scenario.input)?,
        });
    }

    Ok(ScenarioResult {
        name: scenario.name.clone(),
        pattern: PatternKind::Strategy,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decorator_scenario_labels_each_stage() {
        let result = run_decorator_scenario(&DecoratorScenario {
            name: "d".into(),
            layers: vec!["b".into(), "plain".into()],
        })
        .unwrap();

        let labels: Vec<_> = result.steps.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["leaf", "b", "plain"]);
        assert_eq!(result.steps[1].output, "ConcreteDecoratorB(concrete component)");
        assert_eq!(result.steps[2].output, result.steps[1].output);
    }

    #[test]
    fn strategy_scenario_reruns_same_input() {
        let result = run_strategy_scenario(&StrategyScenario {
            name: "s".into(),
            input: "cab".into(),
            steps: vec!["reverse".into(), "sorting".into(), "reverse".into()],
        })
        .unwrap();

        let outputs: Vec<_> = result.steps.iter().map(|s| s.output.as_str()).collect();
        assert_eq!(outputs, vec!["bac", "abc", "bac"]);
        assert_eq!(result.pattern, PatternKind::Strategy);
    }

    #[test]
    fn strategy_scenario_without_steps_is_rejected() {
        let err = run_strategy_scenario(&StrategyScenario {
            name: "empty".into(),
            input: "x".into(),
            steps: vec![],
        })
        .unwrap_err();
        assert!(matches!(err, RunError::Config(ConfigError::Invalid(_))));
    }

    #[test]
    fn unknown_layer_is_factory_error() {
        let err = run_decorator_scenario(&DecoratorScenario {
            name: "bad".into(),
            layers: vec!["a".into(), "z".into()],
        })
        .unwrap_err();
        assert!(matches!(
            err,
            RunError::Factory(FactoryError::UnknownDecorator(ref name)) if name == "z"
        ));
    }

    #[test]
    fn invalid_config_never_runs() {
        let err = run_scenarios(&ScenarioConfig::default()).unwrap_err();
        assert!(matches!(err, RunError::Config(_)));
    }
}
