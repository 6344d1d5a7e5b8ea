//! Scenario configuration — which chains to build and which strategies to run.
//!
//! Scenario files are TOML with two arrays of tables:
//!
//! ```toml
//! [[decorator]]
//! name = "nested"
//! layers = ["a", "b"]
//!
//! [[strategy]]
//! name = "swap"
//! input = "a green apple"
//! steps = ["sorting", "reverse"]
//! ```
//!
//! Layer and step names stay as strings here; the runner resolves them through
//! the core factory so that unknown names surface as factory errors.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or validating a scenario file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Text the built-in demo feeds to its strategy scenario.
pub const DEMO_INPUT: &str = "a green apple";

/// A decorator chain to build, reported stage by stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DecoratorScenario {
    pub name: String,
    /// Layer names, innermost first. Empty means the bare leaf.
    #[serde(default)]
    pub layers: Vec<String>,
}

/// A context run over one input, swapping through `steps` in order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StrategyScenario {
    pub name: String,
    pub input: String,
    /// Strategy names; the first one is installed at construction.
    pub steps: Vec<String>,
}

/// Complete scenario file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScenarioConfig {
    #[serde(default, rename = "decorator")]
    pub decorators: Vec<DecoratorScenario>,
    #[serde(default, rename = "strategy")]
    pub strategies: Vec<StrategyScenario>,
}

impl ScenarioConfig {
    /// Load a scenario file from disk.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse a scenario file from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The built-in demonstration: chain `a` then `b` over the leaf, and a
    /// context on [`DEMO_INPUT`] that sorts and then reverses.
    pub fn demo() -> Self {
        Self {
            decorators: vec![DecoratorScenario {
                name: "decorator_demo".into(),
                layers: vec!["a".into(), "b".into()],
            }],
            strategies: vec![StrategyScenario {
                name: "strategy_demo".into(),
                input: DEMO_INPUT.into(),
                steps: vec!["sorting".into(), "reverse".into()],
            }],
        }
    }

    /// Total number of scenarios of both kinds.
    pub fn scenario_count(&self) -> usize {
        self.decorators.len() + self.strategies.len()
    }

    /// Structural checks: at least one scenario, unique names, every strategy
    /// scenario has a step to install.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scenario_count() == 0 {
            return Err(ConfigError::Invalid("no scenarios defined".into()));
        }

        let mut seen = HashSet::new();
        let names = self
            .decorators
            .iter()
            .map(|d| d.name.as_str())
            .chain(self.strategies.iter().map(|s| s.name.as_str()));
        for name in names {
            if name.trim().is_empty() {
                return Err(ConfigError::Invalid("scenario name must not be empty".into()));
            }
            if !seen.insert(name) {
                return Err(ConfigError::Invalid(format!("duplicate scenario name '{name}'")));
            }
        }

        if let Some(s) = self.strategies.iter().find(|s| s.steps.is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "strategy scenario '{}' has no steps",
                s.name
            )));
        }

        Ok(())
    }
}
