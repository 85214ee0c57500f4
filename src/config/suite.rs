use crate::scenario::runner::MAX_SCENARIO_TIMEOUT_SECS;
use crate::utils::error::{Result, SuiteError};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Scenario plan loaded from `suite.toml`: which scenarios run, in what
/// order, with what per-scenario overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    pub suite: SuitePlan,
    #[serde(default)]
    pub scenarios: HashMap<String, ScenarioDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuitePlan {
    pub name: String,
    pub execution_order: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioDef {
    pub enabled: Option<bool>,
    pub tags: Option<Vec<String>>,
    pub timeout_seconds: Option<u64>,
}

impl ScenarioDef {
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .as_ref()
            .map(|tags| tags.iter().any(|t| t == tag))
            .unwrap_or(false)
    }
}

impl SuiteConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn get_scenario(&self, name: &str) -> Option<&ScenarioDef> {
        self.scenarios.get(name)
    }

    /// Enabled scenarios in execution order, optionally filtered by tag.
    /// A scenario absent from the `[scenarios]` table runs with defaults.
    pub fn selected(&self, tag: Option<&str>) -> Vec<(&str, ScenarioDef)> {
        self.suite
            .execution_order
            .iter()
            .map(|name| {
                (
                    name.as_str(),
                    self.scenarios.get(name).cloned().unwrap_or_default(),
                )
            })
            .filter(|(_, def)| def.is_enabled())
            .filter(|(_, def)| match tag {
                Some(tag) => def.has_tag(tag),
                None => true,
            })
            .collect()
    }
}

impl Validate for SuiteConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("suite.name", &self.suite.name)?;

        if self.suite.execution_order.is_empty() {
            return Err(SuiteError::MissingConfig {
                field: "suite.execution_order".to_string(),
            });
        }

        for name in self.scenarios.keys() {
            if !self.suite.execution_order.iter().any(|n| n == name) {
                return Err(SuiteError::InvalidConfigValue {
                    field: format!("scenarios.{}", name),
                    value: name.clone(),
                    reason: "scenario is configured but absent from suite.execution_order"
                        .to_string(),
                });
            }
        }

        for (name, def) in &self.scenarios {
            if let Some(timeout) = def.timeout_seconds {
                validate_range(
                    &format!("scenarios.{}.timeout_seconds", name),
                    timeout,
                    1,
                    MAX_SCENARIO_TIMEOUT_SECS,
                )?;
            }
        }

        Ok(())
    }
}
