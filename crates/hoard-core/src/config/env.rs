//! Environment variable configuration source

use std::env;

use super::traits::{ConfigError, ConfigResult, ConfigSource};
use super::types::HoardConfig;

/// Variable holding a complete JSON config for `hoard --env`
pub const DEFAULT_JSON_CONFIG_ENVIRONMENT_VARIABLE: &str = "HOARD_JSON_CONFIG";

/// Config parsed as JSON from a single environment variable
///
/// Generate a suitable value with `hoard config --json`.
#[derive(Debug, Clone)]
pub struct EnvironmentSource {
    var: String,
    name: String,
}

impl EnvironmentSource {
    pub fn new(var: impl Into<String>) -> Self {
        let var = var.into();
        let name = format!("environment variable {}", var);
        Self { var, name }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvironmentSource {
    fn default() -> Self {
        Self::new(DEFAULT_JSON_CONFIG_ENVIRONMENT_VARIABLE)
    }
}

impl ConfigSource for EnvironmentSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> ConfigResult<HoardConfig> {
        let json = env::var(&self.var).map_err(|_| ConfigError::EnvNotSet(self.var.clone()))?;
        if json.trim().is_empty() {
            return Err(ConfigError::Empty(self.name.clone()));
        }
        HoardConfig::from_json_str(&json)
    }
}
