//! Built-in defaults as a configuration source

use super::traits::{ConfigResult, ConfigSource};
use super::types::HoardConfig;

/// Always succeeds with [`HoardConfig::default`]
///
/// Put it last in a cascade to guarantee resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSource;

impl DefaultSource {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigSource for DefaultSource {
    fn name(&self) -> &str {
        "default config"
    }

    fn load(&self) -> ConfigResult<HoardConfig> {
        Ok(HoardConfig::default())
    }
}
