//! Configuration source trait and errors

use std::path::PathBuf;

use super::types::HoardConfig;

/// One candidate producer of a complete [`HoardConfig`]
///
/// Implementations:
/// - `EnvironmentSource`: JSON in an environment variable
/// - `FileSource`: an explicit path, or standard input for `-`
/// - `XdgSource`: `hoard.toml` in the per-user config directory
/// - `DefaultSource`: built-in defaults, never fails
///
/// A source either yields a whole config or fails; sources are never merged.
pub trait ConfigSource: Send + Sync {
    /// Where this source reads from, used in diagnostics
    fn name(&self) -> &str;

    /// Produce a configuration value
    fn load(&self) -> ConfigResult<HoardConfig>;
}

/// Errors that can occur while loading, encoding or writing configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    TomlDecode(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlEncode(#[from] toml::ser::Error),

    #[error("could not parse config as TOML ({toml}) or as YAML ({yaml})")]
    UnknownFormat {
        toml: toml::de::Error,
        yaml: serde_yaml::Error,
    },

    #[error("environment variable {0} is not set")]
    EnvNotSet(String),

    #[error("empty config from {0}")]
    Empty(String),

    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("no config file at {}", .0.display())]
    Absent(PathBuf),

    #[error("could not determine the user config directory")]
    NoConfigDir,

    #[error("file '{}' already exists", .0.display())]
    FileExists(PathBuf),

    #[error("unknown storage type '{0}'")]
    UnknownStorageType(String),

    #[error("could not resolve hoard config from any source{}", describe_tried(.0))]
    Exhausted(Vec<String>),
}

impl ConfigError {
    /// The source has nothing to offer, as opposed to offering something broken
    ///
    /// The cascade passes over these without reporting them.
    pub fn is_absent(&self) -> bool {
        matches!(self, ConfigError::Absent(_) | ConfigError::NoConfigDir)
    }
}

fn describe_tried(tried: &[String]) -> String {
    if tried.is_empty() {
        " (all sources skipped)".to_string()
    } else {
        format!(" (tried {})", tried.join(", "))
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
