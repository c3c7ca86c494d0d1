//! Config file formats

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::traits::ConfigResult;

/// A serialization format accepted for configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Format implied by a file extension, if any
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "toml" => Some(ConfigFormat::Toml),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "json" => Some(ConfigFormat::Json),
            _ => None,
        }
    }

    /// JSON configs are always objects
    pub fn looks_like_json(content: &str) -> bool {
        content.trim_start().starts_with('{')
    }

    pub fn decode<T: DeserializeOwned>(&self, content: &str) -> ConfigResult<T> {
        Ok(match self {
            ConfigFormat::Toml => toml::from_str(content)?,
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
        })
    }

    /// Encode for humans: TOML and YAML as usual, JSON pretty-printed
    pub fn encode<T: Serialize>(&self, value: &T) -> ConfigResult<String> {
        Ok(match self {
            ConfigFormat::Toml => toml::to_string(value)?,
            ConfigFormat::Yaml => serde_yaml::to_string(value)?,
            ConfigFormat::Json => serde_json::to_string_pretty(value)?,
        })
    }
}

impl std::fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigFormat::Toml => write!(f, "TOML"),
            ConfigFormat::Yaml => write!(f, "YAML"),
            ConfigFormat::Json => write!(f, "JSON"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use std::collections::BTreeMap;

    #[test]
    fn test_from_path() {
        assert_eq!(ConfigFormat::from_path(Path::new("hoard.toml")), Some(ConfigFormat::Toml));
        assert_eq!(ConfigFormat::from_path(Path::new("/etc/hoard.YML")), Some(ConfigFormat::Yaml));
        assert_eq!(ConfigFormat::from_path(Path::new("hoard.yaml")), Some(ConfigFormat::Yaml));
        assert_eq!(ConfigFormat::from_path(Path::new("hoard.json")), Some(ConfigFormat::Json));
        assert_eq!(ConfigFormat::from_path(Path::new("hoard.conf")), None);
        assert_eq!(ConfigFormat::from_path(Path::new("-")), None);
    }

    #[test]
    fn test_looks_like_json() {
        assert!(ConfigFormat::looks_like_json("  \n{\"ListenAddress\": \":1\"}"));
        assert!(!ConfigFormat::looks_like_json("ListenAddress = \":1\""));
    }

    #[test]
    fn test_decode_errors_keep_their_format() {
        let toml: ConfigResult<BTreeMap<String, String>> = ConfigFormat::Toml.decode("= nope");
        assert!(matches!(toml, Err(ConfigError::TomlDecode(_))));

        let json: ConfigResult<BTreeMap<String, String>> = ConfigFormat::Json.decode("{");
        assert!(matches!(json, Err(ConfigError::Json(_))));

        let yaml: ConfigResult<BTreeMap<String, String>> = ConfigFormat::Yaml.decode("[a, b]");
        assert!(matches!(yaml, Err(ConfigError::Yaml(_))));
    }
}
