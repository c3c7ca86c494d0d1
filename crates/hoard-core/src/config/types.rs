//! The hoard configuration value

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::format::ConfigFormat;
use super::traits::{ConfigError, ConfigResult};
use crate::secrets::SecretsConfig;

/// Listen address used when no configuration names one
pub const DEFAULT_LISTEN_ADDRESS: &str = "tcp://:53431";

/// Address encoding for storage locations
pub const DEFAULT_ADDRESS_ENCODING: &str = "base64";

fn default_listen_address() -> String {
    DEFAULT_LISTEN_ADDRESS.to_string()
}

/// Effective runtime configuration of the daemon
///
/// Serialized with the same keys in TOML, YAML and JSON so a file written by
/// hand in any of them decodes to the same value.
///
/// `Default` builds a fresh value each call; there is no shared default
/// instance to mutate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HoardConfig {
    /// Network-scheme-prefixed address, e.g. `tcp://localhost:54192` or
    /// `unix:///tmp/hoard.sock`
    #[serde(default = "default_listen_address")]
    pub listen_address: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secrets: Option<SecretsConfig>,
}

impl Default for HoardConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_LISTEN_ADDRESS,
            Some(StorageConfig::default()),
            Some(LoggingConfig::default()),
        )
    }
}

impl HoardConfig {
    /// Config without secrets
    pub fn new(
        listen_address: impl Into<String>,
        storage: Option<StorageConfig>,
        logging: Option<LoggingConfig>,
    ) -> Self {
        Self {
            listen_address: listen_address.into(),
            storage,
            logging,
            secrets: None,
        }
    }

    pub fn with_secrets(mut self, secrets: SecretsConfig) -> Self {
        self.secrets = Some(secrets);
        self
    }

    /// Apply the command-line listen address, the one post-resolution override
    ///
    /// `None` and empty strings leave the resolved address in place.
    pub fn override_listen_address(&mut self, address: Option<&str>) {
        if let Some(address) = address.filter(|a| !a.is_empty()) {
            self.listen_address = address.to_string();
        }
    }

    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        ConfigFormat::Json.decode(json)
    }

    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        ConfigFormat::Yaml.decode(yaml)
    }

    pub fn from_toml_str(toml: &str) -> ConfigResult<Self> {
        ConfigFormat::Toml.decode(toml)
    }

    /// Decode text whose format is not known in advance
    ///
    /// Text starting with `{` is JSON; anything else is tried as TOML and
    /// then as YAML.
    pub fn from_str_detected(content: &str) -> ConfigResult<Self> {
        if content.trim().is_empty() {
            return Err(ConfigError::Empty("config text".to_string()));
        }
        if ConfigFormat::looks_like_json(content) {
            return Self::from_json_str(content);
        }
        match Self::from_toml_str(content) {
            Ok(config) => Ok(config),
            Err(ConfigError::TomlDecode(toml)) => match Self::from_yaml_str(content) {
                Ok(config) => Ok(config),
                Err(ConfigError::Yaml(yaml)) => Err(ConfigError::UnknownFormat { toml, yaml }),
                Err(other) => Err(other),
            },
            Err(other) => Err(other),
        }
    }

    pub fn to_toml_string(&self) -> ConfigResult<String> {
        ConfigFormat::Toml.encode(self)
    }

    pub fn to_yaml_string(&self) -> ConfigResult<String> {
        ConfigFormat::Yaml.encode(self)
    }

    /// Pretty-printed JSON
    pub fn to_json_string(&self) -> ConfigResult<String> {
        ConfigFormat::Json.encode(self)
    }

    /// Single-line JSON, suitable for `HOARD_JSON_CONFIG`
    pub fn to_json_line(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Storage backend kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageType {
    Memory,
    Filesystem,
    Aws,
    Azure,
    Gcp,
    Ipfs,
}

impl StorageType {
    pub const ALL: [StorageType; 6] = [
        StorageType::Memory,
        StorageType::Filesystem,
        StorageType::Aws,
        StorageType::Azure,
        StorageType::Gcp,
        StorageType::Ipfs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageType::Memory => "memory",
            StorageType::Filesystem => "filesystem",
            StorageType::Aws => "aws",
            StorageType::Azure => "azure",
            StorageType::Gcp => "gcp",
            StorageType::Ipfs => "ipfs",
        }
    }
}

impl std::fmt::Display for StorageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        StorageType::ALL
            .into_iter()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| ConfigError::UnknownStorageType(s.to_string()))
    }
}

/// Storage backend settings
///
/// Only carried through resolution here; the backends interpret them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StorageConfig {
    pub storage_type: StorageType,

    #[serde(default = "default_address_encoding")]
    pub address_encoding: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_system: Option<FileSystemConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud: Option<CloudConfig>,

    #[serde(rename = "IPFS", default, skip_serializing_if = "Option::is_none")]
    pub ipfs: Option<IpfsConfig>,
}

fn default_address_encoding() -> String {
    DEFAULT_ADDRESS_ENCODING.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::example(StorageType::Memory)
    }
}

impl StorageConfig {
    fn bare(storage_type: StorageType) -> Self {
        Self {
            storage_type,
            address_encoding: default_address_encoding(),
            file_system: None,
            cloud: None,
            ipfs: None,
        }
    }

    /// Example settings for a backend, as printed by `hoard config`
    ///
    /// Cloud examples name placeholder buckets and need editing before use.
    pub fn example(storage_type: StorageType) -> Self {
        let mut config = Self::bare(storage_type);
        match storage_type {
            StorageType::Memory => {}
            StorageType::Filesystem => {
                config.file_system = Some(FileSystemConfig {
                    root_directory: PathBuf::from(".hoard"),
                });
            }
            StorageType::Aws => {
                config.cloud = Some(CloudConfig::new("hoard", "store", Some("eu-central-1")));
            }
            StorageType::Azure | StorageType::Gcp => {
                config.cloud = Some(CloudConfig::new("hoard", "store", None));
            }
            StorageType::Ipfs => {
                config.ipfs = Some(IpfsConfig {
                    remote_api: "http://:5001".to_string(),
                });
            }
        }
        config
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileSystemConfig {
    pub root_directory: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CloudConfig {
    pub bucket: String,
    pub prefix: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl CloudConfig {
    pub fn new(bucket: impl Into<String>, prefix: impl Into<String>, region: Option<&str>) -> Self {
        Self {
            bucket: bucket.into(),
            prefix: prefix.into(),
            region: region.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpfsConfig {
    #[serde(rename = "RemoteAPI")]
    pub remote_api: String,
}

/// Log line encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggingType {
    #[default]
    Logfmt,
    Json,
}

/// Operational logging settings, consumed by the log sink builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoggingConfig {
    #[serde(default)]
    pub logging_type: LoggingType,

    #[serde(default)]
    pub channels: Vec<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            logging_type: LoggingType::Logfmt,
            channels: vec!["info".to_string()],
        }
    }
}
