//! Configuration resolution
//!
//! A [`Cascade`] tries [`ConfigSource`]s in order and keeps the first
//! complete [`HoardConfig`] one of them produces:
//! - `EnvironmentSource`: JSON from `HOARD_JSON_CONFIG`
//! - `FileSource`: explicit path, `-` for stdin; TOML, YAML or JSON
//! - `XdgSource`: `hoard.toml` in the per-user config directory
//! - `DefaultSource`: built-in defaults

mod traits;
mod types;
mod format;
mod env;
mod file;
mod default;
mod cascade;

pub use traits::{ConfigSource, ConfigError, ConfigResult};
pub use types::{
    HoardConfig, StorageConfig, StorageType, FileSystemConfig, CloudConfig, IpfsConfig,
    LoggingConfig, LoggingType, DEFAULT_LISTEN_ADDRESS, DEFAULT_ADDRESS_ENCODING,
};
pub use format::ConfigFormat;
pub use env::{EnvironmentSource, DEFAULT_JSON_CONFIG_ENVIRONMENT_VARIABLE};
pub use file::{
    FileSource, XdgSource, load_config_file, write_config_file,
    STDIN_PLACEHOLDER, DEFAULT_CONFIG_FILE_NAME,
};
pub use default::DefaultSource;
pub use cascade::{Cascade, ResolvedConfig, hoard_config_cascade};
