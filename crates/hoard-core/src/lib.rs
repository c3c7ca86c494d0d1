//! Hoard Core
//!
//! Startup-time configuration resolution and secret provisioning for the
//! hoard daemon.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use hoard_core::config::hoard_config_cascade;
//! use hoard_core::logging::ConsoleLogger;
//! use hoard_core::secrets::Manager;
//!
//! let resolved = hoard_config_cascade(false, None, Arc::new(ConsoleLogger::new()), true)
//!     .resolve()?;
//! let mut config = resolved.config;
//! config.override_listen_address(Some("tcp://localhost:54192"));
//!
//! let secrets = Manager::from_config(config.secrets.as_ref());
//! // hand `config` and `secrets` to the server
//! # Ok::<(), hoard_core::config::ConfigError>(())
//! ```

pub mod logging;
pub mod config;
pub mod secrets;

// Re-export commonly used types
pub use config::{
    Cascade, ConfigSource, ConfigError, ConfigResult, HoardConfig, ResolvedConfig,
    hoard_config_cascade,
};

pub use secrets::{
    Manager, SecretsConfig, SymmetricSecret, OpenPgpSecret,
    SymmetricProvider, SecretError, SecretResult,
    provider_from_config, openpgp_from_config,
};

pub use logging::{Logger, SharedLogger, NoOpLogger, ConsoleLogger};
