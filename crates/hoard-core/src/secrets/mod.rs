//! Secret provisioning
//!
//! Turns the `Secrets` section of a [`HoardConfig`](crate::config::HoardConfig)
//! into the capabilities the encryption layer consumes:
//! - `SymmetricProvider` trait with `NoopProvider` and `TableProvider`
//! - `openpgp_from_config` for loading a keyring into memory
//! - `Manager` bundling both for handoff

mod types;
mod traits;
mod symmetric;
mod openpgp;
mod manager;

pub use types::{SecretsConfig, SymmetricSecret, OpenPgpSecret};
pub use traits::{SymmetricProvider, SecretError, SecretResult};
pub use symmetric::{NoopProvider, TableProvider, provider_from_config};
pub use openpgp::openpgp_from_config;
pub use manager::Manager;
