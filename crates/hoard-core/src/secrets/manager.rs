//! Secret manager handed to the encryption layer

use std::sync::Arc;

use super::openpgp::openpgp_from_config;
use super::symmetric::{provider_from_config, NoopProvider};
use super::traits::{SecretResult, SymmetricProvider};
use super::types::{OpenPgpSecret, SecretsConfig};

/// Bundles the symmetric provider and the (optional) OpenPGP keyring
///
/// Read-only once built; clone it freely, the provider is shared.
#[derive(Debug, Clone)]
pub struct Manager {
    pub provider: Arc<dyn SymmetricProvider>,
    pub openpgp: Option<OpenPgpSecret>,
}

impl Manager {
    /// Wrap already-resolved secrets. Performs no I/O.
    pub fn new(provider: Arc<dyn SymmetricProvider>, openpgp: Option<OpenPgpSecret>) -> Self {
        Self { provider, openpgp }
    }

    /// A manager with no symmetric secrets and PGP disabled
    pub fn noop() -> Self {
        Self::new(Arc::new(NoopProvider::new()), None)
    }

    /// Run both resolvers against a secrets section
    ///
    /// Reads the keyring file if one is configured; an unreadable keyring
    /// leaves PGP disabled.
    pub fn from_config(conf: Option<&SecretsConfig>) -> Self {
        Self::new(provider_from_config(conf), openpgp_from_config(conf))
    }

    /// Shorthand for `self.provider.passphrase(public_id)`
    pub fn passphrase(&self, public_id: &str) -> SecretResult<Vec<u8>> {
        self.provider.passphrase(public_id)
    }

    pub fn openpgp_enabled(&self) -> bool {
        self.openpgp.is_some()
    }
}
