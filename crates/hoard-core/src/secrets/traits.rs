//! Core traits and errors for secret lookup

use thiserror::Error;

/// Errors that can occur while looking up or specifying secrets
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SecretError {
    #[error("no secrets provided to hoard")]
    NoSecrets,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("could not find symmetric secret with ID '{0}'")]
    NotFound(String),

    #[error("got symmetric secret specification '{0}' but must be specified as <PublicID:Passphrase>")]
    InvalidSpec(String),
}

pub type SecretResult<T> = Result<T, SecretError>;

/// Resolves a symmetric secret's PublicID to its passphrase bytes
///
/// Providers are built once at startup and are read-only afterwards.
///
/// # Example
///
/// ```
/// use hoard_core::secrets::{provider_from_config, SecretsConfig, SymmetricSecret};
///
/// let conf = SecretsConfig::with_symmetric(vec![SymmetricSecret::new("k1", "secret")]);
/// let provider = provider_from_config(Some(&conf));
/// assert_eq!(provider.passphrase("k1").unwrap(), b"secret".to_vec());
/// ```
pub trait SymmetricProvider: Send + Sync + std::fmt::Debug {
    /// Human-readable name of this provider
    fn name(&self) -> &str;

    /// Look up the passphrase for `public_id`
    ///
    /// The returned bytes are a copy; mutating them does not affect the provider.
    fn passphrase(&self, public_id: &str) -> SecretResult<Vec<u8>>;

    /// Number of distinct PublicIDs this provider can resolve
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SecretError::NotFound("missing".into()).to_string(),
            "could not find symmetric secret with ID 'missing'"
        );
        assert_eq!(SecretError::NoSecrets.to_string(), "no secrets provided to hoard");
    }
}
