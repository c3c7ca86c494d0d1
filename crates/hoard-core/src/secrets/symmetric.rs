//! Symmetric passphrase providers

use std::collections::HashMap;
use std::sync::Arc;

use zeroize::Zeroizing;

use super::traits::{SecretError, SecretResult, SymmetricProvider};
use super::types::SecretsConfig;

/// Provider used when no symmetric secrets are configured
///
/// Every lookup fails with [`SecretError::NoSecrets`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProvider;

impl NoopProvider {
    pub fn new() -> Self {
        Self
    }
}

impl SymmetricProvider for NoopProvider {
    fn name(&self) -> &str {
        "noop"
    }

    fn passphrase(&self, _public_id: &str) -> SecretResult<Vec<u8>> {
        Err(SecretError::NoSecrets)
    }

    fn len(&self) -> usize {
        0
    }
}

/// Provider backed by a PublicID to passphrase table built once from config
pub struct TableProvider {
    secrets: HashMap<String, Zeroizing<Vec<u8>>>,
}

impl TableProvider {
    /// Build the table from an ordered list of secrets
    ///
    /// A PublicID that appears more than once keeps the passphrase of its
    /// last occurrence.
    pub fn from_config(conf: &SecretsConfig) -> Self {
        let mut secrets = HashMap::with_capacity(conf.symmetric.len());
        for secret in &conf.symmetric {
            secrets.insert(
                secret.public_id.clone(),
                Zeroizing::new(secret.passphrase.as_bytes().to_vec()),
            );
        }
        Self { secrets }
    }
}

impl SymmetricProvider for TableProvider {
    fn name(&self) -> &str {
        "table"
    }

    fn passphrase(&self, public_id: &str) -> SecretResult<Vec<u8>> {
        if public_id.is_empty() {
            return Err(SecretError::InvalidArgument(
                "empty secret ID passed to provider".to_string(),
            ));
        }
        self.secrets
            .get(public_id)
            .map(|bytes| bytes.to_vec())
            .ok_or_else(|| SecretError::NotFound(public_id.to_string()))
    }

    fn len(&self) -> usize {
        self.secrets.len()
    }
}

// Passphrases stay out of debug output
impl std::fmt::Debug for TableProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids: Vec<&String> = self.secrets.keys().collect();
        ids.sort();
        f.debug_struct("TableProvider")
            .field("public_ids", &ids)
            .finish()
    }
}

/// Build the symmetric provider for a (possibly absent) secrets section
pub fn provider_from_config(conf: Option<&SecretsConfig>) -> Arc<dyn SymmetricProvider> {
    match conf {
        Some(conf) if !conf.symmetric.is_empty() => Arc::new(TableProvider::from_config(conf)),
        _ => Arc::new(NoopProvider::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secrets::SymmetricSecret;

    fn secrets(pairs: &[(&str, &str)]) -> SecretsConfig {
        SecretsConfig::with_symmetric(
            pairs.iter().map(|(id, pass)| SymmetricSecret::new(*id, *pass)).collect(),
        )
    }

    #[test]
    fn test_absent_config_is_noop() {
        let provider = provider_from_config(None);
        assert_eq!(provider.name(), "noop");
        assert_eq!(provider.passphrase("anything"), Err(SecretError::NoSecrets));
        assert!(provider.is_empty());
    }

    #[test]
    fn test_empty_list_is_noop() {
        let conf = SecretsConfig::default();
        let provider = provider_from_config(Some(&conf));
        assert_eq!(provider.name(), "noop");
        // Even the empty ID reports "no secrets" rather than invalid argument
        assert_eq!(provider.passphrase(""), Err(SecretError::NoSecrets));
    }

    #[test]
    fn test_lookup() {
        let provider = provider_from_config(Some(&secrets(&[("k1", "secret"), ("k2", "other")])));
        assert_eq!(provider.name(), "table");
        assert_eq!(provider.len(), 2);
        assert_eq!(provider.passphrase("k1").unwrap(), b"secret".to_vec());
        assert_eq!(provider.passphrase("k2").unwrap(), b"other".to_vec());
    }

    #[test]
    fn test_duplicate_public_id_last_wins() {
        let provider = provider_from_config(Some(&secrets(&[("A", "p1"), ("A", "p2")])));
        assert_eq!(provider.passphrase("A").unwrap(), b"p2".to_vec());
        assert_eq!(provider.len(), 1);
    }

    #[test]
    fn test_empty_id_is_invalid_argument() {
        let provider = provider_from_config(Some(&secrets(&[("k1", "secret")])));
        let err = provider.passphrase("").unwrap_err();
        assert!(matches!(err, SecretError::InvalidArgument(_)));
    }

    #[test]
    fn test_missing_id_is_not_found() {
        let provider = provider_from_config(Some(&secrets(&[("k1", "secret")])));
        assert_eq!(
            provider.passphrase("missing"),
            Err(SecretError::NotFound("missing".to_string()))
        );
    }

    #[test]
    fn test_returned_bytes_are_a_copy() {
        let provider = provider_from_config(Some(&secrets(&[("k1", "secret")])));
        let mut first = provider.passphrase("k1").unwrap();
        first[0] = b'X';
        assert_eq!(provider.passphrase("k1").unwrap(), b"secret".to_vec());
    }

    #[test]
    fn test_table_unaffected_by_later_config_changes() {
        let mut conf = secrets(&[("k1", "secret")]);
        let provider = TableProvider::from_config(&conf);
        conf.symmetric[0].passphrase = "changed".to_string();
        assert_eq!(provider.passphrase("k1").unwrap(), b"secret".to_vec());
    }

    #[test]
    fn test_debug_lists_ids_only() {
        let provider = TableProvider::from_config(&secrets(&[("k2", "two"), ("k1", "one")]));
        let debug = format!("{:?}", provider);
        assert_eq!(debug, r#"TableProvider { public_ids: ["k1", "k2"] }"#);
    }

    #[test]
    fn test_provider_shared_across_threads() {
        let provider = provider_from_config(Some(&secrets(&[("k1", "secret")])));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let provider = Arc::clone(&provider);
                std::thread::spawn(move || provider.passphrase("k1").unwrap())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), b"secret".to_vec());
        }
    }
}
