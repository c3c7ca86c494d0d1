//! Secrets section of the hoard configuration

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::traits::SecretError;

/// Configured secrets
///
/// Symmetric secrets are local to the running daemon; the OpenPGP entry
/// identifies a keyring this instance uses to provide PGP grants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SecretsConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub symmetric: Vec<SymmetricSecret>,

    #[serde(rename = "OpenPGP", default, skip_serializing_if = "Option::is_none")]
    pub openpgp: Option<OpenPgpSecret>,
}

impl SecretsConfig {
    /// Secrets config with only symmetric entries
    pub fn with_symmetric(symmetric: Vec<SymmetricSecret>) -> Self {
        Self {
            symmetric,
            openpgp: None,
        }
    }

    /// Attach an OpenPGP keyring descriptor
    pub fn with_openpgp(mut self, openpgp: OpenPgpSecret) -> Self {
        self.openpgp = Some(openpgp);
        self
    }
}

/// A passphrase known by a public identifier
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymmetricSecret {
    /// Stored in the clear alongside grants made with this secret
    #[serde(rename = "PublicID")]
    pub public_id: String,

    #[serde(rename = "Passphrase")]
    pub passphrase: String,
}

impl SymmetricSecret {
    pub fn new(public_id: impl Into<String>, passphrase: impl Into<String>) -> Self {
        Self {
            public_id: public_id.into(),
            passphrase: passphrase.into(),
        }
    }
}

impl std::fmt::Debug for SymmetricSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymmetricSecret")
            .field("public_id", &self.public_id)
            .field("passphrase", &"<redacted>")
            .finish()
    }
}

/// Parses the `PublicID:Passphrase` form accepted on the command line
///
/// Exactly one colon is allowed; passphrases containing `:` must go in a
/// config file instead.
impl FromStr for SymmetricSecret {
    type Err = SecretError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = spec.split(':').collect();
        match parts.as_slice() {
            [public_id, passphrase] => Ok(Self::new(*public_id, *passphrase)),
            _ => Err(SecretError::InvalidSpec(spec.to_string())),
        }
    }
}

/// An OpenPGP keyring referenced by the configuration
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OpenPgpSecret {
    /// Local, non-secret name for the keyring entity
    #[serde(rename = "PrivateID")]
    pub private_id: String,

    pub file: PathBuf,

    /// Keyring bytes; `None` until the file has been read
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<u8>>,
}

impl OpenPgpSecret {
    pub fn new(private_id: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            private_id: private_id.into(),
            file: file.into(),
            data: None,
        }
    }

    /// Whether keyring bytes have been attached
    pub fn is_loaded(&self) -> bool {
        self.data.is_some()
    }
}

// Keyring bytes stay out of debug output
impl std::fmt::Debug for OpenPgpSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenPgpSecret")
            .field("private_id", &self.private_id)
            .field("file", &self.file)
            .field("data", &self.data.as_ref().map(|d| format!("[{} bytes]", d.len())))
            .finish()
    }
}
