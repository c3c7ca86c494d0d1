//! `resolve` subcommand: run the startup cascade and report what it found.
//!
//! Performs the same resolution the daemon does before serving: canonical
//! config cascade, listen-address override, secret manager construction.
//! Passphrases and keyring bytes are never printed.

use crate::cli::ResolveArgs;
use anyhow::Context;
use hoard_core::config::{hoard_config_cascade, HoardConfig};
use hoard_core::logging::{ConsoleLogger, SharedLogger};
use hoard_core::secrets::Manager;
use std::sync::Arc;

/// Everything the server needs at startup
#[derive(Debug)]
pub struct Startup {
    pub config: HoardConfig,
    /// Which config source won the cascade
    pub source: String,
    pub secrets: Manager,
}

/// Run the `resolve` subcommand.
///
/// # Errors
///
/// Returns an error if no config source succeeds. With the built-in default
/// last in the cascade that only happens if the default itself is broken.
pub fn run(args: ResolveArgs) -> anyhow::Result<()> {
    let logger: SharedLogger = Arc::new(ConsoleLogger::new());
    let startup = startup(&args, logger)?;

    if args.json {
        println!("{}", redacted(&startup.config).to_json_string()?);
    } else {
        print!("{}", render_summary(&startup));
    }
    Ok(())
}

/// Resolve config and secrets the way the daemon does on start.
pub fn startup(args: &ResolveArgs, logger: SharedLogger) -> anyhow::Result<Startup> {
    let resolved = hoard_config_cascade(args.env, args.config.clone(), logger, args.verbose)
        .resolve()
        .context("Could not get Hoard config")?;

    let mut config = resolved.config;
    config.override_listen_address(args.address.as_deref());
    let secrets = Manager::from_config(config.secrets.as_ref());

    Ok(Startup {
        config,
        source: resolved.source,
        secrets,
    })
}

/// Copy of `config` safe to print
fn redacted(config: &HoardConfig) -> HoardConfig {
    let mut config = config.clone();
    if let Some(secrets) = config.secrets.as_mut() {
        for secret in &mut secrets.symmetric {
            secret.passphrase = "<redacted>".to_string();
        }
        if let Some(pgp) = secrets.openpgp.as_mut() {
            pgp.data = None;
        }
    }
    config
}

fn render_summary(startup: &Startup) -> String {
    let config = &startup.config;
    let storage = config
        .storage
        .as_ref()
        .map(|s| s.storage_type.to_string())
        .unwrap_or_else(|| "<unset>".to_string());
    let logging = config
        .logging
        .as_ref()
        .map(|l| format!("{:?} {:?}", l.logging_type, l.channels).to_lowercase())
        .unwrap_or_else(|| "<unset>".to_string());
    let openpgp = match &startup.secrets.openpgp {
        Some(pgp) => format!("enabled ({})", pgp.private_id),
        None => "disabled".to_string(),
    };

    let mut out = format!("hoard configuration from {}:\n", startup.source);
    out.push_str(&format!("  listen_address    = {}\n", config.listen_address));
    out.push_str(&format!("  storage           = {}\n", storage));
    out.push_str(&format!("  logging           = {}\n", logging));
    out.push_str(&format!("  symmetric_secrets = {}\n", startup.secrets.provider.len()));
    out.push_str(&format!("  openpgp           = {}\n", openpgp));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoard_core::logging::NoOpLogger;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn args(config: Option<&Path>, address: Option<&str>) -> ResolveArgs {
        ResolveArgs {
            config: config.map(Path::to_path_buf),
            env: false,
            address: address.map(str::to_string),
            verbose: false,
            json: false,
        }
    }

    fn quiet() -> SharedLogger {
        Arc::new(NoOpLogger::new())
    }

    #[test]
    fn test_startup_from_file() {
        let dir = tempdir().unwrap();
        let keyring = dir.path().join("keyring.asc");
        fs::write(&keyring, b"keyring").unwrap();
        let path = dir.path().join("hoard.toml");
        fs::write(
            &path,
            format!(
                "ListenAddress = \"tcp://:1234\"\n\n[[Secrets.Symmetric]]\nPublicID = \"k1\"\nPassphrase = \"secret\"\n\n[Secrets.OpenPGP]\nPrivateID = \"signer\"\nFile = {:?}\n",
                keyring.display().to_string()
            ),
        )
        .unwrap();

        let startup = startup(&args(Some(&path), None), quiet()).unwrap();
        assert_eq!(startup.config.listen_address, "tcp://:1234");
        assert!(startup.source.contains("hoard.toml"));
        assert_eq!(startup.secrets.passphrase("k1").unwrap(), b"secret".to_vec());
        assert!(startup.secrets.openpgp_enabled());
    }

    #[test]
    fn test_address_override() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hoard.json");
        fs::write(&path, r#"{"ListenAddress":"tcp://:1234"}"#).unwrap();

        let startup = startup(&args(Some(&path), Some("unix:///tmp/hoard.sock")), quiet()).unwrap();
        assert_eq!(startup.config.listen_address, "unix:///tmp/hoard.sock");
    }

    #[test]
    fn test_summary_hides_secrets() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hoard.json");
        fs::write(
            &path,
            r#"{"ListenAddress":":1234","Secrets":{"Symmetric":[{"PublicID":"k1","Passphrase":"hunter2"}]}}"#,
        )
        .unwrap();

        let startup = startup(&args(Some(&path), None), quiet()).unwrap();
        let summary = render_summary(&startup);
        assert!(summary.contains("listen_address    = :1234"));
        assert!(summary.contains("symmetric_secrets = 1"));
        assert!(summary.contains("openpgp           = disabled"));
        assert!(!summary.contains("hunter2"));

        let json = redacted(&startup.config).to_json_string().unwrap();
        assert!(json.contains("k1"));
        assert!(!json.contains("hunter2"));
    }
}
