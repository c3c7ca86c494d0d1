//! `config` subcommand: generate example configuration.
//!
//! Prints TOML by default (`--json` for a single JSON line, `--yaml` for
//! YAML). `--output` or `--init` write to a file instead; an existing file is
//! only replaced with `--force`.

use crate::cli::ConfigArgs;
use anyhow::Context;
use hoard_core::config::{
    write_config_file, ConfigError, HoardConfig, StorageConfig, XdgSource,
};
use hoard_core::secrets::SecretsConfig;

/// Run the `config` subcommand.
///
/// # Errors
///
/// Returns an error if the config cannot be encoded, the XDG location cannot
/// be determined, or the output file exists and `--force` was not given.
pub fn run(args: ConfigArgs) -> anyhow::Result<()> {
    let config = build_config(&args);
    let text = render(&config, &args)?;

    let output = if args.init {
        Some(XdgSource::default_path().ok_or(ConfigError::NoConfigDir)?)
    } else {
        args.output.clone()
    };

    match output {
        Some(path) => {
            eprintln!("Writing to config file '{}'", path.display());
            write_config_file(&path, &text, args.force)
                .with_context(|| format!("Error writing config file '{}'", path.display()))?;
        }
        None => print!("{}", text),
    }
    Ok(())
}

fn build_config(args: &ConfigArgs) -> HoardConfig {
    let mut config = HoardConfig::default();
    config.storage = Some(StorageConfig::example(args.storage_type));
    if !args.secrets.is_empty() {
        config.secrets = Some(SecretsConfig::with_symmetric(args.secrets.clone()));
    }
    config
}

fn render(config: &HoardConfig, args: &ConfigArgs) -> anyhow::Result<String> {
    let text = if args.json {
        let mut line = config.to_json_line()?;
        line.push('\n');
        line
    } else if args.yaml {
        config.to_yaml_string()?
    } else {
        config.to_toml_string()?
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use hoard_core::config::{load_config_file, StorageType};
    use std::fs;
    use tempfile::tempdir;

    fn parse(argv: &[&str]) -> ConfigArgs {
        let mut full = vec!["hoard", "config"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).unwrap().command {
            Commands::Config(args) => args,
            other => panic!("expected config, got {:?}", other),
        }
    }

    #[test]
    fn test_build_config_with_secrets() {
        let args = parse(&["filesystem", "-s", "k1:one", "-s", "k1:two"]);
        let config = build_config(&args);

        assert_eq!(config.storage.as_ref().unwrap().storage_type, StorageType::Filesystem);
        let secrets = config.secrets.unwrap();
        // Duplicates are kept as given; the provider decides later
        assert_eq!(secrets.symmetric.len(), 2);
        assert_eq!(secrets.symmetric[1].passphrase, "two");
    }

    #[test]
    fn test_build_config_without_secrets() {
        let config = build_config(&parse(&["memory"]));
        assert!(config.secrets.is_none());
    }

    #[test]
    fn test_render_formats() {
        let args = parse(&["ipfs", "--json"]);
        let config = build_config(&args);
        let json = render(&config, &args).unwrap();
        assert_eq!(json.trim_end().lines().count(), 1);
        assert_eq!(HoardConfig::from_json_str(&json).unwrap(), config);

        let args = parse(&["ipfs", "--yaml"]);
        let yaml = render(&config, &args).unwrap();
        assert_eq!(HoardConfig::from_yaml_str(&yaml).unwrap(), config);

        let args = parse(&["ipfs"]);
        let toml = render(&config, &args).unwrap();
        assert_eq!(HoardConfig::from_toml_str(&toml).unwrap(), config);
    }

    #[test]
    fn test_write_output_needs_force() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hoard.toml");
        let path_arg = path.to_str().unwrap();

        run(parse(&["aws", "-o", path_arg, "-s", "k1:secret"])).unwrap();
        let written = load_config_file(&path).unwrap();
        assert_eq!(written.secrets.unwrap().symmetric[0].public_id, "k1");

        // Second write without --force leaves the file alone
        assert!(run(parse(&["memory", "-o", path_arg])).is_err());
        assert_eq!(
            load_config_file(&path).unwrap().storage.unwrap().storage_type,
            StorageType::Aws
        );

        run(parse(&["memory", "-o", path_arg, "--force"])).unwrap();
        assert_eq!(
            load_config_file(&path).unwrap().storage.unwrap().storage_type,
            StorageType::Memory
        );
        fs::remove_file(&path).unwrap();
    }
}
