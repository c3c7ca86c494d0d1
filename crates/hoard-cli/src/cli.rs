//! CLI argument types for hoard.

use clap::{Args, Parser, Subcommand};
use hoard_core::config::StorageType;
use hoard_core::secrets::SymmetricSecret;
use std::path::PathBuf;

/// A content-addressed deterministically encrypted blob storage system
#[derive(Parser, Debug)]
#[command(name = "hoard", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the startup configuration and secrets, then report them
    Resolve(ResolveArgs),
    /// Print an example configuration (most need editing before use)
    Config(ConfigArgs),
}

/// Arguments for the `resolve` subcommand
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Path to config file; '-' reads config from STDIN
    #[arg(short, long, value_name = "PATH", conflicts_with = "env")]
    pub config: Option<PathBuf>,

    /// Parse the contents of HOARD_JSON_CONFIG as a complete JSON config
    #[arg(short, long)]
    pub env: bool,

    /// Listen address as a URL with the network protocol as scheme,
    /// e.g. 'tcp://localhost:54192' or 'unix:///tmp/hoard.sock'
    #[arg(short, long, value_name = "ADDRESS")]
    pub address: Option<String>,

    /// Report config sources that could not be loaded
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the resolved config as JSON (passphrases redacted)
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `config` subcommand
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Storage backend to generate config for
    #[arg(value_name = "STORAGE_TYPE")]
    pub storage_type: StorageType,

    /// Emit a single line of JSON (suitable for HOARD_JSON_CONFIG)
    #[arg(short, long, conflicts_with = "yaml")]
    pub json: bool,

    /// Emit YAML
    #[arg(short, long)]
    pub yaml: bool,

    /// Write to this file instead of STDOUT
    #[arg(short, long, value_name = "FILE", conflicts_with = "init")]
    pub output: Option<PathBuf>,

    /// Write to the XDG standard config location
    #[arg(short, long)]
    pub init: bool,

    /// Overwrite the output file if it exists
    #[arg(short, long)]
    pub force: bool,

    /// Symmetric secret to include, as PublicID:Passphrase (repeatable)
    #[arg(short, long = "secret", value_name = "PublicID:Passphrase")]
    pub secrets: Vec<SymmetricSecret>,
}
