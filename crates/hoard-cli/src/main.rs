//! hoard: configuration and secrets front end for the hoard daemon
//!
//! # Subcommands
//!
//! - `resolve`: Run the startup config cascade and report the result
//! - `config`: Print or write an example configuration

use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve(args) => commands::resolve::run(args),
        Commands::Config(args) => commands::config_cmd::run(args),
    }
}
