//! CLI for argload.

mod commands;

use anyhow::Result;
use argload_core::config;
use clap::{Parser, Subcommand};

use commands::{run_config, run_resolve};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "argload")]
#[command(
    about = "Resolve file://, fileb://, http:// and https:// argument values",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve one argument value and write the result to stdout.
    Resolve {
        /// Parameter name (e.g. user-data).
        param: String,

        /// Argument value; prefixed values are replaced by what they reference.
        value: String,

        /// Service segment of the load event name.
        #[arg(long, default_value = "cli")]
        service: String,

        /// Operation segment of the load event name.
        #[arg(long, default_value = "resolve")]
        operation: String,
    },

    /// Show the config file location and whether URL parameters are followed.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Resolve {
                param,
                value,
                service,
                operation,
            } => run_resolve(cfg, &service, &operation, &param, &value)?,
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
