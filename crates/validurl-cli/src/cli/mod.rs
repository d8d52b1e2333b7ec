//! CLI for validurl.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use validurl_core::config::{self, ValidatorConfig};

use commands::{run_check, run_config_path, run_registry, CheckOptions};

/// Top-level CLI for validurl.
#[derive(Debug, Parser)]
#[command(name = "validurl")]
#[command(about = "validurl: structural checks for public HTTP(S) URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check one or more URLs; exits non-zero if any is invalid.
    Check {
        /// Candidate URLs (scheme optional, defaults to http://).
        #[arg(required = true)]
        urls: Vec<String>,

        /// Only allow ASCII letters, digits, '-' and '.' in hosts.
        #[arg(long)]
        strict: bool,

        /// Message printed for invalid URLs (overrides config).
        #[arg(long, value_name = "MSG")]
        message: Option<String>,

        /// Registry file to use instead of the configured or built-in one.
        #[arg(long, value_name = "PATH")]
        registry: Option<PathBuf>,
    },

    /// Show the accepted protocols and zone count.
    Registry {
        /// Registry file to use instead of the configured or built-in one.
        #[arg(long, value_name = "PATH")]
        registry: Option<PathBuf>,

        /// List every accepted zone.
        #[arg(long)]
        zones: bool,
    },

    /// Print the config file location.
    ConfigPath,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut out = std::io::stdout().lock();

        match cli.command {
            CliCommand::Check {
                urls,
                strict,
                message,
                registry,
            } => {
                let cfg = load_config()?;
                let opts = CheckOptions {
                    strict,
                    message,
                    registry,
                };
                run_check(&cfg, &opts, &urls, &mut out)?;
            }
            CliCommand::Registry { registry, zones } => {
                let cfg = load_config()?;
                run_registry(&cfg, registry.as_deref(), zones, &mut out)?;
            }
            CliCommand::ConfigPath => run_config_path(&mut out)?,
        }

        Ok(())
    }
}

fn load_config() -> Result<ValidatorConfig> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

#[cfg(test)]
mod tests;
