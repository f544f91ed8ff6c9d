//! CLI for inspecting throttler retry policies.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use throttler_core::config;
use throttler_core::retry::TransportKind;

use commands::{run_check, run_config, run_schedule, PolicyArgs};

/// Top-level CLI for throttler.
#[derive(Debug, Parser)]
#[command(name = "throttler")]
#[command(about = "Throttler: inspect retry decisions and backoff schedules", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/throttler/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Transport failure to classify (no HTTP status).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TransportArg {
    Timeout,
    Connection,
    Other,
}

impl From<TransportArg> for TransportKind {
    fn from(arg: TransportArg) -> Self {
        match arg {
            TransportArg::Timeout => TransportKind::Timeout,
            TransportArg::Connection => TransportKind::Connection,
            TransportArg::Other => TransportKind::Other,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Show whether failures with the given status codes would be retried.
    Check {
        /// HTTP status codes of the failed attempts.
        #[arg(required_unless_present = "transport")]
        codes: Vec<u16>,

        /// Also classify a transport failure of this kind.
        #[arg(long, value_enum)]
        transport: Option<TransportArg>,

        #[command(flatten)]
        policy: PolicyArgs,
    },

    /// Print the decision and delay for each attempt up to the ceiling.
    Schedule {
        /// Status code every attempt fails with.
        #[arg(long, default_value = "503", conflicts_with = "transport")]
        status: u16,

        /// Fail every attempt with this transport error instead of a status.
        #[arg(long, value_enum)]
        transport: Option<TransportArg>,

        #[command(flatten)]
        policy: PolicyArgs,
    },

    /// Print the config file path and the effective configuration.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let path = match cli.config {
            Some(path) => path,
            None => config::config_path()?,
        };
        let cfg = config::load_or_init_at(&path)?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Check {
                codes,
                transport,
                policy,
            } => run_check(&cfg, &policy, &codes, transport.map(Into::into))?,
            CliCommand::Schedule {
                status,
                transport,
                policy,
            } => run_schedule(&cfg, &policy, status, transport.map(Into::into))?,
            CliCommand::Config => run_config(&cfg, &path)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
