//! CLI command handlers, one per file.

mod check;
mod config;
mod schedule;

use anyhow::Result;
use clap::Args;
use throttler_core::config::ThrottlerConfig;
use throttler_core::retry::RetryClassifier;

pub use check::run_check;
pub use config::run_config;
pub use schedule::run_schedule;

/// Per-invocation overrides of the `[retry]` config section.
#[derive(Debug, Default, Args)]
pub struct PolicyArgs {
    /// Attempt ceiling (including the first attempt).
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub max_attempts: Option<i64>,

    /// Status code to always retry; repeat for several. Replaces the configured set.
    #[arg(long = "override", value_name = "CODE")]
    pub overrides: Vec<u16>,
}

impl PolicyArgs {
    /// Classifier from the config file with command-line overrides applied.
    pub fn build(&self, cfg: &ThrottlerConfig) -> Result<RetryClassifier> {
        let mut retry = cfg.retry.clone();
        if let Some(n) = self.max_attempts {
            retry.max_attempts = n;
        }
        if !self.overrides.is_empty() {
            retry.override_status_codes = self.overrides.iter().copied().collect();
        }
        Ok(retry.build_classifier()?)
    }
}
