use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::retry::{DefaultRetryPolicy, RetryClassifier, StatusOverrideSet};

/// Invalid retry configuration. Reported at construction, never at decision time.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("max_attempts must not be negative (got {0})")]
    NegativeMaxAttempts(i64),
    #[error("max_attempts {0} exceeds {}", u32::MAX)]
    MaxAttemptsTooLarge(i64),
    #[error("{field} must be a finite, non-negative number of seconds (got {value})")]
    InvalidDelay { field: &'static str, value: f64 },
    #[error("override status code {0} is not an HTTP status (100-599)")]
    InvalidStatusCode(u16),
}

/// Retry policy parameters (`[retry]` section in config.toml).
/// Fields left out of the section take their `Default` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum number of attempts per request (including the first).
    pub max_attempts: i64,
    /// Base delay in seconds for exponential backoff (e.g. 0.25 = 250ms).
    pub base_delay_secs: f64,
    /// Maximum backoff delay in seconds.
    pub max_delay_secs: u64,
    /// Status codes that are always retried, whatever the backoff policy says.
    pub override_status_codes: StatusOverrideSet,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay_secs: 0.25,
            max_delay_secs: 30,
            override_status_codes: StatusOverrideSet::empty(),
        }
    }
}

impl RetryConfig {
    pub fn base_policy(&self) -> Result<DefaultRetryPolicy, ConfigError> {
        let max_attempts = crate::retry::validate_max_attempts(self.max_attempts)?;
        let base_delay = Duration::try_from_secs_f64(self.base_delay_secs).map_err(|_| {
            ConfigError::InvalidDelay {
                field: "base_delay_secs",
                value: self.base_delay_secs,
            }
        })?;
        Ok(DefaultRetryPolicy {
            max_attempts,
            base_delay,
            max_delay: Duration::from_secs(self.max_delay_secs),
        })
    }

    pub fn overrides(&self) -> Result<StatusOverrideSet, ConfigError> {
        if let Some(bad) = self
            .override_status_codes
            .iter()
            .find(|c| !(100..=599).contains(c))
        {
            return Err(ConfigError::InvalidStatusCode(bad));
        }
        Ok(self.override_status_codes.clone())
    }

    /// Build the classifier described by this section.
    pub fn build_classifier(&self) -> Result<RetryClassifier, ConfigError> {
        Ok(RetryClassifier::with_base(
            self.base_policy()?,
            self.overrides()?,
        ))
    }
}

/// Global configuration loaded from `~/.config/throttler/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThrottlerConfig {
    #[serde(default)]
    pub retry: RetryConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("throttler")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from the XDG config file, creating a default one if none exists.
pub fn load_or_init() -> Result<ThrottlerConfig> {
    load_or_init_at(&config_path()?)
}

/// Load configuration from `path`, writing defaults there first if it does not exist.
pub fn load_or_init_at(path: &Path) -> Result<ThrottlerConfig> {
    if !path.exists() {
        let default_cfg = ThrottlerConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: ThrottlerConfig = toml::from_str(&data)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok(cfg)
}
