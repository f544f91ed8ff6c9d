//! Base policy wrapper that always retries a configured set of status codes.

use std::time::Duration;

use super::error::RequestError;
use super::overrides::StatusOverrideSet;
use super::policy::{DefaultRetryPolicy, RetryContext, RetryPolicy};
use crate::config::ConfigError;

/// Retry policy that forces the codes in a [`StatusOverrideSet`] to be
/// retried and delegates everything else to a base policy.
///
/// Only the retry *decision* is overridden; delay and attempt ceiling always
/// come from the base. The base may be borrowed (`&P`) or shared (`Arc<P>`)
/// when the caller owns it.
#[derive(Debug, Clone)]
pub struct RetryClassifier<P = DefaultRetryPolicy> {
    overrides: StatusOverrideSet,
    base: P,
}

impl RetryClassifier {
    /// Classifier over [`DefaultRetryPolicy`] with `max_attempts` as its ceiling.
    ///
    /// A negative `max_attempts` is a configuration error, not clamped.
    pub fn new(max_attempts: i64, overrides: StatusOverrideSet) -> Result<Self, ConfigError> {
        let max_attempts = validate_max_attempts(max_attempts)?;
        Ok(Self::with_base(
            DefaultRetryPolicy::with_max_attempts(max_attempts),
            overrides,
        ))
    }
}

impl<P: RetryPolicy> RetryClassifier<P> {
    pub fn with_base(base: P, overrides: StatusOverrideSet) -> Self {
        Self { overrides, base }
    }

    pub fn overrides(&self) -> &StatusOverrideSet {
        &self.overrides
    }

    pub fn base(&self) -> &P {
        &self.base
    }

    /// True when the error's status code is in the override set.
    /// Transport failures (no status) are never overridden.
    pub fn is_overridden(&self, error: &RequestError) -> bool {
        error
            .status_code()
            .is_some_and(|code| self.overrides.contains(code))
    }
}

impl<P: RetryPolicy> RetryPolicy for RetryClassifier<P> {
    fn should_retry(&self, error: &RequestError) -> bool {
        if self.is_overridden(error) {
            tracing::trace!("{} is in the override set, retrying", error);
            return true;
        }
        self.base.should_retry(error)
    }

    fn retry_delay(&self, ctx: &RetryContext<'_>) -> Duration {
        self.base.retry_delay(ctx)
    }

    fn max_attempts(&self) -> u32 {
        self.base.max_attempts()
    }
}

pub(crate) fn validate_max_attempts(max_attempts: i64) -> Result<u32, ConfigError> {
    if max_attempts < 0 {
        return Err(ConfigError::NegativeMaxAttempts(max_attempts));
    }
    u32::try_from(max_attempts).map_err(|_| ConfigError::MaxAttemptsTooLarge(max_attempts))
}
