use std::sync::Arc;
use std::time::Duration;

use super::classify::classify;
use super::error::RequestError;

/// Context for computing the delay before the next attempt.
#[derive(Debug, Clone, Copy)]
pub struct RetryContext<'a> {
    /// 1-based number of the attempt that just failed.
    pub attempt: u32,
    /// Error the attempt failed with.
    pub error: &'a RequestError,
}

/// Retry capability a request client consults after each failed attempt.
///
/// Implementations must be pure decisions: the caller owns attempt counting,
/// sleeping and the retry loop itself (see [`run_with_retry`](super::run_with_retry)).
pub trait RetryPolicy {
    /// Whether the failed attempt is worth retrying.
    fn should_retry(&self, error: &RequestError) -> bool;

    /// Delay before the next attempt.
    fn retry_delay(&self, ctx: &RetryContext<'_>) -> Duration;

    /// Maximum number of attempts (including the first).
    fn max_attempts(&self) -> u32;
}

impl<P: RetryPolicy + ?Sized> RetryPolicy for &P {
    fn should_retry(&self, error: &RequestError) -> bool {
        (**self).should_retry(error)
    }

    fn retry_delay(&self, ctx: &RetryContext<'_>) -> Duration {
        (**self).retry_delay(ctx)
    }

    fn max_attempts(&self) -> u32 {
        (**self).max_attempts()
    }
}

impl<P: RetryPolicy + ?Sized> RetryPolicy for Box<P> {
    fn should_retry(&self, error: &RequestError) -> bool {
        (**self).should_retry(error)
    }

    fn retry_delay(&self, ctx: &RetryContext<'_>) -> Duration {
        (**self).retry_delay(ctx)
    }

    fn max_attempts(&self) -> u32 {
        (**self).max_attempts()
    }
}

impl<P: RetryPolicy + ?Sized> RetryPolicy for Arc<P> {
    fn should_retry(&self, error: &RequestError) -> bool {
        (**self).should_retry(error)
    }

    fn retry_delay(&self, ctx: &RetryContext<'_>) -> Duration {
        (**self).retry_delay(ctx)
    }

    fn max_attempts(&self) -> u32 {
        (**self).max_attempts()
    }
}

/// Simple exponential backoff policy with caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultRetryPolicy {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    /// Base delay for backoff.
    pub base_delay: Duration,
    /// Upper bound on backoff delay.
    pub max_delay: Duration,
}

impl Default for DefaultRetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(30),
        }
    }
}

impl DefaultRetryPolicy {
    /// Default backoff with the given attempt ceiling.
    pub fn with_max_attempts(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            ..Self::default()
        }
    }

    /// Backoff for a 1-based attempt: base * 2^(attempt-1), capped.
    pub fn backoff(&self, attempt: u32) -> Duration {
        let exp = 1u32 << attempt.saturating_sub(1).min(8);
        self.base_delay.saturating_mul(exp).min(self.max_delay)
    }
}

impl RetryPolicy for DefaultRetryPolicy {
    fn should_retry(&self, error: &RequestError) -> bool {
        classify(error).is_retryable()
    }

    fn retry_delay(&self, ctx: &RetryContext<'_>) -> Duration {
        self.backoff(ctx.attempt)
    }

    fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}
