//! Retry loop: run a closure until success or policy says stop.

use super::error::RequestError;
use super::policy::{RetryContext, RetryPolicy};

/// Runs a closure until it succeeds or the retry policy says to stop.
/// On retryable failure, sleeps for the policy's delay then tries again.
///
/// The first attempt is always made; a ceiling of 0 or 1 means no retries.
pub fn run_with_retry<P, T, F>(policy: &P, mut f: F) -> Result<T, RequestError>
where
    P: RetryPolicy + ?Sized,
    F: FnMut() -> Result<T, RequestError>,
{
    let mut attempt = 1u32;
    loop {
        match f() {
            Ok(v) => return Ok(v),
            Err(e) => {
                if attempt >= policy.max_attempts() || !policy.should_retry(&e) {
                    tracing::debug!("giving up after attempt {}: {}", attempt, e);
                    return Err(e);
                }
                let delay = policy.retry_delay(&RetryContext {
                    attempt,
                    error: &e,
                });
                tracing::warn!(
                    "attempt {} failed ({}), retrying in {:?}",
                    attempt,
                    e,
                    delay
                );
                std::thread::sleep(delay);
                attempt += 1;
            }
        }
    }
}
