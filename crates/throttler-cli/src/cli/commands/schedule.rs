//! `throttler schedule` – per-attempt decisions and delays.

use anyhow::Result;
use std::time::Duration;
use throttler_core::config::ThrottlerConfig;
use throttler_core::retry::{RequestError, RetryContext, RetryPolicy, TransportKind};

use super::PolicyArgs;

/// Rows printed before the schedule is cut short.
const MAX_ROWS: u32 = 64;

/// What the host loop does after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Next {
    RetryAfter(Duration),
    CeilingReached,
    NotRetryable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScheduleRow {
    pub attempt: u32,
    pub next: Next,
}

/// Decision for each attempt failing with `err`, stopping at the first give-up
/// or after [`MAX_ROWS`] rows.
pub(crate) fn schedule_rows(policy: &impl RetryPolicy, err: &RequestError) -> Vec<ScheduleRow> {
    let mut rows = Vec::new();
    for attempt in 1..=MAX_ROWS {
        // The first attempt is always made, even with a ceiling of 0.
        let next = if attempt >= policy.max_attempts() {
            Next::CeilingReached
        } else if !policy.should_retry(err) {
            Next::NotRetryable
        } else {
            Next::RetryAfter(policy.retry_delay(&RetryContext {
                attempt,
                error: err,
            }))
        };
        rows.push(ScheduleRow { attempt, next });
        if !matches!(next, Next::RetryAfter(_)) {
            break;
        }
    }
    rows
}

pub fn run_schedule(
    cfg: &ThrottlerConfig,
    args: &PolicyArgs,
    status: u16,
    transport: Option<TransportKind>,
) -> Result<()> {
    let classifier = args.build(cfg)?;
    let err = match transport {
        Some(kind) => RequestError::transport(kind, "simulated"),
        None => RequestError::Http(status),
    };

    let rows = schedule_rows(&classifier, &err);
    println!("failure: {}", err);
    println!("{:<8} {}", "ATTEMPT", "NEXT");
    for row in &rows {
        let next = match row.next {
            Next::RetryAfter(d) => format!("retry after {:?}", d),
            Next::CeilingReached => "give up (ceiling reached)".to_string(),
            Next::NotRetryable => "give up (not retryable)".to_string(),
        };
        println!("{:<8} {}", row.attempt, next);
    }
    if let Some(ScheduleRow {
        next: Next::RetryAfter(_),
        ..
    }) = rows.last()
    {
        println!(
            "... {} more attempts not shown",
            classifier.max_attempts().saturating_sub(MAX_ROWS)
        );
    }
    Ok(())
}
