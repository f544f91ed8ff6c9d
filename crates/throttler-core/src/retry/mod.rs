//! Retry decisions for failed HTTP requests.
//!
//! A [`RetryPolicy`] answers three questions after a failed attempt: retry or
//! not, how long to wait, and how many attempts are allowed overall.
//! [`DefaultRetryPolicy`] is the stock capped exponential backoff;
//! [`RetryClassifier`] wraps any policy and forces a configurable set of
//! status codes to be retried. [`run_with_retry`] is the host-side loop that
//! drives a policy.

mod classifier;
mod classify;
mod error;
mod overrides;
mod policy;
mod run;

pub use classifier::RetryClassifier;
pub use classify::{classify, classify_http_status, classify_transport, ErrorKind};
pub use error::{RequestError, TransportKind};
pub use overrides::StatusOverrideSet;
pub use policy::{DefaultRetryPolicy, RetryContext, RetryPolicy};
pub use run::run_with_retry;

pub(crate) use classifier::validate_max_attempts;
