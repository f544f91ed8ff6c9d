//! Integration test: classifier built from TOML config, driven by the host retry loop.

use std::sync::Arc;
use std::thread;

use throttler_core::config::ThrottlerConfig;
use throttler_core::retry::{
    run_with_retry, RequestError, RetryClassifier, RetryPolicy, StatusOverrideSet, TransportKind,
};

fn classifier_from_toml(overrides: &str) -> RetryClassifier {
    let toml = format!(
        r#"
        [retry]
        max_attempts = 4
        base_delay_secs = 0.0
        max_delay_secs = 0
        override_status_codes = {overrides}
        "#
    );
    let cfg: ThrottlerConfig = toml::from_str(&toml).unwrap();
    cfg.retry.build_classifier().unwrap()
}

#[test]
fn not_found_is_retried_until_it_appears() {
    let policy = classifier_from_toml("[404, 418]");
    let mut calls = 0;
    let out = run_with_retry(&policy, || {
        calls += 1;
        if calls < 3 {
            Err(RequestError::Http(404))
        } else {
            Ok(calls)
        }
    });
    assert_eq!(out.unwrap(), 3);
}

#[test]
fn override_still_bounded_by_ceiling() {
    let policy = classifier_from_toml("[418]");
    let mut calls = 0;
    let out: Result<(), _> = run_with_retry(&policy, || {
        calls += 1;
        Err(RequestError::Http(418))
    });
    assert!(matches!(out, Err(RequestError::Http(418))));
    assert_eq!(calls, 4);
}

#[test]
fn without_override_not_found_fails_fast() {
    let policy = classifier_from_toml("[]");
    let mut calls = 0;
    let out: Result<(), _> = run_with_retry(&policy, || {
        calls += 1;
        Err(RequestError::Http(404))
    });
    assert!(out.is_err());
    assert_eq!(calls, 1);
}

#[test]
fn transport_failures_use_base_classification() {
    let policy = classifier_from_toml("[404]");
    let mut calls = 0;
    let out = run_with_retry(&policy, || {
        calls += 1;
        if calls == 1 {
            Err(RequestError::transport(
                TransportKind::Connection,
                "connection reset by peer",
            ))
        } else {
            Ok(())
        }
    });
    assert!(out.is_ok());
    assert_eq!(calls, 2);
}

#[test]
fn shared_between_threads_without_locking() {
    let policy = Arc::new(RetryClassifier::new(3, StatusOverrideSet::new([404, 418])).unwrap());
    let handles: Vec<_> = [404u16, 418, 500, 400]
        .into_iter()
        .map(|code| {
            let policy = Arc::clone(&policy);
            thread::spawn(move || (code, policy.should_retry(&RequestError::Http(code))))
        })
        .collect();
    for h in handles {
        let (code, retry) = h.join().unwrap();
        let expected = matches!(code, 404 | 418 | 500);
        assert_eq!(retry, expected, "code {code}");
    }
}
