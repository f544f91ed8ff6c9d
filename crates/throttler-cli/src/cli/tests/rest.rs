//! Tests for schedule, config and global options.

use super::parse;
use crate::cli::commands::PolicyArgs;
use crate::cli::{Cli, CliCommand, TransportArg};
use clap::Parser;
use throttler_core::config::ThrottlerConfig;
use throttler_core::retry::{RequestError, RetryPolicy, StatusOverrideSet};

#[test]
fn cli_parse_schedule_defaults() {
    match parse(&["throttler", "schedule"]) {
        CliCommand::Schedule {
            status,
            transport,
            policy,
        } => {
            assert_eq!(status, 503);
            assert!(transport.is_none());
            assert!(policy.max_attempts.is_none());
        }
        _ => panic!("expected Schedule"),
    }
}

#[test]
fn cli_parse_schedule_transport() {
    match parse(&[
        "throttler",
        "schedule",
        "--transport",
        "connection",
        "--max-attempts",
        "3",
    ]) {
        CliCommand::Schedule {
            transport, policy, ..
        } => {
            assert_eq!(transport, Some(TransportArg::Connection));
            assert_eq!(policy.max_attempts, Some(3));
        }
        _ => panic!("expected Schedule with transport"),
    }
}

#[test]
fn cli_schedule_status_conflicts_with_transport() {
    assert!(Cli::try_parse_from([
        "throttler",
        "schedule",
        "--status",
        "500",
        "--transport",
        "timeout"
    ])
    .is_err());
}

#[test]
fn cli_parse_config_with_global_path() {
    let cli = Cli::try_parse_from(["throttler", "config", "--config", "/tmp/t.toml"]).unwrap();
    assert!(matches!(cli.command, CliCommand::Config));
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/t.toml")));
}

#[test]
fn policy_args_replace_configured_overrides() {
    let mut cfg = ThrottlerConfig::default();
    cfg.retry.override_status_codes = StatusOverrideSet::new([404]);
    let args = PolicyArgs {
        max_attempts: Some(2),
        overrides: vec![418],
    };
    let c = args.build(&cfg).unwrap();
    assert_eq!(c.max_attempts(), 2);
    assert!(c.should_retry(&RequestError::Http(418)));
    assert!(!c.should_retry(&RequestError::Http(404)));
}

#[test]
fn policy_args_negative_ceiling_is_config_error() {
    let args = PolicyArgs {
        max_attempts: Some(-1),
        overrides: Vec::new(),
    };
    let err = args.build(&ThrottlerConfig::default()).unwrap_err();
    assert!(err.to_string().contains("must not be negative"));
}
