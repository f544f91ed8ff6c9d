//! `throttler check` – retry decision per failure.

use anyhow::Result;
use throttler_core::config::ThrottlerConfig;
use throttler_core::retry::{RequestError, RetryClassifier, RetryPolicy, TransportKind};

use super::PolicyArgs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CheckRow {
    pub failure: String,
    pub retry: bool,
    pub overridden: bool,
}

pub(crate) fn check_rows<P: RetryPolicy>(
    classifier: &RetryClassifier<P>,
    codes: &[u16],
    transport: Option<TransportKind>,
) -> Vec<CheckRow> {
    codes
        .iter()
        .map(|&code| RequestError::Http(code))
        .chain(transport.map(|kind| RequestError::transport(kind, "simulated")))
        .map(|err| CheckRow {
            failure: err.to_string(),
            retry: classifier.should_retry(&err),
            overridden: classifier.is_overridden(&err),
        })
        .collect()
}

pub fn run_check(
    cfg: &ThrottlerConfig,
    args: &PolicyArgs,
    codes: &[u16],
    transport: Option<TransportKind>,
) -> Result<()> {
    let classifier = args.build(cfg)?;

    println!("{:<32} {:<6} {}", "FAILURE", "RETRY", "DECIDED BY");
    for row in check_rows(&classifier, codes, transport) {
        println!(
            "{:<32} {:<6} {}",
            row.failure,
            if row.retry { "yes" } else { "no" },
            if row.overridden { "override" } else { "base policy" }
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use throttler_core::retry::StatusOverrideSet;

    #[test]
    fn rows_mark_override_hits() {
        let c = RetryClassifier::new(3, StatusOverrideSet::new([404, 418])).unwrap();
        let rows = check_rows(&c, &[404, 418, 500, 400], None);
        let summary: Vec<_> = rows
            .iter()
            .map(|r| (r.failure.as_str(), r.retry, r.overridden))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("HTTP 404", true, true),
                ("HTTP 418", true, true),
                ("HTTP 500", true, false),
                ("HTTP 400", false, false),
            ]
        );
    }

    #[test]
    fn transport_row_is_decided_by_base() {
        let c = RetryClassifier::new(3, StatusOverrideSet::new([404])).unwrap();
        let rows = check_rows(&c, &[], Some(TransportKind::Timeout));
        assert_eq!(
            rows,
            vec![CheckRow {
                failure: "transport (Timeout): simulated".to_string(),
                retry: true,
                overridden: false,
            }]
        );
    }
}
