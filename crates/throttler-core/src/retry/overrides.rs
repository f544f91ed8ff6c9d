//! Status codes that are always retried.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Immutable set of HTTP status codes treated as retryable regardless of the
/// base policy's verdict.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusOverrideSet(BTreeSet<u16>);

impl StatusOverrideSet {
    pub fn new(codes: impl IntoIterator<Item = u16>) -> Self {
        Self(codes.into_iter().collect())
    }

    /// Set with no overrides: the classifier becomes a pass-through.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn contains(&self, code: u16) -> bool {
        self.0.contains(&code)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Codes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<u16> for StatusOverrideSet {
    fn from_iter<I: IntoIterator<Item = u16>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedups_and_sorts() {
        let set = StatusOverrideSet::new([418, 404, 418]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![404, 418]);
        assert!(set.contains(404));
        assert!(!set.contains(500));
    }

    #[test]
    fn empty_contains_nothing() {
        let set = StatusOverrideSet::empty();
        assert!(set.is_empty());
        assert!(!set.contains(404));
    }
}
