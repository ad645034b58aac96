//! Exception matching against request hosts
//!
//! Exact keys always win over wildcards. Among wildcard matches the longest
//! base domain wins, with lexicographic order breaking ties, so multiple
//! overlapping patterns resolve the same way on every run.

use super::types::{DomainExceptions, ExceptionAction};

impl DomainExceptions {
    /// Action for `host`, if any pattern matches.
    #[must_use]
    pub fn matched_action(&self, host: &str) -> Option<ExceptionAction> {
        if let Some(action) = self.get(host) {
            return Some(action);
        }

        for pattern in self.wildcard_patterns() {
            let base = &pattern[2..];
            if wildcard_matches(base, host) {
                return self.get(pattern);
            }
        }

        None
    }

    /// Wildcard keys ordered by decreasing base length, then
    /// lexicographically. PAC emission iterates the same order, so the
    /// generated text and the in-process decision agree on tie-breaks.
    #[must_use]
    pub fn wildcard_patterns(&self) -> Vec<&str> {
        let mut patterns: Vec<&str> = self
            .iter()
            .map(|(key, _)| key)
            .filter(|key| key.starts_with("*."))
            .collect();
        patterns.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        patterns
    }
}

/// `*.base` matches the bare base domain and any of its subdomains, never a
/// host that merely ends with the base text (`notexample.com`).
fn wildcard_matches(base: &str, host: &str) -> bool {
    host == base
        || host
            .strip_suffix(base)
            .is_some_and(|prefix| prefix.ends_with('.'))
}
