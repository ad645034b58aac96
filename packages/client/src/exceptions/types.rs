//! Exception map types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Decision stored for a domain pattern.
///
/// "Defer to PAC scripts" is expressed by the pattern being absent from the
/// map, not by a third variant. The wire forms `"yes"` / `"no"` are embedded
/// verbatim in generated PAC text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExceptionAction {
    /// Route the host through the user's proxies.
    #[serde(rename = "yes")]
    Proxy,
    /// Force a direct connection for the host.
    #[serde(rename = "no")]
    Direct,
}

/// Ordered map of domain patterns to exception actions.
///
/// Patterns are either exact hosts (`example.com`) or wildcards
/// (`*.example.com`); wildcard keys keep their `*.` prefix. Backed by a
/// `BTreeMap` so iteration, and with it the emitted PAC text, is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainExceptions {
    entries: BTreeMap<String, ExceptionAction>,
}

impl DomainExceptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or overwrite the action for a pattern.
    pub fn set(&mut self, pattern: impl Into<String>, action: ExceptionAction) {
        self.entries.insert(pattern.into(), action);
    }

    /// Remove a pattern, deferring its hosts back to PAC scripts.
    pub fn remove(&mut self, pattern: &str) -> Option<ExceptionAction> {
        self.entries.remove(pattern)
    }

    /// Exact key lookup; see `matched_action` for host matching.
    #[must_use]
    pub fn get(&self, pattern: &str) -> Option<ExceptionAction> {
        self.entries.get(pattern).copied()
    }

    /// Remove every entry carrying `action`.
    pub fn clear_action(&mut self, action: ExceptionAction) {
        self.entries.retain(|_, value| *value != action);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ExceptionAction)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), *value))
    }
}

impl<K: Into<String>> FromIterator<(K, ExceptionAction)> for DomainExceptions {
    fn from_iter<I: IntoIterator<Item = (K, ExceptionAction)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        }
    }
}
