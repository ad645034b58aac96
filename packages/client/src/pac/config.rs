//! Policy configuration snapshot

use crate::exceptions::DomainExceptions;
use crate::proxy::{ProxyServer, join_proxy_list};
use crate::scripts::PacScriptRecord;

/// Input snapshot for one composition: everything the decision policy
/// needs. Built fresh for every regeneration and never mutated by it.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyConfig {
    /// Upstream proxies in insertion order.
    pub proxies: Vec<ProxyServer>,
    pub exceptions: DomainExceptions,
    /// All script records; disabled ones are skipped during composition.
    pub scripts: Vec<PacScriptRecord>,
    /// The user's activation toggle.
    pub user_proxies_enabled: bool,
    /// Whether user proxies override non-DIRECT script results.
    pub override_pac_scripts: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            proxies: Vec::new(),
            exceptions: DomainExceptions::new(),
            scripts: Vec::new(),
            user_proxies_enabled: false,
            override_pac_scripts: true,
        }
    }
}

impl PolicyConfig {
    /// User proxies participate only when toggled on AND at least one
    /// server exists.
    #[must_use]
    pub fn has_user_proxies(&self) -> bool {
        self.user_proxies_enabled && !self.proxies.is_empty()
    }

    /// Joined proxy token list, present only while user proxies
    /// participate.
    #[must_use]
    pub fn user_proxy_string(&self) -> Option<String> {
        self.has_user_proxies()
            .then(|| join_proxy_list(&self.proxies))
    }

    /// Enabled scripts in their stored order.
    pub fn enabled_scripts(&self) -> impl Iterator<Item = &PacScriptRecord> {
        self.scripts.iter().filter(|script| script.enabled)
    }

    #[must_use]
    pub fn has_enabled_scripts(&self) -> bool {
        self.scripts.iter().any(|script| script.enabled)
    }
}
