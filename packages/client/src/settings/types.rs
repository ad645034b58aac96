//! Settings snapshot and patch types

use serde::{Deserialize, Serialize};

use crate::exceptions::DomainExceptions;
use crate::proxy::ProxyServer;

/// Current values of the persisted settings keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsSnapshot {
    pub domain_exceptions: DomainExceptions,
    pub proxies: Vec<ProxyServer>,
    pub proxy_active: bool,
    /// Defaults to true when the key was never written.
    pub override_pac_script: bool,
}

impl Default for SettingsSnapshot {
    fn default() -> Self {
        Self {
            domain_exceptions: DomainExceptions::new(),
            proxies: Vec::new(),
            proxy_active: false,
            override_pac_script: true,
        }
    }
}

/// Partial settings update; `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct SettingsPatch {
    pub domain_exceptions: Option<DomainExceptions>,
    pub proxies: Option<Vec<ProxyServer>>,
    pub proxy_active: Option<bool>,
    pub override_pac_script: Option<bool>,
}

impl SettingsPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_domain_exceptions(mut self, exceptions: DomainExceptions) -> Self {
        self.domain_exceptions = Some(exceptions);
        self
    }

    #[must_use]
    pub fn with_proxies(mut self, proxies: Vec<ProxyServer>) -> Self {
        self.proxies = Some(proxies);
        self
    }

    #[must_use]
    pub fn with_proxy_active(mut self, active: bool) -> Self {
        self.proxy_active = Some(active);
        self
    }

    #[must_use]
    pub fn with_override_pac_script(mut self, override_scripts: bool) -> Self {
        self.override_pac_script = Some(override_scripts);
        self
    }

    /// Fold this patch into a snapshot.
    pub fn apply(self, snapshot: &mut SettingsSnapshot) {
        if let Some(exceptions) = self.domain_exceptions {
            snapshot.domain_exceptions = exceptions;
        }
        if let Some(proxies) = self.proxies {
            snapshot.proxies = proxies;
        }
        if let Some(active) = self.proxy_active {
            snapshot.proxy_active = active;
        }
        if let Some(override_scripts) = self.override_pac_script {
            snapshot.override_pac_script = override_scripts;
        }
    }
}
