//! Outward status surface

use serde::Serialize;

/// Snapshot reported to the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyStatus {
    /// The user's activation toggle as persisted.
    pub is_active: bool,
    /// Activation toggle AND at least one stored proxy server.
    pub user_proxies_enabled: bool,
    pub has_enabled_pac_scripts: bool,
    pub override_pac_script: bool,
    /// Another extension owns the proxy configuration.
    pub is_blocked: bool,
}
