//! Proxy-configuration boundary
//!
//! The host network stack that accepts a generated PAC program and applies
//! it to outgoing requests. Another actor can own the configuration; that
//! state is reported as a status flag, never treated as an error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::BoxError;

/// Who currently controls the proxy configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelOfControl {
    NotControllable,
    /// Another extension owns the configuration; our writes are
    /// ineffective and must be surfaced to the user.
    ControlledByOtherExtensions,
    #[default]
    ControllableByThisExtension,
    ControlledByThisExtension,
}

/// Result of querying the proxy-configuration subsystem.
#[derive(Debug, Clone, Default)]
pub struct ProxySettingsInfo {
    pub level_of_control: LevelOfControl,
}

/// Failure applying or clearing the PAC configuration.
#[derive(Debug, Error)]
pub enum ApplyError {
    #[error("proxy configuration rejected: {0}")]
    Rejected(String),
    #[error("proxy configuration backend error: {0}")]
    Backend(BoxError),
}

/// Host proxy-configuration API.
#[allow(async_fn_in_trait)]
pub trait ProxyConfigApi {
    /// Install `pac_text` as the active PAC script.
    async fn apply(&self, pac_text: &str) -> Result<(), ApplyError>;

    /// Remove any configuration this engine installed.
    async fn clear(&self) -> Result<(), ApplyError>;

    /// Current configuration ownership.
    async fn get(&self) -> Result<ProxySettingsInfo, ApplyError>;
}
