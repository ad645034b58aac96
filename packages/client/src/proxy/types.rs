//! Core proxy server types

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A user-configured upstream proxy server.
///
/// The `id` doubles as the creation timestamp in milliseconds. Insertion
/// order of the surrounding sequence decides the order servers appear in the
/// generated PAC proxy list, so the list is a `Vec`, never a map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyServer {
    pub id: i64,
    pub url: String,
}

impl ProxyServer {
    #[must_use]
    pub fn new(id: i64, url: impl Into<String>) -> Self {
        Self {
            id,
            url: url.into(),
        }
    }

    /// Create a server stamped with the current time, matching how records
    /// are created from user input.
    #[must_use]
    pub fn created_now(url: impl Into<String>) -> Self {
        Self::new(Utc::now().timestamp_millis(), url)
    }
}
