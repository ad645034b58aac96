//! Proxy URL validation
//!
//! Gate for new proxy entries. Deliberately stricter than the normalizer:
//! the normalizer keeps already-stored values usable no matter what, while
//! validation rejects bad input before it reaches the settings store.

use crate::Url;
use crate::error::ValidationError;

use super::types::ProxyServer;

const SUPPORTED_SCHEMES: [&str; 4] = ["http", "https", "socks4", "socks5"];

/// Validate a user-entered proxy URL against the stored server list and
/// return its trimmed form.
///
/// `exclude_id` skips the record being edited in the duplicate check.
pub fn validate_proxy_url(
    raw: &str,
    existing: &[ProxyServer],
    exclude_id: Option<i64>,
) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::UrlRequired);
    }

    let duplicate = existing
        .iter()
        .any(|proxy| proxy.url.eq_ignore_ascii_case(trimmed) && Some(proxy.id) != exclude_id);
    if duplicate {
        return Err(ValidationError::UrlDuplicate);
    }

    let url = Url::parse(trimmed).map_err(|_| ValidationError::UrlInvalidFormat)?;

    if !SUPPORTED_SCHEMES.contains(&url.scheme()) {
        return Err(ValidationError::UrlInvalidProtocol);
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(ValidationError::UrlInvalidHostname);
    }
    // Ports above 65535 already fail URL parsing; zero is the one in-grammar
    // value that is never routable.
    if url.port() == Some(0) {
        return Err(ValidationError::UrlInvalidPort);
    }

    Ok(trimmed.to_owned())
}
