//! Reason-coded validation errors

use thiserror::Error;

/// Validation failures surfaced to the caller before any store mutation.
///
/// Each variant is a distinct reason code so UI layers can localize the
/// message for the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("script name is required")]
    NameRequired,
    #[error("a script with this name already exists")]
    NameDuplicate,
    #[error("URL is required")]
    UrlRequired,
    #[error("this proxy URL already exists")]
    UrlDuplicate,
    #[error("invalid URL format")]
    UrlInvalidFormat,
    #[error("only HTTP, HTTPS, SOCKS4, and SOCKS5 protocols are supported")]
    UrlInvalidProtocol,
    #[error("hostname is required")]
    UrlInvalidHostname,
    #[error("port must be between 1 and 65535")]
    UrlInvalidPort,
    #[error("script content is required")]
    ContentRequired,
    #[error("domain is required")]
    DomainRequired,
    #[error("invalid wildcard domain")]
    DomainInvalidWildcard,
    #[error("invalid domain format")]
    DomainInvalidFormat,
    #[error("domain must have at least two labels")]
    DomainTooShort,
}
