//! Domain pattern validation
//!
//! Label-level validation for exact and wildcard domain patterns, applied
//! before an entry reaches the exception map.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

static DOMAIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(\.[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("domain pattern regex is valid")
});

/// Validate a domain pattern and return its trimmed normalized form.
///
/// Wildcard patterns keep their `*.` prefix; the base domain is validated on
/// its own. Labels follow hostname rules: 1-63 chars, alphanumeric plus
/// inner hyphens, at least two labels overall.
pub fn validate_domain(domain: &str) -> Result<String, ValidationError> {
    let trimmed = domain.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::DomainRequired);
    }

    let is_wildcard = trimmed.starts_with("*.");
    if is_wildcard && trimmed == "*." {
        return Err(ValidationError::DomainInvalidWildcard);
    }
    let to_validate = if is_wildcard { &trimmed[2..] } else { trimmed };

    if !DOMAIN_RE.is_match(to_validate) {
        return Err(ValidationError::DomainInvalidFormat);
    }

    let labels: Vec<&str> = to_validate.split('.').collect();
    if labels.len() < 2 {
        return Err(ValidationError::DomainTooShort);
    }
    for label in labels {
        if label.is_empty() || label.len() > 63 {
            return Err(ValidationError::DomainInvalidFormat);
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(ValidationError::DomainInvalidFormat);
        }
    }

    Ok(trimmed.to_owned())
}

/// Outcome of validating a bulk domain list.
#[derive(Debug, Clone, Default)]
pub struct DomainListReport {
    /// Normalized forms of the entries that passed.
    pub valid: Vec<String>,
    /// Rejected entries paired with their reason code.
    pub invalid: Vec<(String, ValidationError)>,
}

impl DomainListReport {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.invalid.is_empty()
    }
}

/// Validate every entry of a bulk list, collecting both outcomes.
pub fn validate_domain_list<I, S>(domains: I) -> DomainListReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = DomainListReport::default();
    for domain in domains {
        match validate_domain(domain.as_ref()) {
            Ok(normalized) => report.valid.push(normalized),
            Err(error) => report.invalid.push((domain.as_ref().to_owned(), error)),
        }
    }
    report
}
