//! Bulk import of domain exceptions
//!
//! An import replaces every entry sharing the imported action while leaving
//! entries with the other action untouched, so importing a "proxy these"
//! list never wipes the user's "never proxy these" list.

use super::types::{DomainExceptions, ExceptionAction};
use super::validation::{DomainListReport, validate_domain_list};

/// Replace all `action` entries in `exceptions` with the valid domains of
/// `domains`. Invalid entries are reported and skipped.
pub fn import_domains(
    exceptions: &mut DomainExceptions,
    domains: &[String],
    action: ExceptionAction,
) -> DomainListReport {
    let report = validate_domain_list(domains.iter().map(String::as_str));

    exceptions.clear_action(action);
    for domain in &report.valid {
        exceptions.set(domain.clone(), action);
    }

    if report.has_errors() {
        tracing::warn!(
            target: "paxy::exceptions",
            skipped = report.invalid.len(),
            imported = report.valid.len(),
            "bulk import skipped invalid domains"
        );
    }

    report
}
