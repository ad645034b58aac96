//! Script record validation

use crate::Url;
use crate::error::ValidationError;

use super::record::{PacScriptRecord, ScriptDraft, ScriptInput};

/// Validated draft input, ready for storage or fetching.
#[derive(Debug, Clone)]
pub enum ValidatedInput {
    /// Fetch the body from this parsed URL before storing.
    Remote(Url),
    /// Store this trimmed content directly.
    Inline(String),
}

/// Validate a draft against the current records and return its usable input.
///
/// `exclude_id` skips the record being edited in the duplicate-name check.
pub fn validate_script_draft(
    draft: &ScriptDraft,
    existing: &[PacScriptRecord],
    exclude_id: Option<i64>,
) -> Result<ValidatedInput, ValidationError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(ValidationError::NameRequired);
    }

    let duplicate = existing
        .iter()
        .any(|record| record.name.eq_ignore_ascii_case(name) && Some(record.id) != exclude_id);
    if duplicate {
        return Err(ValidationError::NameDuplicate);
    }

    match &draft.input {
        ScriptInput::Url(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Err(ValidationError::UrlRequired);
            }
            let url = Url::parse(trimmed).map_err(|_| ValidationError::UrlInvalidFormat)?;
            Ok(ValidatedInput::Remote(url))
        }
        ScriptInput::Inline(content) => {
            let trimmed = content.trim();
            if trimmed.is_empty() {
                return Err(ValidationError::ContentRequired);
            }
            Ok(ValidatedInput::Inline(trimmed.to_owned()))
        }
    }
}
