//! PAC script records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Url;

/// Where a script's content came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "sourceType", content = "sourceUrl", rename_all = "lowercase")]
pub enum ScriptSource {
    /// Content pasted directly by the user.
    Plain,
    /// Content fetched from a remote URL; the URL is kept for reloads.
    Url(Url),
}

/// A stored PAC script.
///
/// Names are unique case-insensitively across the store. `content` is the
/// raw PAC source text (expected to define its own `FindProxyForURL`); for
/// url-sourced records it is the last successfully fetched body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PacScriptRecord {
    pub id: i64,
    pub name: String,
    pub content: String,
    pub enabled: bool,
    #[serde(flatten)]
    pub source: ScriptSource,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PacScriptRecord {
    /// Create a freshly stamped record; the id doubles as the creation
    /// timestamp in milliseconds.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        content: impl Into<String>,
        enabled: bool,
        source: ScriptSource,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_millis(),
            name: name.into(),
            content: content.into(),
            enabled,
            source,
            created_at: now,
            updated_at: now,
        }
    }

    /// Source URL for url-sourced records.
    #[must_use]
    pub fn source_url(&self) -> Option<&Url> {
        match &self.source {
            ScriptSource::Url(url) => Some(url),
            ScriptSource::Plain => None,
        }
    }
}

/// User input for creating a script record.
#[derive(Debug, Clone)]
pub struct ScriptDraft {
    pub name: String,
    pub enabled: bool,
    pub input: ScriptInput,
}

/// Raw content source as entered by the user.
#[derive(Debug, Clone)]
pub enum ScriptInput {
    /// Fetch the content from this URL on submission.
    Url(String),
    /// Use the pasted content as-is.
    Inline(String),
}

/// In-place edit of an existing record. Edits always carry plain content,
/// since the stored body is what gets edited.
#[derive(Debug, Clone)]
pub struct ScriptEdit {
    pub name: String,
    pub content: String,
    pub enabled: bool,
}
