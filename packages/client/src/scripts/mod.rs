//! PAC script records, storage and fetching
//!
//! Third-party PAC scripts are stored as records with a unique
//! case-insensitive name, an enabled flag, and either pasted or url-sourced
//! content. The composer only ever reads snapshots; the store owns the
//! records exclusively.

pub mod fetch;
pub mod record;
pub mod store;
pub mod validation;

// Re-export main types for convenient access
pub use fetch::{FetchError, HttpFetcher, ScriptFetcher};
pub use record::{PacScriptRecord, ScriptDraft, ScriptEdit, ScriptInput, ScriptSource};
pub use store::{MemoryScriptStore, ScriptStore};
pub use validation::{ValidatedInput, validate_script_draft};
