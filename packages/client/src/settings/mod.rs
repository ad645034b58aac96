//! Settings storage boundary
//!
//! The four persisted settings keys (exceptions, proxies, the activation
//! toggle, and the override toggle) live behind an explicit
//! dependency-injected store handle. No process-wide singletons: whoever
//! builds the manager decides where settings live.

pub mod store;
pub mod types;

// Re-export main types for convenient access
pub use store::{MemorySettingsStore, SettingsStore};
pub use types::{SettingsPatch, SettingsSnapshot};
