//! Error taxonomy
//!
//! Validation failures are rejected synchronously with a specific reason code
//! before any store mutation; only I/O failures (fetch, storage, proxy
//! configuration) propagate to the caller as errors requiring user-visible
//! feedback.

pub mod store;
pub mod validation;

// Re-export main types for convenient access
pub use store::StoreError;
pub use validation::ValidationError;

/// Boxed error alias used at trait boundaries.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
