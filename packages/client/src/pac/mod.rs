//! PAC composition and the decision policy
//!
//! The decision policy exists twice over the same semantics: once as
//! [`RoutePolicy`], a pure in-process function that can be unit tested
//! without executing generated code, and once as [`compose`], which
//! serializes the equivalent logic into a textual PAC program for the host
//! to run. Emission is a thin formatting layer over the policy; the two
//! must never disagree.

pub mod config;
pub mod emit;
pub mod policy;

// Re-export main types for convenient access
pub use config::PolicyConfig;
pub use emit::compose;
pub use policy::{DIRECT, NeverEvaluator, RoutePolicy, ScriptEvalError, ScriptEvaluator};
