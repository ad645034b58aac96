//! # Paxy PAC Engine
//!
//! PAC (Proxy Auto-Configuration) synthesis and proxy-routing decision engine.
//! Combines user-configured upstream proxies, per-domain exception rules, and
//! third-party PAC scripts into a single generated PAC program, and exposes the
//! same decision policy as a pure in-process function so the precedence rules
//! can be tested without executing any generated code.
//!
//! ## Decision precedence
//!
//! 1. Domain exceptions (consulted only while user proxies are active)
//! 2. User PAC scripts, in stored order, each isolated from the others
//! 3. `DIRECT`

#![deny(unsafe_code)]
#![warn(clippy::all)]

// Core modules
pub mod error;
pub mod exceptions;
pub mod manager;
pub mod pac;
pub mod proxy;
pub mod scripts;
pub mod settings;

// Prelude with canonical types
pub mod prelude;

// Essential public API - only what end users actually need
pub use crate::prelude::*;
