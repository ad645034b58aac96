//! Paxy Public API
//!
//! PAC (Proxy Auto-Configuration) synthesis and proxy-routing decision
//! engine with a fluent builder surface. Assemble upstream proxies, domain
//! exceptions, and third-party PAC scripts; get back either a pure decision
//! function, the generated PAC program text, or a full regeneration manager
//! wired to your proxy-configuration backend.
//!
//! ## Usage
//!
//! ```
//! use paxy::{ExceptionAction, Paxy};
//!
//! let pac_text = Paxy::builder()
//!     .proxy("http://p:8080")
//!     .exception("*.internal.example.com", ExceptionAction::Direct)
//!     .active(true)
//!     .compose();
//!
//! assert!(pac_text.contains("function FindProxyForURL(url, host)"));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

// Re-export all public API components
pub use builder::PaxyBuilder;

// Re-export important types from client package
pub use paxy_client::{
    ApplyError, DIRECT, DomainExceptions, DomainListReport, ExceptionAction, FetchError,
    HttpFetcher, LevelOfControl, ManagerError, MemoryScriptStore, MemorySettingsStore,
    NeverEvaluator, PacManager, PacScriptRecord, PolicyConfig, ProxyConfigApi, ProxyServer,
    ProxySettingsInfo, ProxyStatus, RoutePolicy, ScriptDraft, ScriptEdit, ScriptEvalError,
    ScriptEvaluator, ScriptFetcher, ScriptInput, ScriptSource, ScriptStore, SettingsPatch,
    SettingsSnapshot, SettingsStore, StoreError, Url, ValidationError, compose, join_proxy_list,
    normalize,
};

/// Main entry point providing static builder constructors.
pub struct Paxy;

impl Paxy {
    /// Start a policy builder.
    ///
    /// Shorthand for `PaxyBuilder::new()`
    #[must_use]
    pub fn builder() -> PaxyBuilder {
        PaxyBuilder::new()
    }
}
