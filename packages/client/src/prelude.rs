//! Paxy Prelude
//!
//! This module contains the essential types that end users need for PAC
//! composition and routing decisions. Only canonical types that are part of
//! the public API belong here.

// Decision policy and PAC emission
pub use crate::pac::{DIRECT, NeverEvaluator, PolicyConfig, RoutePolicy, ScriptEvalError, ScriptEvaluator, compose};

// Upstream proxy servers
pub use crate::proxy::{ProxyServer, join_proxy_list, normalize, validate_proxy_url};

// Domain exception rules
pub use crate::exceptions::{
    DomainExceptions, DomainListReport, ExceptionAction, import_domains, validate_domain,
    validate_domain_list,
};

// Script records, storage and fetching
pub use crate::scripts::{
    FetchError, HttpFetcher, MemoryScriptStore, PacScriptRecord, ScriptDraft, ScriptEdit,
    ScriptFetcher, ScriptInput, ScriptSource, ScriptStore,
};

// Settings boundary
pub use crate::settings::{MemorySettingsStore, SettingsPatch, SettingsSnapshot, SettingsStore};

// Regeneration management
pub use crate::manager::{
    ApplyError, LevelOfControl, ManagerError, PacManager, ProxyConfigApi, ProxySettingsInfo,
    ProxyStatus,
};

// Error types
pub use crate::error::{StoreError, ValidationError};

// URL handling
pub use url::Url;
