//! Builder for assembling policies, PAC text, and managers

use paxy_client::{
    ExceptionAction, HttpFetcher, MemoryScriptStore, MemorySettingsStore, PacManager,
    PacScriptRecord, PolicyConfig, ProxyConfigApi, ProxyServer, RoutePolicy, ScriptSource,
    ScriptStore, SettingsSnapshot,
};

/// Fluent builder over the policy configuration.
///
/// Terminal methods: [`policy`](Self::policy) for the pure decision
/// function, [`compose`](Self::compose) for the generated PAC program, and
/// [`manager`](Self::manager) for a full regeneration manager over the
/// in-memory stores.
#[derive(Debug, Default)]
pub struct PaxyBuilder {
    config: PolicyConfig,
    next_id: i64,
}

impl PaxyBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an upstream proxy server.
    #[must_use]
    pub fn proxy(mut self, url: impl Into<String>) -> Self {
        self.next_id += 1;
        self.config
            .proxies
            .push(ProxyServer::new(self.next_id, url));
        self
    }

    /// Set the exception action for a domain pattern (exact host or
    /// `*.`-prefixed wildcard).
    #[must_use]
    pub fn exception(mut self, pattern: impl Into<String>, action: ExceptionAction) -> Self {
        self.config.exceptions.set(pattern, action);
        self
    }

    /// Append a PAC script record with pasted content.
    #[must_use]
    pub fn script(
        mut self,
        name: impl Into<String>,
        content: impl Into<String>,
        enabled: bool,
    ) -> Self {
        self.next_id += 1;
        let mut record = PacScriptRecord::new(name, content, enabled, ScriptSource::Plain);
        record.id = self.next_id;
        self.config.scripts.push(record);
        self
    }

    /// Toggle user proxies on or off.
    #[must_use]
    pub fn active(mut self, active: bool) -> Self {
        self.config.user_proxies_enabled = active;
        self
    }

    /// Whether user proxies override non-DIRECT script results. Defaults to
    /// true.
    #[must_use]
    pub fn override_pac_scripts(mut self, override_scripts: bool) -> Self {
        self.config.override_pac_scripts = override_scripts;
        self
    }

    /// The assembled configuration snapshot.
    #[must_use]
    pub fn config(self) -> PolicyConfig {
        self.config
    }

    /// Pure decision function over the assembled configuration.
    #[must_use]
    pub fn policy(self) -> RoutePolicy {
        RoutePolicy::from_config(&self.config)
    }

    /// Generated PAC program for the assembled configuration.
    #[must_use]
    pub fn compose(self) -> String {
        paxy_client::compose(&self.config)
    }

    /// Full manager over in-memory stores and the default HTTP fetcher.
    #[must_use]
    pub fn manager<P: ProxyConfigApi>(
        self,
        proxy_api: P,
    ) -> PacManager<MemorySettingsStore, MemoryScriptStore, P, HttpFetcher> {
        let snapshot = SettingsSnapshot {
            domain_exceptions: self.config.exceptions,
            proxies: self.config.proxies,
            proxy_active: self.config.user_proxies_enabled,
            override_pac_script: self.config.override_pac_scripts,
        };
        let settings = MemorySettingsStore::with_snapshot(snapshot);

        let scripts = MemoryScriptStore::new();
        for record in self.config.scripts {
            if let Err(error) = scripts.add(record) {
                tracing::warn!(target: "paxy::builder", %error, "skipping script record");
            }
        }

        PacManager::new(settings, scripts, proxy_api, HttpFetcher::new())
    }
}
