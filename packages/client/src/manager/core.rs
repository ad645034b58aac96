//! Regeneration driver
//!
//! Reads the settings and script stores, composes the PAC program, and
//! pushes it to the proxy-configuration boundary. Regenerations are
//! serialized behind a lock so overlapping triggers cannot interleave
//! writes to the host's single current-PAC resource; the applied flag flips
//! only after the host confirms, never optimistically.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::error::{StoreError, ValidationError};
use crate::exceptions::{DomainListReport, ExceptionAction, import_domains, validate_domain};
use crate::pac::{PolicyConfig, compose};
use crate::proxy::{ProxyServer, validate_proxy_url};
use crate::scripts::{
    FetchError, PacScriptRecord, ScriptDraft, ScriptEdit, ScriptFetcher, ScriptSource,
    ScriptStore, ValidatedInput, validate_script_draft,
};
use crate::settings::{SettingsPatch, SettingsSnapshot, SettingsStore};

use super::proxy_api::{LevelOfControl, ProxyConfigApi};
use super::status::ProxyStatus;

/// Errors from manager operations.
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Apply(#[from] super::proxy_api::ApplyError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Drives PAC regeneration over dependency-injected collaborators: a
/// settings store, a script record store, the host proxy-configuration API,
/// and a fetcher for url-sourced scripts.
pub struct PacManager<S, R, P, F> {
    settings: S,
    scripts: R,
    proxy_api: P,
    fetcher: F,
    apply_lock: Mutex<()>,
    pac_applied: AtomicBool,
}

impl<S, R, P, F> fmt::Debug for PacManager<S, R, P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PacManager")
            .field("pac_applied", &self.pac_applied.load(Ordering::Acquire))
            .finish_non_exhaustive()
    }
}

impl<S, R, P, F> PacManager<S, R, P, F>
where
    S: SettingsStore,
    R: ScriptStore,
    P: ProxyConfigApi,
    F: ScriptFetcher,
{
    pub fn new(settings: S, scripts: R, proxy_api: P, fetcher: F) -> Self {
        Self {
            settings,
            scripts,
            proxy_api,
            fetcher,
            apply_lock: Mutex::new(()),
            pac_applied: AtomicBool::new(false),
        }
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    pub fn scripts(&self) -> &R {
        &self.scripts
    }

    pub fn proxy_api(&self) -> &P {
        &self.proxy_api
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Whether a generated PAC program is currently installed, as confirmed
    /// by the host.
    #[must_use]
    pub fn is_pac_applied(&self) -> bool {
        self.pac_applied.load(Ordering::Acquire)
    }

    fn policy_config(snapshot: SettingsSnapshot, scripts: Vec<PacScriptRecord>) -> PolicyConfig {
        PolicyConfig {
            user_proxies_enabled: snapshot.proxy_active,
            proxies: snapshot.proxies,
            exceptions: snapshot.domain_exceptions,
            scripts,
            override_pac_scripts: snapshot.override_pac_script,
        }
    }

    /// Recompose and push the PAC program, or clear the configuration when
    /// nothing is enabled. Overlapping calls are serialized; last write
    /// wins.
    pub async fn update(&self) -> Result<(), ManagerError> {
        let _guard = self.apply_lock.lock().await;

        let snapshot = self.settings.get()?;
        let records = self.scripts.get_all()?;
        let config = Self::policy_config(snapshot, records);

        if !config.has_user_proxies() && !config.has_enabled_scripts() {
            self.proxy_api.clear().await?;
            self.pac_applied.store(false, Ordering::Release);
            tracing::debug!(target: "paxy::manager", "nothing enabled, proxy configuration cleared");
            return Ok(());
        }

        let pac_text = compose(&config);
        self.proxy_api.apply(&pac_text).await?;
        self.pac_applied.store(true, Ordering::Release);
        tracing::debug!(
            target: "paxy::manager",
            proxies = config.proxies.len(),
            scripts = config.enabled_scripts().count(),
            "PAC program applied"
        );
        Ok(())
    }

    /// Reapply persisted state, e.g. on startup.
    pub async fn bootstrap(&self) -> Result<(), ManagerError> {
        let snapshot = self.settings.get()?;
        let records = self.scripts.get_all()?;
        let config = Self::policy_config(snapshot, records);
        if config.has_user_proxies() || config.has_enabled_scripts() {
            self.update().await?;
        }
        Ok(())
    }

    /// Turn user proxies on, optionally replacing the stored server list.
    pub async fn activate(&self, proxies: Option<Vec<ProxyServer>>) -> Result<(), ManagerError> {
        let mut patch = SettingsPatch::new().with_proxy_active(true);
        if let Some(proxies) = proxies {
            patch = patch.with_proxies(proxies);
        }
        self.settings.set(patch)?;
        self.update().await
    }

    /// Turn user proxies off. The PAC program stays installed while enabled
    /// scripts remain; otherwise the configuration is cleared.
    pub async fn deactivate(&self) -> Result<(), ManagerError> {
        self.settings
            .set(SettingsPatch::new().with_proxy_active(false))?;
        self.update().await
    }

    /// Outward status: store state plus configuration ownership.
    pub async fn status(&self) -> Result<ProxyStatus, ManagerError> {
        let info = self.proxy_api.get().await?;
        let snapshot = self.settings.get()?;
        let records = self.scripts.get_all()?;

        Ok(ProxyStatus {
            is_active: snapshot.proxy_active,
            user_proxies_enabled: snapshot.proxy_active && !snapshot.proxies.is_empty(),
            has_enabled_pac_scripts: records.iter().any(|record| record.enabled),
            override_pac_script: snapshot.override_pac_script,
            is_blocked: info.level_of_control == LevelOfControl::ControlledByOtherExtensions,
        })
    }

    /// Validate and append a proxy server.
    pub async fn add_proxy(&self, raw_url: &str) -> Result<ProxyServer, ManagerError> {
        let snapshot = self.settings.get()?;
        let url = validate_proxy_url(raw_url, &snapshot.proxies, None)?;

        let server = ProxyServer::created_now(url);
        let mut proxies = snapshot.proxies;
        proxies.push(server.clone());
        self.settings
            .set(SettingsPatch::new().with_proxies(proxies))?;
        self.update().await?;
        Ok(server)
    }

    /// Replace the URL of a stored proxy server.
    pub async fn edit_proxy(&self, id: i64, raw_url: &str) -> Result<(), ManagerError> {
        let snapshot = self.settings.get()?;
        let url = validate_proxy_url(raw_url, &snapshot.proxies, Some(id))?;

        let mut proxies = snapshot.proxies;
        let server = proxies
            .iter_mut()
            .find(|proxy| proxy.id == id)
            .ok_or(StoreError::NotFound(id))?;
        server.url = url;
        self.settings
            .set(SettingsPatch::new().with_proxies(proxies))?;
        self.update().await
    }

    pub async fn remove_proxy(&self, id: i64) -> Result<(), ManagerError> {
        let snapshot = self.settings.get()?;
        let mut proxies = snapshot.proxies;
        let before = proxies.len();
        proxies.retain(|proxy| proxy.id != id);
        if proxies.len() == before {
            return Err(StoreError::NotFound(id).into());
        }
        self.settings
            .set(SettingsPatch::new().with_proxies(proxies))?;
        self.update().await
    }

    /// Set or clear the exception for one domain pattern. `None` removes
    /// the entry, deferring the host back to PAC scripts.
    pub async fn set_exception(
        &self,
        domain: &str,
        action: Option<ExceptionAction>,
    ) -> Result<(), ManagerError> {
        let normalized = validate_domain(domain)?;
        let snapshot = self.settings.get()?;
        let mut exceptions = snapshot.domain_exceptions;
        match action {
            Some(action) => exceptions.set(normalized, action),
            None => {
                exceptions.remove(&normalized);
            }
        }
        self.settings
            .set(SettingsPatch::new().with_domain_exceptions(exceptions))?;
        self.update().await
    }

    /// Bulk-import domains for one action: replaces existing entries with
    /// that action, preserves entries with the other, reports invalid
    /// lines.
    pub async fn import_exceptions(
        &self,
        domains: &[String],
        action: ExceptionAction,
    ) -> Result<DomainListReport, ManagerError> {
        let snapshot = self.settings.get()?;
        let mut exceptions = snapshot.domain_exceptions;
        let report = import_domains(&mut exceptions, domains, action);
        self.settings
            .set(SettingsPatch::new().with_domain_exceptions(exceptions))?;
        self.update().await?;
        Ok(report)
    }

    /// Validate, fetch (for url-sourced drafts), store, and regenerate.
    ///
    /// A fetch failure aborts before any store mutation.
    pub async fn add_script(&self, draft: ScriptDraft) -> Result<PacScriptRecord, ManagerError> {
        let existing = self.scripts.get_all()?;
        let input = validate_script_draft(&draft, &existing, None)?;

        let (content, source) = match input {
            ValidatedInput::Remote(url) => {
                let body = self.fetcher.fetch(&url).await?;
                (body, ScriptSource::Url(url))
            }
            ValidatedInput::Inline(content) => (content, ScriptSource::Plain),
        };

        let record = PacScriptRecord::new(draft.name.trim(), content, draft.enabled, source);
        self.scripts.add(record.clone())?;
        self.update().await?;
        Ok(record)
    }

    /// Edit name, content, and enabled flag in place.
    pub async fn update_script(&self, id: i64, edit: ScriptEdit) -> Result<(), ManagerError> {
        let existing = self.scripts.get_all()?;
        let draft = ScriptDraft {
            name: edit.name,
            enabled: edit.enabled,
            input: crate::scripts::ScriptInput::Inline(edit.content),
        };
        let input = validate_script_draft(&draft, &existing, Some(id))?;

        let mut record = self.scripts.get(id)?;
        record.name = draft.name.trim().to_owned();
        if let ValidatedInput::Inline(content) = input {
            record.content = content;
        }
        record.enabled = draft.enabled;
        record.updated_at = Utc::now();
        self.scripts.update(record)?;
        self.update().await
    }

    /// Re-fetch a url-sourced record. Stored content survives any failure.
    pub async fn reload_script(&self, id: i64) -> Result<(), ManagerError> {
        let mut record = self.scripts.get(id)?;
        let Some(url) = record.source_url().cloned() else {
            return Err(ValidationError::UrlRequired.into());
        };

        let body = self.fetcher.fetch(&url).await?;
        record.content = body;
        record.updated_at = Utc::now();
        self.scripts.update(record)?;
        self.update().await
    }

    /// Flip a script's enabled flag.
    pub async fn toggle_script(&self, id: i64, enabled: bool) -> Result<(), ManagerError> {
        let mut record = self.scripts.get(id)?;
        record.enabled = enabled;
        record.updated_at = Utc::now();
        self.scripts.update(record)?;
        self.update().await
    }

    pub async fn delete_script(&self, id: i64) -> Result<(), ManagerError> {
        self.scripts.delete(id)?;
        self.update().await
    }
}
