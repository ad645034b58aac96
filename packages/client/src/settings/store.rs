//! Settings store trait and in-memory implementation

use std::sync::RwLock;

use tokio::sync::watch;

use crate::error::StoreError;

use super::types::{SettingsPatch, SettingsSnapshot};

/// Storage boundary for the persisted settings keys.
pub trait SettingsStore {
    fn get(&self) -> Result<SettingsSnapshot, StoreError>;

    fn set(&self, patch: SettingsPatch) -> Result<(), StoreError>;
}

/// In-memory settings store with change notification.
///
/// Every successful `set` bumps a revision on a watch channel; hosts
/// subscribe and re-run composition when the revision moves.
#[derive(Debug)]
pub struct MemorySettingsStore {
    inner: RwLock<SettingsSnapshot>,
    revision: watch::Sender<u64>,
}

impl MemorySettingsStore {
    #[must_use]
    pub fn new() -> Self {
        Self::with_snapshot(SettingsSnapshot::default())
    }

    #[must_use]
    pub fn with_snapshot(snapshot: SettingsSnapshot) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            inner: RwLock::new(snapshot),
            revision,
        }
    }

    /// Receiver whose value changes whenever a setting is written.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }
}

impl Default for MemorySettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self) -> Result<SettingsSnapshot, StoreError> {
        Ok(self
            .inner
            .read()
            .map_err(|_| StoreError::Poisoned)?
            .clone())
    }

    fn set(&self, patch: SettingsPatch) -> Result<(), StoreError> {
        {
            let mut snapshot = self.inner.write().map_err(|_| StoreError::Poisoned)?;
            patch.apply(&mut snapshot);
        }
        self.revision.send_modify(|revision| *revision += 1);
        Ok(())
    }
}
