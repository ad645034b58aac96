//! Script record storage
//!
//! Storage boundary for PAC script records plus the in-memory
//! implementation used by default and in tests.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::error::StoreError;

use super::record::PacScriptRecord;

/// Storage boundary for PAC script records.
pub trait ScriptStore {
    /// All records in ascending id order (creation order).
    fn get_all(&self) -> Result<Vec<PacScriptRecord>, StoreError>;

    fn add(&self, record: PacScriptRecord) -> Result<(), StoreError>;

    fn update(&self, record: PacScriptRecord) -> Result<(), StoreError>;

    fn delete(&self, id: i64) -> Result<(), StoreError>;

    /// Single record lookup.
    fn get(&self, id: i64) -> Result<PacScriptRecord, StoreError> {
        self.get_all()?
            .into_iter()
            .find(|record| record.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

/// In-memory record store keyed by id.
#[derive(Debug, Default)]
pub struct MemoryScriptStore {
    records: DashMap<i64, PacScriptRecord>,
}

impl MemoryScriptStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScriptStore for MemoryScriptStore {
    fn get_all(&self) -> Result<Vec<PacScriptRecord>, StoreError> {
        let mut records: Vec<PacScriptRecord> = self
            .records
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        records.sort_by_key(|record| record.id);
        Ok(records)
    }

    fn add(&self, record: PacScriptRecord) -> Result<(), StoreError> {
        match self.records.entry(record.id) {
            Entry::Occupied(_) => Err(StoreError::DuplicateId(record.id)),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    fn update(&self, record: PacScriptRecord) -> Result<(), StoreError> {
        match self.records.get_mut(&record.id) {
            Some(mut entry) => {
                *entry = record;
                Ok(())
            }
            None => Err(StoreError::NotFound(record.id)),
        }
    }

    fn delete(&self, id: i64) -> Result<(), StoreError> {
        self.records
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}
