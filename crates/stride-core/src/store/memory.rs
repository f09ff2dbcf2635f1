//! In-memory progress store.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use super::ProgressStore;
use crate::{
    error::{Result, TrackerError},
    models::ProgressRecord,
};

/// A progress store that lives only as long as the process.
///
/// Clones share the same records, so a tracker can hand a clone to each
/// operation and still see earlier writes for the rest of the session.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<Mutex<HashMap<String, ProgressRecord>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.lock().map_or(0, |records| records.len())
    }

    /// Returns true if nothing has been saved.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn records(
        &self,
        operation: &'static str,
    ) -> Result<MutexGuard<'_, HashMap<String, ProgressRecord>>> {
        self.records.lock().map_err(|_| {
            TrackerError::store_unavailable(
                operation,
                TrackerError::Configuration {
                    message: "memory store lock poisoned".to_string(),
                },
            )
        })
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self, plan_id: &str) -> Result<Option<ProgressRecord>> {
        Ok(self.records("load")?.get(plan_id).cloned())
    }

    fn save(&mut self, plan_id: &str, record: &ProgressRecord) -> Result<()> {
        self.records("save")?
            .insert(plan_id.to_string(), record.clone());
        Ok(())
    }

    fn remove(&mut self, plan_id: &str) -> Result<()> {
        self.records("remove")?.remove(plan_id);
        Ok(())
    }

    fn load_all(&self) -> Result<HashMap<String, ProgressRecord>> {
        Ok(self.records("load_all")?.clone())
    }
}
