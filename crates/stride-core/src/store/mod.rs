//! Progress store boundary.
//!
//! The store persists one [`ProgressRecord`] per plan ID and knows nothing
//! about the engine. Two implementations ship with the crate:
//!
//! - [`crate::db::Database`]: SQLite, used by the tracker
//! - [`MemoryStore`]: a `HashMap`, used for session-only fallback and tests

use std::collections::HashMap;

use crate::{error::Result, models::ProgressRecord};

mod memory;

pub use memory::MemoryStore;

/// Whole-record persistence keyed by plan ID.
///
/// Implementations wrap their failures in
/// [`crate::TrackerError::StoreUnavailable`] so callers can apply the
/// best-effort persistence policy uniformly.
pub trait ProgressStore {
    /// Reads the record for `plan_id`; `None` if nothing has been saved.
    fn load(&self, plan_id: &str) -> Result<Option<ProgressRecord>>;

    /// Replaces the record for `plan_id`.
    fn save(&mut self, plan_id: &str, record: &ProgressRecord) -> Result<()>;

    /// Deletes the record for `plan_id`, if any.
    fn remove(&mut self, plan_id: &str) -> Result<()>;

    /// Loads every stored record keyed by plan ID.
    fn load_all(&self) -> Result<HashMap<String, ProgressRecord>>;
}
