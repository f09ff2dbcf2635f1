//! Best-effort persistence around engine calls.
//!
//! Progress tracking is not a system of record: a store that cannot be read
//! degrades to the unstarted record, and a store that cannot be written
//! drops the write. Both are logged at `warn` level and neither is retried.
//! The view returned to the caller always reflects the attempted change, and
//! when the database cannot be opened at all, changes live in the tracker's
//! memory store until the process exits.

use std::path::Path;

use jiff::Timestamp;
use log::{debug, warn};

use crate::{
    db::Database,
    engine,
    error::TrackerError,
    models::{Plan, PlanProgress, ProgressRecord},
    store::{MemoryStore, ProgressStore},
};

/// Opens the SQLite store, falling back to the tracker's session-only memory
/// store.
pub(crate) fn open_store(db_path: &Path, fallback: &MemoryStore) -> Box<dyn ProgressStore> {
    match Database::new(db_path) {
        Ok(db) => Box::new(db),
        Err(e) => {
            let e = TrackerError::store_unavailable("open", e);
            warn!("{e}; progress changes will not persist");
            Box::new(fallback.clone())
        }
    }
}

/// Loads and normalizes the record for `plan`, defaulting on any failure.
pub(crate) fn load_record<S: ProgressStore + ?Sized>(store: &S, plan: &Plan) -> ProgressRecord {
    match store.load(&plan.id) {
        Ok(Some(record)) => engine::normalize(plan, &record),
        Ok(None) => engine::reset(),
        Err(e) => {
            warn!("Treating plan '{}' as not started: {e}", plan.id);
            engine::reset()
        }
    }
}

/// Saves `record`, logging and dropping the write on failure.
///
/// Returns true if the record was persisted.
pub(crate) fn persist_record<S: ProgressStore + ?Sized>(
    store: &mut S,
    plan_id: &str,
    record: &ProgressRecord,
) -> bool {
    match store.save(plan_id, record) {
        Ok(()) => {
            debug!("Saved progress for plan '{plan_id}'");
            true
        }
        Err(e) => {
            warn!("Dropping progress write for plan '{plan_id}': {e}");
            false
        }
    }
}

/// Deletes the stored record, logging and ignoring failures.
pub(crate) fn forget_record<S: ProgressStore + ?Sized>(store: &mut S, plan_id: &str) -> bool {
    match store.remove(plan_id) {
        Ok(()) => {
            debug!("Removed progress for plan '{plan_id}'");
            true
        }
        Err(e) => {
            warn!("Dropping progress reset for plan '{plan_id}': {e}");
            false
        }
    }
}

/// Computes the view for `record`, applying and persisting the auto-sync
/// rule when elapsed time has overtaken the week pointer.
pub(crate) fn observe<S: ProgressStore + ?Sized>(
    store: &mut S,
    plan: &Plan,
    record: ProgressRecord,
    now: Timestamp,
) -> PlanProgress {
    let view = engine::compute_view(plan, &record, now);

    match engine::sync_current_week(&record, &view) {
        Some(synced) => {
            debug!(
                "Advancing plan '{}' from week {} to week {}",
                plan.id, record.current_week, synced.current_week
            );
            persist_record(store, &plan.id, &synced);
            let view = engine::compute_view(plan, &synced, now);
            PlanProgress {
                plan: plan.clone(),
                record: synced,
                view,
            }
        }
        None => PlanProgress {
            plan: plan.clone(),
            record,
            view,
        },
    }
}

/// Computes the view for `record` without touching the store.
pub(crate) fn snapshot(plan: &Plan, record: ProgressRecord, now: Timestamp) -> PlanProgress {
    let view = engine::compute_view(plan, &record, now);
    PlanProgress {
        plan: plan.clone(),
        record,
        view,
    }
}
