//! Tests for the tracker module.

use std::collections::HashMap;

use jiff::Timestamp;
use tempfile::TempDir;

use super::*;
use crate::{
    engine,
    models::{Plan, ProgressRecord, ProgressState},
    params::{ListPlans, PlanRef, WeekUpdate},
    store::ProgressStore,
};

const START: i64 = 1_704_067_200; // 2024-01-01 00:00:00 UTC
const DAY: i64 = 86_400;

/// Helper function to create a test tracker over the built-in catalog
async fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_catalog(PlanCatalog::builtin().expect("Failed to load catalog"))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

fn at(seconds: i64) -> Timestamp {
    Timestamp::from_second(seconds).unwrap()
}

fn plan_ref(id: &str) -> PlanRef {
    PlanRef {
        plan_id: id.to_string(),
    }
}

fn week(id: &str, week: i64) -> WeekUpdate {
    WeekUpdate {
        plan_id: id.to_string(),
        week,
    }
}

#[tokio::test]
async fn test_start_and_mark_weeks() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let now = at(START);

    let started = tracker
        .start_plan(&plan_ref("couch-to-5k"), now)
        .await
        .expect("Failed to start plan");
    assert_eq!(started.changes, vec!["Started plan"]);
    assert_eq!(started.resource.record.current_week, 1);
    assert_eq!(started.resource.view.days_elapsed, 1);
    assert_eq!(started.resource.view.total_days, 63);

    let marked = tracker
        .mark_week_done(&week("couch-to-5k", 1), now)
        .await
        .expect("Failed to mark week");
    assert_eq!(marked.changes, vec!["Marked week 1 as done", "Moved to week 2"]);
    assert_eq!(marked.resource.record.current_week, 2);
    assert_eq!(marked.resource.view.weeks_completed, 1);
    assert_eq!(marked.resource.view.days_elapsed, 7);
    assert_eq!(marked.resource.view.week_progress_pct, 11);

    // Marking the same week again changes nothing
    let again = tracker
        .mark_week_done(&week("couch-to-5k", 1), now)
        .await
        .expect("Failed to mark week");
    assert!(again.is_unchanged());

    // The change was persisted
    let progress = tracker
        .show_progress(&plan_ref("couch-to-5k"), now)
        .await
        .expect("Failed to show progress");
    assert_eq!(progress.record.current_week, 2);
    assert!(progress.record.is_week_done(1));
}

#[tokio::test]
async fn test_set_and_unmark_weeks() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let now = at(START);
    tracker
        .start_plan(&plan_ref("10k-builder"), now)
        .await
        .expect("Failed to start plan");

    let moved = tracker
        .set_current_week(&week("10k-builder", 20), now)
        .await
        .expect("Failed to set week");
    assert_eq!(moved.resource.record.current_week, 6);
    assert_eq!(moved.changes, vec!["Moved to week 6"]);

    let moved = tracker
        .set_current_week(&week("10k-builder", -3), now)
        .await
        .expect("Failed to set week");
    assert_eq!(moved.resource.record.current_week, 1);

    tracker
        .mark_week_done(&week("10k-builder", 3), now)
        .await
        .expect("Failed to mark week");
    let unmarked = tracker
        .unmark_week(&week("10k-builder", 3), now)
        .await
        .expect("Failed to unmark week");
    assert_eq!(unmarked.changes, vec!["Unmarked week 3"]);
    assert!(unmarked.resource.record.completed_weeks.is_empty());
    assert_eq!(unmarked.resource.record.current_week, 1);

    // Out of range weeks are ignored when unmarking
    let ignored = tracker
        .unmark_week(&week("10k-builder", 99), now)
        .await
        .expect("Failed to unmark week");
    assert!(ignored.is_unchanged());
}

#[tokio::test]
async fn test_week_ops_require_started_plan() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let now = at(START);

    let result = tracker.mark_week_done(&week("couch-to-5k", 1), now).await;
    assert!(matches!(result, Err(TrackerError::NotStarted { ref id }) if id == "couch-to-5k"));

    let result = tracker.set_current_week(&week("couch-to-5k", 2), now).await;
    assert!(matches!(result, Err(TrackerError::NotStarted { .. })));

    let result = tracker.unmark_week(&week("couch-to-5k", 1), now).await;
    assert!(matches!(result, Err(TrackerError::NotStarted { .. })));

    // Nothing was written for the plan
    let progress = tracker
        .show_progress(&plan_ref("couch-to-5k"), now)
        .await
        .expect("Failed to show progress");
    assert_eq!(progress.record, ProgressRecord::default());
}

#[tokio::test]
async fn test_unknown_plan() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let now = at(START);

    assert!(matches!(
        tracker.get_plan(&plan_ref("marathon")),
        Err(TrackerError::PlanNotFound { ref id }) if id == "marathon"
    ));
    assert!(matches!(
        tracker.show_progress(&plan_ref("marathon"), now).await,
        Err(TrackerError::PlanNotFound { .. })
    ));
    assert!(matches!(
        tracker.start_plan(&plan_ref("marathon"), now).await,
        Err(TrackerError::PlanNotFound { .. })
    ));
    assert!(matches!(
        tracker.mark_week_done(&week("marathon", 1), now).await,
        Err(TrackerError::PlanNotFound { .. })
    ));
}

#[tokio::test]
async fn test_reset_plan() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let now = at(START);
    tracker
        .start_plan(&plan_ref("couch-to-5k"), now)
        .await
        .expect("Failed to start plan");
    tracker
        .mark_week_done(&week("couch-to-5k", 1), now)
        .await
        .expect("Failed to mark week");

    let reset = tracker
        .reset_plan(&plan_ref("couch-to-5k"), now)
        .await
        .expect("Failed to reset plan");
    assert_eq!(reset.changes, vec!["Reset progress", "Unmarked week 1"]);
    assert_eq!(reset.resource.view.state, ProgressState::NotStarted);

    let progress = tracker
        .show_progress(&plan_ref("couch-to-5k"), now)
        .await
        .expect("Failed to show progress");
    assert_eq!(progress.record, ProgressRecord::default());
    assert_eq!(progress.view.days_elapsed, 0);
    assert!(progress.view.eta.is_none());

    // Resetting an unstarted plan is a no-op
    let reset = tracker
        .reset_plan(&plan_ref("couch-to-5k"), now)
        .await
        .expect("Failed to reset plan");
    assert!(reset.is_unchanged());
}

#[tokio::test]
async fn test_restart_discards_progress() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    tracker
        .start_plan(&plan_ref("couch-to-5k"), at(START))
        .await
        .expect("Failed to start plan");
    tracker
        .mark_week_done(&week("couch-to-5k", 1), at(START))
        .await
        .expect("Failed to mark week");

    let later = at(START + 3 * DAY);
    let restarted = tracker
        .start_plan(&plan_ref("couch-to-5k"), later)
        .await
        .expect("Failed to restart plan");
    assert_eq!(restarted.resource.record.started_at, Some(later));
    assert_eq!(restarted.resource.record.current_week, 1);
    assert!(restarted.resource.record.completed_weeks.is_empty());
}

#[tokio::test]
async fn test_show_progress_syncs_week_pointer() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    tracker
        .start_plan(&plan_ref("couch-to-5k"), at(START))
        .await
        .expect("Failed to start plan");

    // Day 16 falls in week 3
    let progress = tracker
        .show_progress(&plan_ref("couch-to-5k"), at(START + 15 * DAY))
        .await
        .expect("Failed to show progress");
    assert_eq!(progress.view.actual_days_elapsed, 16);
    assert_eq!(progress.record.current_week, 3);
    assert!(!progress.view.needs_week_sync());

    // The synced pointer is persisted and never pulled backward
    let progress = tracker
        .show_progress(&plan_ref("couch-to-5k"), at(START))
        .await
        .expect("Failed to show progress");
    assert_eq!(progress.record.current_week, 3);
}

#[tokio::test]
async fn test_list_plans() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let now = at(START);

    let all = tracker
        .list_plans(&ListPlans::default(), now)
        .await
        .expect("Failed to list plans");
    assert_eq!(all.0.len(), tracker.catalog().len());
    assert!(all.0.iter().all(|s| s.state == ProgressState::NotStarted));

    tracker
        .start_plan(&plan_ref("10k-builder"), now)
        .await
        .expect("Failed to start plan");
    tracker
        .mark_week_done(&week("10k-builder", 1), now)
        .await
        .expect("Failed to mark week");

    let started = tracker
        .list_plans(&ListPlans { started_only: true }, now)
        .await
        .expect("Failed to list plans");
    assert_eq!(started.0.len(), 1);
    assert_eq!(started.0[0].id, "10k-builder");
    assert_eq!(started.0[0].current_week, 2);
    assert_eq!(started.0[0].weeks_completed, 1);
    assert_eq!(started.0[0].week_progress_pct, 17);

    // Listing applies the auto-sync rule as well
    let later = tracker
        .list_plans(&ListPlans { started_only: true }, at(START + 30 * DAY))
        .await
        .expect("Failed to list plans");
    assert_eq!(later.0[0].current_week, 5);
}

#[tokio::test]
async fn test_list_plans_skips_unreadable_rows() {
    let (temp_dir, tracker) = create_test_tracker().await;
    let now = at(START);

    tracker
        .start_plan(&plan_ref("couch-to-5k"), now)
        .await
        .expect("Failed to start plan");

    let conn = rusqlite::Connection::open(temp_dir.path().join("test.db"))
        .expect("Failed to open connection");
    conn.execute(
        "INSERT INTO progress (plan_id, started_at, current_week, completed_weeks) VALUES ('10k-builder', NULL, 1, 'not json')",
        [],
    )
    .expect("Failed to insert row");

    let progress = tracker
        .show_progress(&plan_ref("couch-to-5k"), now)
        .await
        .expect("Failed to show progress");
    assert_eq!(progress.record.state(), ProgressState::Started);

    let all = tracker
        .list_plans(&ListPlans::default(), now)
        .await
        .expect("Failed to list plans");
    let state_of = |id: &str| {
        all.0.iter()
            .find(|s| s.id == id)
            .map(|s| s.state)
            .expect("plan should be listed")
    };
    assert_eq!(state_of("couch-to-5k"), ProgressState::Started);
    assert_eq!(state_of("10k-builder"), ProgressState::NotStarted);
    assert_eq!(all.0.len(), tracker.catalog().len());
}

#[tokio::test]
async fn test_unreachable_database_falls_back_to_memory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_catalog(PlanCatalog::builtin().expect("Failed to load catalog"))
        .build()
        .await
        .expect("Failed to create tracker");

    // Replace the database file with a directory so it can no longer be opened
    std::fs::remove_file(&db_path).expect("Failed to remove database");
    std::fs::create_dir(&db_path).expect("Failed to create directory");

    let started = tracker
        .start_plan(&plan_ref("couch-to-5k"), at(START))
        .await
        .expect("Start should succeed without a store");
    assert_eq!(started.resource.record.current_week, 1);

    // The write lives in memory for the rest of this tracker's session
    let progress = tracker
        .show_progress(&plan_ref("couch-to-5k"), at(START))
        .await
        .expect("Show should succeed without a store");
    assert_eq!(progress.view.state, ProgressState::Started);
    assert_eq!(progress.record.current_week, 1);

    // but is not visible to a fresh tracker
    let fresh = Tracker::new(db_path, tracker.catalog.clone());
    let progress = fresh
        .show_progress(&plan_ref("couch-to-5k"), at(START))
        .await
        .expect("Show should succeed without a store");
    assert_eq!(progress.view.state, ProgressState::NotStarted);
}

/// A store whose every operation fails.
struct FailingStore;

impl FailingStore {
    fn error(operation: &'static str) -> TrackerError {
        TrackerError::store_unavailable(
            operation,
            TrackerError::Configuration {
                message: "disk on fire".to_string(),
            },
        )
    }
}

impl ProgressStore for FailingStore {
    fn load(&self, _plan_id: &str) -> Result<Option<ProgressRecord>> {
        Err(Self::error("load"))
    }

    fn save(&mut self, _plan_id: &str, _record: &ProgressRecord) -> Result<()> {
        Err(Self::error("save"))
    }

    fn remove(&mut self, _plan_id: &str) -> Result<()> {
        Err(Self::error("remove"))
    }

    fn load_all(&self) -> Result<HashMap<String, ProgressRecord>> {
        Err(Self::error("load_all"))
    }
}

fn builtin_plan(id: &str) -> Plan {
    PlanCatalog::builtin()
        .unwrap()
        .get_plan(id)
        .unwrap()
        .clone()
}

#[test]
fn test_session_degrades_on_store_failure() {
    let plan = builtin_plan("couch-to-5k");
    let mut store = FailingStore;

    assert_eq!(
        session::load_record(&store, &plan),
        ProgressRecord::default()
    );
    assert!(!session::persist_record(
        &mut store,
        &plan.id,
        &engine::start(at(START))
    ));
    assert!(!session::forget_record(&mut store, &plan.id));

    // The synced view is still returned when the write is dropped
    let progress = session::observe(
        &mut store,
        &plan,
        engine::start(at(START)),
        at(START + 8 * DAY),
    );
    assert_eq!(progress.record.current_week, 2);
}

#[test]
fn test_session_normalizes_stored_records() {
    let plan = builtin_plan("10k-builder");
    let mut store = crate::store::MemoryStore::new();
    let stale = ProgressRecord {
        started_at: Some(at(START)),
        current_week: 12,
        completed_weeks: [2, 7, 9].into_iter().collect(),
    };
    store.save(&plan.id, &stale).unwrap();

    let record = session::load_record(&store, &plan);
    assert_eq!(record.current_week, 6);
    assert_eq!(record.completed_weeks.into_iter().collect::<Vec<_>>(), vec![2]);
}
