//! Progress mutations for the Tracker.

use jiff::Timestamp;
use log::{debug, info};

use super::{session, Tracker};
use crate::{
    display::{describe_changes, UpdateResult},
    engine,
    error::{Result, TrackerError},
    models::{Plan, PlanProgress, ProgressRecord},
    params::{PlanRef, WeekUpdate},
};

impl Tracker {
    /// Starts a plan at `now`, discarding any previous progress.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::PlanNotFound` if the catalog has no such plan.
    pub async fn start_plan(
        &self,
        params: &PlanRef,
        now: Timestamp,
    ) -> Result<UpdateResult<PlanProgress>> {
        let plan = self.get_plan(params)?;
        let db_path = self.db_path.clone();
        let fallback = self.fallback.clone();
        info!("Starting plan '{}'", plan.id);

        Self::run_blocking(move || {
            let mut store = session::open_store(&db_path, &fallback);
            let previous = session::load_record(store.as_ref(), &plan);
            let record = engine::start(now);
            session::persist_record(store.as_mut(), &plan.id, &record);
            let changes = describe_changes(&previous, &record);
            Ok(UpdateResult::with_changes(
                session::snapshot(&plan, record, now),
                changes,
            ))
        })
        .await
    }

    /// Resets a plan to the unstarted state and removes its stored record.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::PlanNotFound` if the catalog has no such plan.
    pub async fn reset_plan(
        &self,
        params: &PlanRef,
        now: Timestamp,
    ) -> Result<UpdateResult<PlanProgress>> {
        let plan = self.get_plan(params)?;
        let db_path = self.db_path.clone();
        let fallback = self.fallback.clone();
        info!("Resetting plan '{}'", plan.id);

        Self::run_blocking(move || {
            let mut store = session::open_store(&db_path, &fallback);
            let previous = session::load_record(store.as_ref(), &plan);
            session::forget_record(store.as_mut(), &plan.id);
            let record = engine::reset();
            let changes = describe_changes(&previous, &record);
            Ok(UpdateResult::with_changes(
                session::snapshot(&plan, record, now),
                changes,
            ))
        })
        .await
    }

    /// Moves the week pointer, clamping the week into the plan.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::PlanNotFound` if the catalog has no such plan.
    /// Returns `TrackerError::NotStarted` if the plan has not been started.
    pub async fn set_current_week(
        &self,
        params: &WeekUpdate,
        now: Timestamp,
    ) -> Result<UpdateResult<PlanProgress>> {
        let week = params.week;
        self.update_started(&params.plan_id, now, move |record, plan| {
            engine::set_current_week(record, plan, week)
        })
        .await
    }

    /// Marks a week complete, auto-advancing when it is the active week.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::PlanNotFound` if the catalog has no such plan.
    /// Returns `TrackerError::NotStarted` if the plan has not been started.
    pub async fn mark_week_done(
        &self,
        params: &WeekUpdate,
        now: Timestamp,
    ) -> Result<UpdateResult<PlanProgress>> {
        let week = params.week;
        self.update_started(&params.plan_id, now, move |record, plan| {
            engine::mark_week_done(record, plan, week)
        })
        .await
    }

    /// Removes a week's completion mark. The week pointer does not move.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::PlanNotFound` if the catalog has no such plan.
    /// Returns `TrackerError::NotStarted` if the plan has not been started.
    pub async fn unmark_week(
        &self,
        params: &WeekUpdate,
        now: Timestamp,
    ) -> Result<UpdateResult<PlanProgress>> {
        let week = params.week;
        self.update_started(&params.plan_id, now, move |record, _| {
            engine::unmark_week(record, week)
        })
        .await
    }

    /// Loads a started record, applies `update` and persists the result if
    /// anything changed.
    async fn update_started<F>(
        &self,
        plan_id: &str,
        now: Timestamp,
        update: F,
    ) -> Result<UpdateResult<PlanProgress>>
    where
        F: FnOnce(&ProgressRecord, &Plan) -> ProgressRecord + Send + 'static,
    {
        let plan = self.catalog.get_plan(plan_id)?.clone();
        let db_path = self.db_path.clone();
        let fallback = self.fallback.clone();

        Self::run_blocking(move || {
            let mut store = session::open_store(&db_path, &fallback);
            let record = session::load_record(store.as_ref(), &plan);
            if !record.is_started() {
                return Err(TrackerError::NotStarted {
                    id: plan.id.clone(),
                });
            }

            let updated = update(&record, &plan);
            if updated != record {
                debug!(
                    "Plan '{}': week {} -> {}, completed {:?}",
                    plan.id, record.current_week, updated.current_week, updated.completed_weeks
                );
                session::persist_record(store.as_mut(), &plan.id, &updated);
            }

            let changes = describe_changes(&record, &updated);
            Ok(UpdateResult::with_changes(
                session::snapshot(&plan, updated, now),
                changes,
            ))
        })
        .await
    }
}
