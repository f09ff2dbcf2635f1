//! Read operations for the Tracker.

use jiff::Timestamp;
use log::{debug, warn};

use super::{session, Tracker};
use crate::{
    display::PlanSummaries,
    engine,
    error::Result,
    models::{Plan, PlanProgress, PlanSummary},
    params::{ListPlans, PlanRef},
};

impl Tracker {
    /// Retrieves a plan definition from the catalog.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::PlanNotFound` if the catalog has no such plan.
    pub fn get_plan(&self, params: &PlanRef) -> Result<Plan> {
        self.catalog.get_plan(&params.plan_id).cloned()
    }

    /// Shows the current progress for a plan.
    ///
    /// If elapsed time has moved past the stored week pointer, the pointer is
    /// pulled forward and the updated record is persisted.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::PlanNotFound` if the catalog has no such plan.
    pub async fn show_progress(&self, params: &PlanRef, now: Timestamp) -> Result<PlanProgress> {
        let plan = self.get_plan(params)?;
        let db_path = self.db_path.clone();
        let fallback = self.fallback.clone();
        debug!("show_progress: {}", plan.id);

        Self::run_blocking(move || {
            let mut store = session::open_store(&db_path, &fallback);
            let record = session::load_record(store.as_ref(), &plan);
            Ok(session::observe(store.as_mut(), &plan, record, now))
        })
        .await
    }

    /// Lists every catalog plan with its progress.
    ///
    /// Week pointers overtaken by elapsed time are synced as in
    /// [`Tracker::show_progress`].
    pub async fn list_plans(&self, params: &ListPlans, now: Timestamp) -> Result<PlanSummaries> {
        let plans: Vec<Plan> = self.catalog.plans().cloned().collect();
        let db_path = self.db_path.clone();
        let fallback = self.fallback.clone();
        let started_only = params.started_only;

        Self::run_blocking(move || {
            let mut store = session::open_store(&db_path, &fallback);
            // A bad row only degrades its own plan
            let mut stored = store
                .load_all()
                .inspect_err(|e| warn!("Loading progress plan by plan: {e}"))
                .ok();

            let summaries = plans
                .iter()
                .map(|plan| {
                    let record = match stored.as_mut() {
                        Some(stored) => stored
                            .remove(&plan.id)
                            .map(|record| engine::normalize(plan, &record))
                            .unwrap_or_default(),
                        None => session::load_record(store.as_ref(), plan),
                    };
                    session::observe(store.as_mut(), plan, record, now)
                })
                .filter(|progress| !started_only || progress.record.is_started())
                .map(|progress| PlanSummary::from(&progress))
                .collect();

            Ok(PlanSummaries(summaries))
        })
        .await
    }
}
