//! Plan summary types and functionality.

use serde::{Deserialize, Serialize};

use super::{PlanProgress, ProgressState};

/// Summary information about a plan with its progress figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Plan ID
    pub id: String,
    /// Title of the plan
    pub title: String,
    /// Optional description of the plan
    pub description: Option<String>,
    /// Total plan length in weeks
    pub total_weeks: u32,
    /// Progress lifecycle state
    pub state: ProgressState,
    /// Active week pointer
    pub current_week: u32,
    /// Number of weeks marked complete
    pub weeks_completed: u32,
    /// Rounded percentage of weeks completed
    pub week_progress_pct: u32,
    /// Rounded percentage of days elapsed
    pub day_progress_pct: u32,
}

impl From<&PlanProgress> for PlanSummary {
    fn from(progress: &PlanProgress) -> Self {
        Self {
            id: progress.plan.id.clone(),
            title: progress.plan.title.clone(),
            description: progress.plan.description.clone(),
            total_weeks: progress.plan.total_weeks,
            state: progress.view.state,
            current_week: progress.view.current_week,
            weeks_completed: progress.view.weeks_completed,
            week_progress_pct: progress.view.week_progress_pct,
            day_progress_pct: progress.view.day_progress_pct,
        }
    }
}
