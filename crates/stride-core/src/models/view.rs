//! Derived progress figures.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Plan, ProgressRecord, ProgressState, WeekStatus};

/// Every figure derived from a plan, a progress record and the current time.
///
/// Produced by [`crate::engine::compute_view`]. Never persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressView {
    /// Lifecycle state of the underlying record
    pub state: ProgressState,
    /// Active week pointer as stored in the record
    pub current_week: u32,
    /// Total plan length in weeks
    pub total_weeks: u32,
    /// Number of weeks marked complete
    pub weeks_completed: u32,
    /// Rounded percentage of weeks marked complete
    pub week_progress_pct: u32,
    /// Nominal plan length in days
    pub total_days: u32,
    /// Calendar days since the start, counting the start day as day one
    pub actual_days_elapsed: u32,
    /// Days implied by completion marks alone (seven per week)
    pub manual_days_elapsed: u32,
    /// Reconciled elapsed days, capped at `total_days`
    pub days_elapsed: u32,
    /// Days left in the plan
    pub days_remaining: u32,
    /// Rounded percentage of `total_days` elapsed
    pub day_progress_pct: u32,
    /// Week implied by elapsed days; `None` until started
    pub auto_week: Option<u32>,
    /// Estimated completion instant; `None` until started
    pub eta: Option<Timestamp>,
}

impl ProgressView {
    /// Returns true when the record should have its week pointer pulled
    /// forward to [`ProgressView::auto_week`].
    pub fn needs_week_sync(&self) -> bool {
        self.auto_week
            .is_some_and(|auto_week| self.current_week < auto_week)
    }

    /// Returns true when every week has been marked complete.
    pub fn is_complete(&self) -> bool {
        self.weeks_completed >= self.total_weeks
    }
}

/// A plan together with its progress record and derived view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanProgress {
    pub plan: Plan,
    pub record: ProgressRecord,
    pub view: ProgressView,
}

impl PlanProgress {
    /// Status of a week relative to the record.
    pub fn week_status(&self, week: u32) -> WeekStatus {
        if self.record.is_week_done(week) {
            WeekStatus::Done
        } else if self.record.is_started() && week == self.record.current_week {
            WeekStatus::Current
        } else {
            WeekStatus::Upcoming
        }
    }
}
