//! Persisted per-plan progress record.

use std::collections::BTreeSet;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::ProgressState;

/// The mutable progress state for one plan, as persisted in the store.
///
/// Only the minimal facts are stored here; everything else is derived by
/// [`crate::engine::compute_view`]. The default value is the "not started"
/// record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressRecord {
    /// When the plan was started; `None` means not started
    #[serde(default)]
    pub started_at: Option<Timestamp>,

    /// Active week pointer in `[0, total_weeks]`; 0 means not started
    #[serde(default)]
    pub current_week: u32,

    /// Weeks the user has marked complete, each in `[1, total_weeks]`
    #[serde(default)]
    pub completed_weeks: BTreeSet<u32>,
}

impl ProgressRecord {
    /// Returns true once the plan has a start timestamp.
    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Lifecycle state of this record.
    pub fn state(&self) -> ProgressState {
        if self.is_started() {
            ProgressState::Started
        } else {
            ProgressState::NotStarted
        }
    }

    /// Returns true if `week` has been marked complete.
    pub fn is_week_done(&self, week: u32) -> bool {
        self.completed_weeks.contains(&week)
    }

    /// Number of weeks marked complete.
    pub fn weeks_completed(&self) -> u32 {
        self.completed_weeks.len() as u32
    }
}
