//! Plan and stage definitions supplied by the catalog.

use serde::{Deserialize, Serialize};

/// Content associated with one week of a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stage {
    /// Week this stage belongs to, in `[1, total_weeks]`
    pub week: u32,

    /// Short title of the week's work
    pub title: String,

    /// Detailed description of the week's sessions
    #[serde(default)]
    pub description: String,
}

/// An immutable, week-structured training plan definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plan {
    /// Opaque identifier (slug) used as the progress store key
    pub id: String,

    /// Title of the plan
    pub title: String,

    /// Optional description of the plan
    #[serde(default)]
    pub description: Option<String>,

    /// Total plan length in weeks, always positive
    pub total_weeks: u32,

    /// Stages ordered by week; weeks may be sparse
    #[serde(default)]
    pub stages: Vec<Stage>,
}

impl Plan {
    /// Nominal plan length in days, never less than one.
    pub fn total_days(&self) -> u32 {
        self.total_weeks.saturating_mul(7).max(1)
    }

    /// Clamps an arbitrary week value into `[1, total_weeks]`.
    pub fn clamp_week(&self, week: i64) -> u32 {
        let max = i64::from(self.total_weeks.max(1));
        week.clamp(1, max) as u32
    }

    /// Returns true if `week` is a valid week number for this plan.
    pub fn contains_week(&self, week: u32) -> bool {
        (1..=self.total_weeks).contains(&week)
    }

    /// Looks up the stage for a given week, if the plan defines one.
    pub fn stage(&self, week: u32) -> Option<&Stage> {
        self.stages.iter().find(|stage| stage.week == week)
    }
}
