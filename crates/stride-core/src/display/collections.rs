//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::PlanSummary;

/// Newtype wrapper for displaying collections of plan summaries.
///
/// Handles empty collections gracefully and leaves titles to the caller.
///
/// # Examples
///
/// ```rust
/// use stride_core::{
///     display::PlanSummaries,
///     models::{PlanSummary, ProgressState},
/// };
///
/// let plan = PlanSummary {
///     id: "couch-to-5k".to_string(),
///     title: "Couch to 5K".to_string(),
///     description: None,
///     total_weeks: 9,
///     state: ProgressState::Started,
///     current_week: 3,
///     weeks_completed: 2,
///     week_progress_pct: 22,
///     day_progress_pct: 24,
/// };
///
/// let summaries = PlanSummaries(vec![plan]);
/// let output = format!("{}", summaries);
/// assert!(output.contains("Couch to 5K"));
/// assert!(output.contains("(2/9)"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlanSummaries(pub Vec<PlanSummary>);

impl<'a> IntoIterator for &'a PlanSummaries {
    type Item = &'a PlanSummary;
    type IntoIter = std::slice::Iter<'a, PlanSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PlanSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No plans found.")
        } else {
            for plan in &self.0 {
                write!(f, "{plan}")?;
            }
            Ok(())
        }
    }
}
