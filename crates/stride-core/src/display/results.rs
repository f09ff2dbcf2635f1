//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{PlanProgress, ProgressRecord};

/// Wrapper type for displaying the result of progress updates.
///
/// Carries the updated resource along with a human-readable list of what
/// changed, so interfaces can confirm the effect of an action (including
/// side effects such as auto-advancing the week pointer).
///
/// # Examples
///
/// ```rust
/// use stride_core::{display::UpdateResult, engine, models::Plan};
/// use jiff::Timestamp;
///
/// let plan = Plan {
///     id: "demo".to_string(),
///     title: "Demo".to_string(),
///     description: None,
///     total_weeks: 3,
///     stages: vec![],
/// };
/// let now = Timestamp::from_second(1_700_000_000).unwrap();
/// let before = engine::start(now);
/// let after = engine::mark_week_done(&before, &plan, 1);
///
/// let changes = stride_core::display::describe_changes(&before, &after);
/// assert_eq!(changes, vec!["Marked week 1 as done", "Moved to week 2"]);
///
/// let progress = stride_core::models::PlanProgress {
///     view: engine::compute_view(&plan, &after, now),
///     plan,
///     record: after,
/// };
/// let output = UpdateResult::with_changes(progress, changes).to_string();
/// assert!(output.contains("Changes made:"));
/// ```
#[derive(Debug, Clone)]
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }

    /// Returns true if the operation changed nothing.
    pub fn is_unchanged(&self) -> bool {
        self.changes.is_empty()
    }
}

impl fmt::Display for UpdateResult<PlanProgress> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated plan: {}", self.resource.plan.id)?;
        writeln!(f)?;

        if self.changes.is_empty() {
            writeln!(f, "No changes made.")?;
        } else {
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Lists the user-visible differences between two records.
pub fn describe_changes(before: &ProgressRecord, after: &ProgressRecord) -> Vec<String> {
    let mut changes = Vec::new();

    match (before.started_at, after.started_at) {
        (_, None) if before.is_started() => changes.push("Reset progress".to_string()),
        (previous, Some(started)) if previous != Some(started) => {
            changes.push("Started plan".to_string());
            return changes;
        }
        _ => {}
    }

    for week in after.completed_weeks.difference(&before.completed_weeks) {
        changes.push(format!("Marked week {week} as done"));
    }
    for week in before.completed_weeks.difference(&after.completed_weeks) {
        changes.push(format!("Unmarked week {week}"));
    }

    if after.is_started() && before.current_week != after.current_week {
        changes.push(format!("Moved to week {}", after.current_week));
    }

    changes
}
