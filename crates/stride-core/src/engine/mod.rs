//! The plan progress engine.
//!
//! Everything in this module is a pure function of a [`Plan`], a
//! [`ProgressRecord`] and, where time matters, an explicit `now`. The engine
//! holds no state between calls: callers load a record, run one of these
//! functions and persist whatever record comes back.
//!
//! # Lifecycle
//!
//! ```text
//!              start                     week ops (set / done / undo)
//! NotStarted ─────────▶ Started ◀───────────────────────────────┐
//!     ▲                   │  └──────────────────────────────────┘
//!     └───── reset ───────┘
//! ```
//!
//! Week operations on a `NotStarted` record return it unchanged, so the only
//! way out of `NotStarted` is [`start`].
//!
//! # Example
//!
//! ```rust
//! use jiff::Timestamp;
//! use stride_core::{engine, models::Plan};
//!
//! let plan = Plan {
//!     id: "demo".to_string(),
//!     title: "Demo".to_string(),
//!     description: None,
//!     total_weeks: 4,
//!     stages: vec![],
//! };
//!
//! let now = Timestamp::from_second(1_700_000_000).unwrap();
//! let record = engine::start(now);
//! let record = engine::mark_week_done(&record, &plan, 1);
//! assert_eq!(record.current_week, 2);
//!
//! let view = engine::compute_view(&plan, &record, now);
//! assert_eq!(view.week_progress_pct, 25);
//! assert_eq!(view.days_elapsed, 7);
//! ```

use jiff::{SignedDuration, Timestamp};

use crate::models::{Plan, ProgressRecord, ProgressView};

pub mod rules;


/// Begins a plan at `now`, discarding any previous progress.
pub fn start(now: Timestamp) -> ProgressRecord {
    ProgressRecord {
        started_at: Some(now),
        current_week: 1,
        completed_weeks: Default::default(),
    }
}

/// Returns the unstarted default record.
pub fn reset() -> ProgressRecord {
    ProgressRecord::default()
}

/// Clamps a record loaded from storage so it satisfies the plan's bounds.
///
/// Unstarted records collapse to the default. For started records the week
/// pointer is clamped to `[1, total_weeks]` and completed weeks outside the
/// plan are dropped.
pub fn normalize(plan: &Plan, record: &ProgressRecord) -> ProgressRecord {
    if !record.is_started() {
        return reset();
    }

    ProgressRecord {
        started_at: record.started_at,
        current_week: plan.clamp_week(i64::from(record.current_week)),
        completed_weeks: record
            .completed_weeks
            .iter()
            .copied()
            .filter(|week| plan.contains_week(*week))
            .collect(),
    }
}

/// Moves the week pointer to `week`, clamped to `[1, total_weeks]`.
///
/// Completed weeks are untouched. Unstarted records are returned unchanged.
pub fn set_current_week(record: &ProgressRecord, plan: &Plan, week: i64) -> ProgressRecord {
    if !record.is_started() {
        return record.clone();
    }

    ProgressRecord {
        current_week: plan.clamp_week(week),
        ..record.clone()
    }
}

/// Marks `week` (clamped to the plan) as complete.
///
/// Completing the active week advances the pointer by one unless it is
/// already on the last week. Completing a week that is already done, or any
/// week of an unstarted record, changes nothing.
pub fn mark_week_done(record: &ProgressRecord, plan: &Plan, week: i64) -> ProgressRecord {
    if !record.is_started() {
        return record.clone();
    }

    let week = plan.clamp_week(week);
    if record.is_week_done(week) {
        return record.clone();
    }

    let mut updated = record.clone();
    updated.completed_weeks.insert(week);
    if week == record.current_week && record.current_week < plan.total_weeks {
        updated.current_week += 1;
    }
    updated
}

/// Removes `week` from the completed set if present.
///
/// The week pointer is never moved back by this operation.
pub fn unmark_week(record: &ProgressRecord, week: i64) -> ProgressRecord {
    let mut updated = record.clone();
    if let Ok(week) = u32::try_from(week) {
        updated.completed_weeks.remove(&week);
    }
    updated
}

/// Computes every derived progress figure.
///
/// The record is normalized against the plan first, so stale records from
/// storage are safe to pass in.
pub fn compute_view(plan: &Plan, record: &ProgressRecord, now: Timestamp) -> ProgressView {
    let record = normalize(plan, record);

    let weeks_completed = record.weeks_completed();
    let total_days = plan.total_days();
    let actual_days_elapsed = record
        .started_at
        .map_or(0, |started_at| rules::actual_days_elapsed(started_at, now));
    let manual_days_elapsed = rules::manual_days_elapsed(weeks_completed);
    let days_elapsed =
        rules::reconcile_days_elapsed(actual_days_elapsed, manual_days_elapsed, total_days);
    let days_remaining = total_days.saturating_sub(days_elapsed);

    let auto_week = record
        .started_at
        .map(|_| rules::auto_week(days_elapsed, plan.total_weeks));

    let eta = record.started_at.and_then(|started_at| {
        let base = if manual_days_elapsed > actual_days_elapsed {
            now
        } else {
            started_at
        };
        let days_left = i64::from(days_remaining.saturating_sub(1));
        base.checked_add(SignedDuration::from_secs(days_left * rules::SECONDS_PER_DAY))
            .ok()
    });

    ProgressView {
        state: record.state(),
        current_week: record.current_week,
        total_weeks: plan.total_weeks,
        weeks_completed,
        week_progress_pct: week_progress_pct(weeks_completed, plan.total_weeks),
        total_days,
        actual_days_elapsed,
        manual_days_elapsed,
        days_elapsed,
        days_remaining,
        day_progress_pct: rules::percentage(days_elapsed, total_days),
        auto_week,
        eta,
    }
}

/// Applies the auto-sync rule.
///
/// Returns the record with its week pointer pulled forward to the view's
/// `auto_week` when elapsed time has overtaken it, or `None` when nothing
/// needs persisting. The pointer is never pulled backward.
pub fn sync_current_week(record: &ProgressRecord, view: &ProgressView) -> Option<ProgressRecord> {
    let auto_week = view.auto_week?;
    if !record.is_started() || record.current_week >= auto_week {
        return None;
    }

    Some(ProgressRecord {
        current_week: auto_week,
        ..record.clone()
    })
}

/// Week completion percentage; only a fully completed plan reports 100.
///
/// Half-up rounding alone would report 100 for 199 of 200 weeks or more, so
/// an incomplete plan is capped at 99.
fn week_progress_pct(weeks_completed: u32, total_weeks: u32) -> u32 {
    let pct = rules::percentage(weeks_completed, total_weeks);
    if weeks_completed < total_weeks {
        pct.min(99)
    } else {
        pct
    }
}
