//! Named policy rules used by the progress engine.
//!
//! Each rule is a small pure function so tests can target it directly.

use jiff::Timestamp;

/// Seconds in one calendar day as counted by the engine.
pub const SECONDS_PER_DAY: i64 = 86_400;

const NANOS_PER_DAY: i128 = SECONDS_PER_DAY as i128 * 1_000_000_000;

/// Days in a plan week.
pub const DAYS_PER_WEEK: u32 = 7;

/// Reconciles the two competing progress signals.
///
/// The higher of the time-based and the mark-based day counts wins, capped at
/// the plan's nominal length. Progress therefore never appears to regress when
/// the user is ahead of or behind the calendar, and never overshoots the plan.
///
/// ```rust
/// use stride_core::engine::rules::reconcile_days_elapsed;
///
/// assert_eq!(reconcile_days_elapsed(10, 0, 14), 10);
/// assert_eq!(reconcile_days_elapsed(3, 14, 14), 14);
/// assert_eq!(reconcile_days_elapsed(40, 7, 14), 14);
/// ```
pub fn reconcile_days_elapsed(actual_days: u32, manual_days: u32, total_days: u32) -> u32 {
    actual_days.max(manual_days).min(total_days)
}

/// Days elapsed since `started_at`, counting the start day as day one.
///
/// A start time in the future yields zero rather than a negative count.
pub fn actual_days_elapsed(started_at: Timestamp, now: Timestamp) -> u32 {
    let nanos = now.as_nanosecond() - started_at.as_nanosecond();
    let whole_days = nanos.div_euclid(NANOS_PER_DAY) + 1;
    whole_days.clamp(0, i128::from(u32::MAX)) as u32
}

/// Calendar days implied purely by completion marks.
pub fn manual_days_elapsed(weeks_completed: u32) -> u32 {
    weeks_completed.saturating_mul(DAYS_PER_WEEK)
}

/// Week implied by elapsed days, in `[1, total_weeks]`.
pub fn auto_week(days_elapsed: u32, total_weeks: u32) -> u32 {
    let week = days_elapsed.saturating_add(DAYS_PER_WEEK - 1) / DAYS_PER_WEEK;
    week.max(1).min(total_weeks.max(1))
}

/// Rounded percentage of `part` over `whole`, halves rounding up.
///
/// Returns 0 for an empty whole.
pub fn percentage(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    let part = u64::from(part);
    let whole = u64::from(whole);
    ((200 * part + whole) / (2 * whole)) as u32
}
