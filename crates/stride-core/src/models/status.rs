//! Status enumerations for progress records and plan weeks.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a progress record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProgressState {
    /// No start timestamp; nothing recorded yet
    #[default]
    NotStarted,

    /// The plan has been started
    Started,
}

impl FromStr for ProgressState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "not_started" | "notstarted" => Ok(ProgressState::NotStarted),
            "started" => Ok(ProgressState::Started),
            _ => Err(format!("Invalid progress state: {s}")),
        }
    }
}

impl ProgressState {
    /// Stable string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressState::NotStarted => "not_started",
            ProgressState::Started => "started",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ProgressState::NotStarted => "Not started",
            ProgressState::Started => "In progress",
        }
    }
}

/// Status of a single week relative to a progress record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WeekStatus {
    /// Week has been marked complete
    Done,

    /// Week is the active week pointer
    Current,

    /// Week is neither done nor active
    Upcoming,
}

impl WeekStatus {
    /// Stable string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            WeekStatus::Done => "done",
            WeekStatus::Current => "current",
            WeekStatus::Upcoming => "upcoming",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stride_core::models::WeekStatus;
    ///
    /// assert_eq!(WeekStatus::Done.with_icon(), "✓ Done");
    /// assert_eq!(WeekStatus::Current.with_icon(), "➤ Current");
    /// assert_eq!(WeekStatus::Upcoming.with_icon(), "○ Upcoming");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            WeekStatus::Done => "✓ Done",
            WeekStatus::Current => "➤ Current",
            WeekStatus::Upcoming => "○ Upcoming",
        }
    }
}
