//! Display implementations for domain models.
//!
//! All output is markdown so the CLI renderer and MCP clients can present it
//! richly, while still reading well as plain text.

use std::fmt;

use super::datetime::{LocalDate, LocalDateTime};
use crate::models::{
    Plan, PlanProgress, PlanSummary, ProgressState, ProgressView, Stage, WeekStatus,
};

impl fmt::Display for ProgressState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for WeekStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### Week {}. {}", self.week, self.title)?;
        writeln!(f)?;
        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} ({})", self.title, self.id)?;
        writeln!(f)?;
        writeln!(
            f,
            "- Length: {} weeks ({} days)",
            self.total_weeks,
            self.total_days()
        )?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        if self.stages.is_empty() {
            writeln!(f, "\nNo stages in this plan.")?;
        } else {
            writeln!(f, "\n## Stages")?;
            writeln!(f)?;
            for stage in &self.stages {
                write!(f, "{stage}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for ProgressView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Status: {}", self.state.label())?;

        if self.state == ProgressState::NotStarted {
            writeln!(
                f,
                "- Length: {} weeks ({} days)",
                self.total_weeks, self.total_days
            )?;
            return Ok(());
        }

        writeln!(
            f,
            "- Current week: {} of {}",
            self.current_week, self.total_weeks
        )?;
        writeln!(
            f,
            "- Weeks completed: {}/{} ({}%)",
            self.weeks_completed, self.total_weeks, self.week_progress_pct
        )?;
        writeln!(
            f,
            "- Days elapsed: {}/{} ({}%)",
            self.days_elapsed, self.total_days, self.day_progress_pct
        )?;
        writeln!(f, "- Days remaining: {}", self.days_remaining)?;
        if let Some(eta) = &self.eta {
            writeln!(f, "- Estimated completion: {}", LocalDate(eta))?;
        }

        Ok(())
    }
}

impl fmt::Display for PlanProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} ({})", self.plan.title, self.plan.id)?;
        writeln!(f)?;
        if let Some(started_at) = &self.record.started_at {
            writeln!(f, "- Started: {}", LocalDateTime(started_at))?;
        }
        write!(f, "{}", self.view)?;

        writeln!(f, "\n## Weeks")?;
        writeln!(f)?;
        for week in 1..=self.plan.total_weeks {
            let status = self.week_status(week);
            match self.plan.stage(week) {
                Some(stage) => writeln!(
                    f,
                    "- Week {week}. {} ({})",
                    stage.title,
                    status.with_icon()
                )?,
                None => writeln!(f, "- Week {week} ({})", status.with_icon())?,
            }
        }

        if let Some(stage) = self.current_stage() {
            if !stage.description.is_empty() {
                writeln!(f, "\n## This Week")?;
                writeln!(f)?;
                write!(f, "{stage}")?;
            }
        }

        Ok(())
    }
}

impl PlanProgress {
    /// The stage for the active week, if started and defined.
    fn current_stage(&self) -> Option<&Stage> {
        if self.record.is_started() {
            self.plan.stage(self.record.current_week)
        } else {
            None
        }
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} (ID: {}) ({}/{})",
            self.title, self.id, self.weeks_completed, self.total_weeks
        )?;
        writeln!(f)?;

        if let Some(desc) = &self.description {
            writeln!(f, "- **Description**: {desc}")?;
        }

        match self.state {
            ProgressState::NotStarted => {
                writeln!(f, "- **Status**: {}", self.state.label())?;
            }
            ProgressState::Started => {
                writeln!(
                    f,
                    "- **Status**: {}, week {} of {}",
                    self.state.label(),
                    self.current_week,
                    self.total_weeks
                )?;
                writeln!(
                    f,
                    "- **Progress**: {}% of weeks, {}% of days",
                    self.week_progress_pct, self.day_progress_pct
                )?;
            }
        }

        writeln!(f)?; // Add blank line after each plan

        Ok(())
    }
}
