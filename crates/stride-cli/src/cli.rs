//! Command-line interface definitions and command handlers
//!
//! Clap argument structures live here next to the [`Cli`] handler that runs
//! them. Each argument struct converts into the matching core parameter type
//! so clap attributes never leak into `stride-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker
//! ```

use std::time::Duration;

use anyhow::Result;
use clap::{Args, Subcommand};
use jiff::Timestamp;
use log::{debug, info};
use stride_core::{
    display::OperationStatus,
    params::{ListPlans, PlanRef, WeekUpdate},
    Tracker, TrackerError,
};
use tokio::{signal, time};

use crate::renderer::TerminalRenderer;

// ============================================================================
// CLI Argument Wrappers
// ============================================================================

/// List plans with their progress
#[derive(Args)]
pub struct ListPlansArgs {
    /// Only show plans that have been started
    #[arg(long, help = "Only show plans that have been started")]
    pub started: bool,
}

impl From<ListPlansArgs> for ListPlans {
    fn from(val: ListPlansArgs) -> Self {
        ListPlans {
            started_only: val.started,
        }
    }
}

/// Identify a plan by its catalog ID
#[derive(Args)]
pub struct PlanIdArgs {
    /// ID of the plan
    #[arg(help = "Catalog ID of the plan (for example couch-to-5k)")]
    pub id: String,
}

impl From<PlanIdArgs> for PlanRef {
    fn from(val: PlanIdArgs) -> Self {
        PlanRef { plan_id: val.id }
    }
}

/// Identify one week of a plan
#[derive(Args)]
pub struct WeekArgs {
    /// ID of the plan
    #[arg(help = "Catalog ID of the plan (for example couch-to-5k)")]
    pub id: String,
    /// Week number
    #[arg(
        allow_negative_numbers = true,
        help = "Week number starting at 1; out of range values are clamped when setting or marking"
    )]
    pub week: i64,
}

impl From<WeekArgs> for WeekUpdate {
    fn from(val: WeekArgs) -> Self {
        WeekUpdate {
            plan_id: val.id,
            week: val.week,
        }
    }
}

/// Keep showing a plan's progress as time passes
#[derive(Args)]
pub struct WatchArgs {
    /// ID of the plan
    #[arg(help = "Catalog ID of the plan (for example couch-to-5k)")]
    pub id: String,
    /// Seconds between refreshes
    #[arg(
        short,
        long,
        default_value_t = 60,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Seconds between refreshes"
    )]
    pub interval: u64,
    /// Stop after this many refreshes
    #[arg(short, long, help = "Stop after this many refreshes instead of running until Ctrl-C")]
    pub count: Option<u32>,
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// List plans with their progress
    #[command(aliases = ["l", "ls"])]
    List(ListPlansArgs),
    /// Show a plan definition and its stages
    #[command(alias = "s")]
    Show(PlanIdArgs),
    /// Start (or restart) a plan from today
    Start(PlanIdArgs),
    /// Discard all progress on a plan
    Reset(PlanIdArgs),
    /// Show progress through a plan
    #[command(alias = "p")]
    Progress(PlanIdArgs),
    /// Refresh progress through a plan on an interval
    Watch(WatchArgs),
}

#[derive(Subcommand)]
pub enum WeekCommands {
    /// Move the current week pointer
    Set(WeekArgs),
    /// Mark a week as done
    #[command(alias = "d")]
    Done(WeekArgs),
    /// Remove a week's done mark
    #[command(alias = "u")]
    Undo(WeekArgs),
}

// ============================================================================
// Command Handlers
// ============================================================================

/// Runs CLI commands against a tracker and renders the output.
pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::List(args) => self.list_plans(&args.into()).await,
            PlanCommands::Show(args) => {
                let plan = self.tracker.get_plan(&args.into())?;
                self.renderer.render(&plan.to_string())
            }
            PlanCommands::Start(args) => {
                let result = self.tracker.start_plan(&args.into(), Timestamp::now()).await?;
                self.renderer.render(&result.to_string())
            }
            PlanCommands::Reset(args) => {
                let result = self.tracker.reset_plan(&args.into(), Timestamp::now()).await?;
                self.renderer.render(&result.to_string())
            }
            PlanCommands::Progress(args) => {
                let progress = self
                    .tracker
                    .show_progress(&args.into(), Timestamp::now())
                    .await?;
                self.renderer.render(&progress.to_string())
            }
            PlanCommands::Watch(args) => self.watch(args).await,
        }
    }

    pub async fn handle_week_command(&self, command: WeekCommands) -> Result<()> {
        let now = Timestamp::now();
        let result = match command {
            WeekCommands::Set(args) => self.tracker.set_current_week(&args.into(), now).await?,
            WeekCommands::Done(args) => self.tracker.mark_week_done(&args.into(), now).await?,
            WeekCommands::Undo(args) => self.tracker.unmark_week(&args.into(), now).await?,
        };
        self.renderer.render(&result.to_string())
    }

    pub async fn list_plans(&self, params: &ListPlans) -> Result<()> {
        let summaries = self.tracker.list_plans(params, Timestamp::now()).await?;
        self.renderer.render(&summaries.to_string())
    }

    /// Re-renders progress every `interval` seconds until Ctrl-C or the
    /// requested number of refreshes.
    async fn watch(&self, args: WatchArgs) -> Result<()> {
        let params = PlanRef { plan_id: args.id };
        // Fail fast on unknown plans before entering the loop
        self.tracker.get_plan(&params)?;

        let mut ticker = time::interval(Duration::from_secs(args.interval));
        let mut refreshes = 0u32;
        info!(
            "Watching plan '{}' every {}s",
            params.plan_id, args.interval
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let progress = self
                        .tracker
                        .show_progress(&params, Timestamp::now())
                        .await?;
                    if refreshes > 0 {
                        self.renderer.render("\n---\n\n")?;
                    }
                    self.renderer.render(&progress.to_string())?;

                    refreshes += 1;
                    if args.count.is_some_and(|count| refreshes >= count) {
                        debug!("Stopping watch after {refreshes} refreshes");
                        return Ok(());
                    }
                }
                _ = signal::ctrl_c() => {
                    info!("Received Ctrl-C, stopping watch");
                    return Ok(());
                }
            }
        }
    }
}

/// Builds the user-facing failure message for a tracker error, with a hint
/// for the errors a user can act on.
pub fn failure_status(error: &TrackerError) -> OperationStatus {
    let status = OperationStatus::failure(error.to_string());
    match error {
        TrackerError::PlanNotFound { .. } => {
            status.with_hint("Run 'stride plan list' to see the available plans")
        }
        TrackerError::NotStarted { id } => {
            status.with_hint(format!("Run 'stride plan start {id}' first"))
        }
        TrackerError::InvalidInput { .. } => {
            status.with_hint("Check the catalog file passed with --catalog-file")
        }
        _ => status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_status_hints() {
        let status = failure_status(&TrackerError::NotStarted {
            id: "couch-to-5k".to_string(),
        });
        let output = status.to_string();
        assert!(output.starts_with("Error: Plan 'couch-to-5k' has not been started"));
        assert!(output.contains("Hint: Run 'stride plan start couch-to-5k' first"));

        let status = failure_status(&TrackerError::PlanNotFound {
            id: "marathon".to_string(),
        });
        assert!(status.to_string().contains("stride plan list"));

        let status = failure_status(&TrackerError::Configuration {
            message: "boom".to_string(),
        });
        assert!(status.hint.is_none());
    }

    #[test]
    fn test_args_into_params() {
        let params: WeekUpdate = WeekArgs {
            id: "10k-builder".to_string(),
            week: -2,
        }
        .into();
        assert_eq!(params.plan_id, "10k-builder");
        assert_eq!(params.week, -2);

        let params: ListPlans = ListPlansArgs { started: true }.into();
        assert!(params.started_only);
    }
}
