//! Core library for the Stride training plan tracker.
//!
//! This crate provides the business logic for following multi-week training
//! plans: the plan catalog, the pure progress engine, progress persistence
//! and error handling.
//!
//! # Architecture
//!
//! - **Catalog** ([`catalog`]): immutable plan definitions, built in or loaded
//!   from a JSON file
//! - **Engine** ([`engine`]): pure functions computing progress figures from a
//!   plan, a stored record and an explicit `now`
//! - **Store** ([`store`], [`db`]): one progress record per plan, persisted
//!   in SQLite with an in-memory fallback
//! - **Tracker** ([`tracker`]): async facade tying the three together
//! - **Display** ([`display`]): markdown [`std::fmt::Display`] output shared
//!   by the CLI and the MCP server
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use jiff::Timestamp;
//! use stride_core::{params::{ListPlans, PlanRef}, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("progress.db"))
//!     .build()
//!     .await?;
//!
//! let plan = PlanRef { plan_id: "couch-to-5k".to_string() };
//! tracker.start_plan(&plan, Timestamp::now()).await?;
//!
//! let progress = tracker.show_progress(&plan, Timestamp::now()).await?;
//! println!("{progress}");
//!
//! let plans = tracker.list_plans(&ListPlans::default(), Timestamp::now()).await?;
//! for plan in &plans {
//!     println!("{}: week {} of {}", plan.title, plan.current_week, plan.total_weeks);
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod db;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod params;
pub mod store;
pub mod tracker;

// Re-export commonly used types
pub use catalog::PlanCatalog;
pub use db::Database;
pub use display::{OperationStatus, PlanSummaries, UpdateResult};
pub use error::{Result, TrackerError};
pub use models::{
    Plan, PlanProgress, PlanSummary, ProgressRecord, ProgressState, ProgressView, Stage,
    WeekStatus,
};
pub use params::{ListPlans, PlanRef, WeekUpdate};
pub use store::{MemoryStore, ProgressStore};
pub use tracker::{Tracker, TrackerBuilder};
