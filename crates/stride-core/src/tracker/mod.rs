//! High-level tracker API for plans and progress.
//!
//! The [`Tracker`] is the boundary the presentation layer talks to. Each
//! operation looks the plan up in the catalog, loads its progress record from
//! the store, runs the pure [`crate::engine`] and writes back whatever record
//! the engine produced.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI / MCP     │    │     Tracker     │    │     Engine      │
//! │  (presentation) │───▶│ (catalog+store) │───▶│ (pure figures)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Tracker`] instances with configuration
//! - [`plan_ops`]: Read operations (plans, progress, summaries)
//! - [`week_ops`]: Mutations (start, reset, week pointer, completion marks)
//!
//! ## Time
//!
//! Every operation takes `now` explicitly. Callers that want a live display
//! simply call [`Tracker::show_progress`] again with a fresh timestamp.
//!
//! ## Persistence policy
//!
//! Store failures never fail an operation. Reads fall back to the unstarted
//! record and writes are dropped, both with a `warn!` log line. A database
//! that cannot be opened is replaced by an in-memory store shared by every
//! clone of the tracker. Only catalog
//! lookups ([`TrackerError::PlanNotFound`]) and week operations on unstarted
//! plans ([`TrackerError::NotStarted`]) are reported to the caller.
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use jiff::Timestamp;
//! use stride_core::{params::{PlanRef, WeekUpdate}, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("/tmp/stride.db"))
//!     .build()
//!     .await?;
//!
//! let plan = PlanRef { plan_id: "couch-to-5k".to_string() };
//! tracker.start_plan(&plan, Timestamp::now()).await?;
//!
//! let done = WeekUpdate { plan_id: "couch-to-5k".to_string(), week: 1 };
//! let result = tracker.mark_week_done(&done, Timestamp::now()).await?;
//! assert_eq!(result.resource.record.current_week, 2);
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, sync::Arc};

use tokio::task;

use crate::{
    catalog::PlanCatalog,
    error::{Result, TrackerError},
    store::MemoryStore,
};

pub mod builder;
pub mod plan_ops;
pub(crate) mod session;
pub mod week_ops;

#[cfg(test)]
mod tests;

pub use builder::TrackerBuilder;

/// Main tracker interface for plans and progress.
#[derive(Debug, Clone)]
pub struct Tracker {
    pub(crate) db_path: PathBuf,
    pub(crate) catalog: Arc<PlanCatalog>,
    pub(crate) fallback: MemoryStore,
}

impl Tracker {
    /// Creates a new tracker with the specified database path and catalog.
    pub(crate) fn new(db_path: PathBuf, catalog: Arc<PlanCatalog>) -> Self {
        Self {
            db_path,
            catalog,
            fallback: MemoryStore::new(),
        }
    }

    /// The catalog this tracker serves plans from.
    pub fn catalog(&self) -> &PlanCatalog {
        &self.catalog
    }

    /// Runs blocking store work off the async runtime.
    pub(crate) async fn run_blocking<T, F>(f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        task::spawn_blocking(f)
            .await
            .map_err(|e| TrackerError::Configuration {
                message: format!("Task join error: {e}"),
            })?
    }
}
