//! Data models for plans and progress.
//!
//! This module contains the domain models of the Stride training tracker.
//! Display implementations for these models live in
//! [`crate::display::models`] so that data structures stay separate from
//! presentation.
//!
//! ## Model Overview
//!
//! - [`Plan`] and [`Stage`]: immutable plan definitions from the catalog
//! - [`ProgressRecord`]: the minimal persisted state for one plan
//! - [`ProgressView`]: figures derived from a plan, a record and `now`
//! - [`PlanProgress`]: a plan bundled with its record and view
//! - [`PlanSummary`]: compact per-plan progress for lists
//!
//! # Examples
//!
//! ```rust
//! use stride_core::models::{Plan, ProgressRecord, ProgressState, Stage};
//!
//! let plan = Plan {
//!     id: "base-building".to_string(),
//!     title: "Base Building".to_string(),
//!     description: None,
//!     total_weeks: 2,
//!     stages: vec![Stage {
//!         week: 1,
//!         title: "Easy miles".to_string(),
//!         description: String::new(),
//!     }],
//! };
//!
//! let record = ProgressRecord::default();
//! assert_eq!(record.state(), ProgressState::NotStarted);
//! assert_eq!(plan.total_days(), 14);
//! assert_eq!(plan.clamp_week(10), 2);
//! ```

pub mod plan;
pub mod record;
pub mod status;
pub mod summary;
pub mod view;


pub use plan::{Plan, Stage};
pub use record::ProgressRecord;
pub use status::{ProgressState, WeekStatus};
pub use summary::PlanSummary;
pub use view::{PlanProgress, ProgressView};
