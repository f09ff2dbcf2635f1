//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds wrappers for collections and operation results so every
//! interface formats output the same way.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Formatted     │
//! │ (Plan, Progress)│───▶│ Result Types    │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (PlanSummaries)
//! - [`results`]: Operation result types (UpdateResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ## Status Messages
//!
//! ```rust
//! use stride_core::display::OperationStatus;
//!
//! let success = OperationStatus::success("Progress saved".to_string());
//! assert!(success.to_string().starts_with("Success:"));
//!
//! let error = OperationStatus::failure("Plan not started".to_string());
//! assert!(error.to_string().starts_with("Error:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::PlanSummaries;
pub use datetime::{LocalDate, LocalDateTime};
pub use results::{describe_changes, UpdateResult};
pub use status::OperationStatus;
