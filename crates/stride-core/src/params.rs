//! Parameter structures for Stride operations
//!
//! Shared parameter structures used across interfaces (CLI, MCP) without
//! framework-specific derives. Interface layers wrap or convert into these
//! types:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! JSON schema generation for MCP tools is available behind the `schema`
//! feature.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for operations addressing a single plan.
///
/// Used for show_plan, show_progress, start_plan and reset_plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanRef {
    /// Catalog ID of the plan (for example "couch-to-5k")
    pub plan_id: String,
}

/// Parameters for operations addressing one week of a plan.
///
/// Week values outside the plan are clamped into range for set and mark
/// operations; unmarking a week outside the plan does nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct WeekUpdate {
    /// Catalog ID of the plan
    pub plan_id: String,
    /// Week number, starting at 1
    pub week: i64,
}

/// Parameters for listing plans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListPlans {
    /// Only include plans that have been started
    #[serde(default)]
    pub started_only: bool,
}
