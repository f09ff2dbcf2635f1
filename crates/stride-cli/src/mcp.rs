//! MCP server implementation for Stride
//!
//! Exposes the tracker over the Model Context Protocol so AI assistants can
//! browse plans, read progress and record completed weeks. Tool parameters are
//! the `stride-core` parameter types, which derive `JsonSchema` through the
//! core crate's `schema` feature.

use std::future::Future;

use anyhow::Result;
use jiff::Timestamp;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router, ErrorData, ServerHandler,
};
use stride_core::{
    params::{ListPlans, PlanRef, WeekUpdate},
    Tracker, TrackerError,
};
use tokio::signal::unix::{signal, SignalKind};

use crate::cli::failure_status;

type McpResult = Result<CallToolResult, ErrorData>;

/// Converts tracker errors to MCP errors.
///
/// Errors the caller can fix are reported as invalid parameters with the same
/// hint the CLI prints; everything else is an internal error.
fn to_mcp_error(error: TrackerError) -> ErrorData {
    let message = failure_status(&error).to_string();
    match error {
        TrackerError::PlanNotFound { .. }
        | TrackerError::NotStarted { .. }
        | TrackerError::InvalidInput { .. } => ErrorData::invalid_params(message, None),
        _ => ErrorData::internal_error(message, None),
    }
}

fn text_result(text: String) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// MCP server for Stride
#[derive(Clone)]
pub struct StrideMcpServer {
    tracker: Tracker,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl StrideMcpServer {
    /// Create a new Stride MCP server
    pub fn new(tracker: Tracker) -> Self {
        Self {
            tracker,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "list_plans",
        description = "List every training plan in the catalog with its progress: status, current week, weeks completed and percentage done. Use started_only=true to only see plans that have been started."
    )]
    async fn list_plans(&self, Parameters(params): Parameters<ListPlans>) -> McpResult {
        debug!("list_plans: {params:?}");

        let summaries = self
            .tracker
            .list_plans(&params, Timestamp::now())
            .await
            .map_err(to_mcp_error)?;

        text_result(summaries.to_string())
    }

    #[tool(
        name = "show_plan",
        description = "Show a plan definition: title, description, length in weeks and the content of each weekly stage. Does not include progress; use show_progress for that."
    )]
    async fn show_plan(&self, Parameters(params): Parameters<PlanRef>) -> McpResult {
        debug!("show_plan: {params:?}");

        let plan = self.tracker.get_plan(&params).map_err(to_mcp_error)?;
        text_result(plan.to_string())
    }

    #[tool(
        name = "show_progress",
        description = "Show progress through a plan: current week, weeks completed, days elapsed and remaining, estimated completion date and the status of every week. If calendar time has moved past the current week, the current week is advanced and saved."
    )]
    async fn show_progress(&self, Parameters(params): Parameters<PlanRef>) -> McpResult {
        debug!("show_progress: {params:?}");

        let progress = self
            .tracker
            .show_progress(&params, Timestamp::now())
            .await
            .map_err(to_mcp_error)?;

        text_result(progress.to_string())
    }

    #[tool(
        name = "start_plan",
        description = "Start a plan from now at week 1. Starting a plan that is already in progress restarts it and discards all completed weeks."
    )]
    async fn start_plan(&self, Parameters(params): Parameters<PlanRef>) -> McpResult {
        debug!("start_plan: {params:?}");

        let result = self
            .tracker
            .start_plan(&params, Timestamp::now())
            .await
            .map_err(to_mcp_error)?;

        text_result(result.to_string())
    }

    #[tool(
        name = "reset_plan",
        description = "Discard all progress on a plan and return it to the not started state. This cannot be undone."
    )]
    async fn reset_plan(&self, Parameters(params): Parameters<PlanRef>) -> McpResult {
        debug!("reset_plan: {params:?}");

        let result = self
            .tracker
            .reset_plan(&params, Timestamp::now())
            .await
            .map_err(to_mcp_error)?;

        text_result(result.to_string())
    }

    #[tool(
        name = "set_current_week",
        description = "Move the current week of a started plan. Weeks outside the plan are clamped to the first or last week. Completed weeks are not changed."
    )]
    async fn set_current_week(&self, Parameters(params): Parameters<WeekUpdate>) -> McpResult {
        debug!("set_current_week: {params:?}");

        let result = self
            .tracker
            .set_current_week(&params, Timestamp::now())
            .await
            .map_err(to_mcp_error)?;

        text_result(result.to_string())
    }

    #[tool(
        name = "mark_week_done",
        description = "Mark a week of a started plan as done. Marking the current week done also moves the current week forward by one, unless it is the last week."
    )]
    async fn mark_week_done(&self, Parameters(params): Parameters<WeekUpdate>) -> McpResult {
        debug!("mark_week_done: {params:?}");

        let result = self
            .tracker
            .mark_week_done(&params, Timestamp::now())
            .await
            .map_err(to_mcp_error)?;

        text_result(result.to_string())
    }

    #[tool(
        name = "unmark_week",
        description = "Remove the done mark from a week of a started plan. The current week does not move back."
    )]
    async fn unmark_week(&self, Parameters(params): Parameters<WeekUpdate>) -> McpResult {
        debug!("unmark_week: {params:?}");

        let result = self
            .tracker
            .unmark_week(&params, Timestamp::now())
            .await
            .map_err(to_mcp_error)?;

        text_result(result.to_string())
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for StrideMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "stride".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(r#"Stride tracks progress through multi-week training plans.

## Core Concepts
- **Plans**: Fixed catalog entries with a length in weeks and optional content per week, identified by a slug such as `couch-to-5k`
- **Progress**: When a plan was started, the current week and the set of weeks marked done
- **Days elapsed**: The larger of calendar days since the start and seven days per completed week, capped at the plan length

## Workflow Examples

### Starting a Plan
1. Use `list_plans` to see what is available
2. Use `show_plan` to read the weekly stages
3. Use `start_plan` to begin at week 1 from today

### Tracking Progress
1. Use `show_progress` to see where the user is and what this week holds
2. Use `mark_week_done` when the user finishes a week
3. Use `set_current_week` or `unmark_week` to correct mistakes

## Notes
- Week operations fail on plans that have not been started
- `start_plan` on a started plan restarts it; `reset_plan` clears it"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: StrideMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Stride MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use stride_core::{PlanCatalog, TrackerBuilder};
    use tempfile::TempDir;

    use super::*;

    async fn create_test_server() -> (TempDir, StrideMcpServer) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let tracker = TrackerBuilder::new()
            .with_database_path(Some(temp_dir.path().join("test.db")))
            .with_catalog(PlanCatalog::builtin().expect("Failed to load catalog"))
            .build()
            .await
            .expect("Failed to create tracker");
        (temp_dir, StrideMcpServer::new(tracker))
    }

    fn plan_ref(id: &str) -> Parameters<PlanRef> {
        Parameters(PlanRef {
            plan_id: id.to_string(),
        })
    }

    fn week(id: &str, week: i64) -> Parameters<WeekUpdate> {
        Parameters(WeekUpdate {
            plan_id: id.to_string(),
            week,
        })
    }

    #[tokio::test]
    async fn test_registers_all_tools() {
        let (_temp_dir, server) = create_test_server().await;
        let mut names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "list_plans",
                "mark_week_done",
                "reset_plan",
                "set_current_week",
                "show_plan",
                "show_progress",
                "start_plan",
                "unmark_week",
            ]
        );
    }

    #[test]
    fn test_week_update_schema() {
        let schema = serde_json::to_value(schemars::schema_for!(WeekUpdate)).unwrap();
        let properties = &schema["properties"];
        assert!(properties.get("plan_id").is_some());
        assert!(properties.get("week").is_some());
    }

    #[tokio::test]
    async fn test_week_tools_flow() {
        let (_temp_dir, server) = create_test_server().await;

        server
            .start_plan(plan_ref("couch-to-5k"))
            .await
            .expect("start_plan failed");
        let result = server
            .mark_week_done(week("couch-to-5k", 1))
            .await
            .expect("mark_week_done failed");
        assert_eq!(result.is_error, Some(false));

        let progress = server
            .show_progress(plan_ref("couch-to-5k"))
            .await
            .expect("show_progress failed");
        assert_eq!(progress.is_error, Some(false));
    }

    #[tokio::test]
    async fn test_errors_are_invalid_params() {
        let (_temp_dir, server) = create_test_server().await;

        let err = server
            .mark_week_done(week("couch-to-5k", 1))
            .await
            .expect_err("unstarted plan should fail");
        assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("has not been started"));
        assert!(err.message.contains("stride plan start couch-to-5k"));

        let err = server
            .show_plan(plan_ref("marathon"))
            .await
            .expect_err("unknown plan should fail");
        assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
    }
}
