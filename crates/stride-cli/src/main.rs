//! Stride CLI Application
//!
//! Command-line interface and MCP server for the stride training plan
//! tracker.

mod args;
mod cli;
mod mcp;
mod renderer;

use std::process::ExitCode;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{failure_status, Cli};
use log::info;
use mcp::{run_stdio_server, StrideMcpServer};
use renderer::TerminalRenderer;
use stride_core::{params::ListPlans, TrackerBuilder, TrackerError};
use Commands::*;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::init();

    let Args {
        database_file,
        catalog_file,
        no_color,
        command,
    } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .with_catalog_path(catalog_file)
        .build()
        .await
        .context("Failed to initialize tracker")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Stride started");

    let result = match command {
        Some(Plan { command }) => {
            Cli::new(tracker, renderer)
                .handle_plan_command(command)
                .await
        }
        Some(Week { command }) => {
            Cli::new(tracker, renderer)
                .handle_week_command(command)
                .await
        }
        Some(Serve) => {
            info!("Starting Stride MCP server");
            run_stdio_server(StrideMcpServer::new(tracker))
                .await
                .context("MCP server failed")
        }
        None => {
            Cli::new(tracker, renderer)
                .list_plans(&ListPlans::default())
                .await
        }
    };

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => match e.downcast_ref::<TrackerError>() {
            Some(error) => {
                eprint!("{}", failure_status(error));
                Ok(ExitCode::FAILURE)
            }
            None => Err(e),
        },
    }
}
