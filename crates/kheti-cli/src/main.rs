//! Kheti CLI Application
//!
//! Command-line interface and MCP server for crop calendars, the crop log and
//! the farm ledger.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{Cli, CropCommands};
use kheti_core::{FarmbookBuilder, verify_catalog};
use log::info;
use mcp::{KhetiMcpServer, run_stdio_server};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        locale,
        command,
    } = Args::parse();

    verify_catalog().context("Crop catalog is inconsistent")?;

    let cli = Cli::new(TerminalRenderer::new(!no_color), locale);

    // Plan generation and the catalog never touch the database.
    match command {
        Some(Plan { command }) => return cli.handle_plan_command(command),
        Some(Catalog(args)) => return cli.show_catalog(args),
        _ => {}
    }

    let farmbook = FarmbookBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize farmbook")?;

    info!("Kheti started");

    match command {
        Some(Crop { command }) => cli.handle_crop_command(&farmbook, command).await,
        Some(Ledger { command }) => cli.handle_ledger_command(&farmbook, command).await,
        Some(Serve) => {
            info!("Starting Kheti MCP server");
            run_stdio_server(KhetiMcpServer::new(farmbook))
                .await
                .context("MCP server failed")
        }
        Some(Plan { .. } | Catalog(_)) | None => {
            cli.handle_crop_command(&farmbook, CropCommands::List).await
        }
    }
}
