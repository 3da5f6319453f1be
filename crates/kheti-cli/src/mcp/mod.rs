//! MCP server implementation for Kheti
//!
//! Exposes plan generation, the crop catalog, the crop log and the ledger to
//! AI assistants over the Model Context Protocol on stdio.

use std::sync::Arc;

use anyhow::Result;
use kheti_core::Farmbook;
use log::{debug, error, info};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use tokio::{
    signal::unix::{SignalKind, signal},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

pub use handlers::{
    AddCropEntry, EntryPlan, ListCatalog, McpHandlers, McpResult, PlanRequest, RecordTransaction,
};

const INSTRUCTIONS: &str = r#"Kheti generates crop calendars for Indian farms and keeps a crop log and a farm ledger.

## Plans
- `generate_plan` takes {category, crop, irrigation, areaAcre, sowingISO, locale?} and returns JSON {start, end, stages, tasks} with YYYY-MM-DD dates. Tasks may start before sowing (land preparation).
- Use `list_catalog` to find valid crop names per category and their season length in days.
- Locales: en, mr (Marathi), hi (Hindi). Unknown text falls back to English.

## Crop log
- `add_crop` records a crop with its area, irrigation and optional sowing date.
- `list_crops` shows the log, newest first.
- `crop_plan` builds the calendar for a logged crop; it needs a sowing date.

## Ledger
- `record_transaction` stores an income (Sale, Subsidy, Other) or an expense (Pesticides, Fertiliser, Seeds, Water, Electricity, Other). Give either amount, or rate and quantity.
- `ledger_summary` reports income, expenses, profit and expenses per category."#;

/// MCP server for Kheti
#[derive(Clone)]
pub struct KhetiMcpServer {
    farmbook: Arc<Mutex<Farmbook>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl KhetiMcpServer {
    /// Create a new Kheti MCP server
    pub fn new(farmbook: Farmbook) -> Self {
        Self {
            farmbook: Arc::new(Mutex::new(farmbook)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> McpHandlers {
        McpHandlers::new(self.farmbook.clone())
    }

    #[tool(
        name = "generate_plan",
        description = "Generate a dated crop calendar. Requires category (Cereal, Pulses, Oilseed, Fruit, Vegetable), crop name, irrigation (Rainfed, Drip, Sprinkler, Flood), areaAcre (> 0) and sowingISO (YYYY-MM-DD). Optional locale: en, mr or hi. Returns JSON with start, end, stages and date-ordered tasks."
    )]
    async fn generate_plan(&self, params: Parameters<PlanRequest>) -> McpResult {
        self.handlers().generate_plan(params).await
    }

    #[tool(
        name = "list_catalog",
        description = "List the crops plans can be generated for, grouped by category, with localized names and season length in days. Optionally filter by category and choose a locale."
    )]
    async fn list_catalog(&self, params: Parameters<ListCatalog>) -> McpResult {
        self.handlers().list_catalog(params).await
    }

    #[tool(
        name = "add_crop",
        description = "Record a crop in the farmer's crop log: category, crop, season (default Kharif), irrigation, area_acre and optional sowing_date (YYYY-MM-DD) and notes. Returns the new entry ID."
    )]
    async fn add_crop(&self, params: Parameters<AddCropEntry>) -> McpResult {
        self.handlers().add_crop(params).await
    }

    #[tool(
        name = "list_crops",
        description = "List every crop in the crop log, newest first, with area, irrigation and sowing date."
    )]
    async fn list_crops(&self) -> McpResult {
        self.handlers().list_crops().await
    }

    #[tool(
        name = "crop_plan",
        description = "Build the calendar for a crop log entry by its id, optionally in a locale (en, mr, hi). The entry must have a sowing date."
    )]
    async fn crop_plan(&self, params: Parameters<EntryPlan>) -> McpResult {
        self.handlers().crop_plan(params).await
    }

    #[tool(
        name = "record_transaction",
        description = "Record a farm income or expense. type is income or expense; category must belong to that type; date is YYYY-MM-DD. Give either amount, or rate and quantity (amount = rate x quantity)."
    )]
    async fn record_transaction(&self, params: Parameters<RecordTransaction>) -> McpResult {
        self.handlers().record_transaction(params).await
    }

    #[tool(
        name = "ledger_summary",
        description = "Total income, total expenses, profit (or loss) and expense totals per category over the whole ledger."
    )]
    async fn ledger_summary(&self) -> McpResult {
        self.handlers().ledger_summary().await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for KhetiMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "kheti".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: KhetiMcpServer) -> Result<()> {
    use rmcp::{ServiceExt, transport::stdio};

    info!("Starting Kheti MCP server on stdio");
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
