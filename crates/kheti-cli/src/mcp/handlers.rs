//! MCP tool handlers implementation

use std::sync::Arc;

use kheti_core::{
    CatalogListing, CreateResult, CropEntries, Farmbook, PlanView, catalog, generate_plan,
    params as core,
};
use log::debug;
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::errors::to_mcp_error;

/// Generic MCP wrapper for core parameter types with serde integration
///
/// Provides JSON deserialization and schema generation for any parameter type
/// while the core types stay free of MCP concerns. `#[serde(transparent)]`
/// keeps the wire form identical to the wrapped type.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

// Type aliases for cleaner usage in function signatures
pub type PlanRequest = McpParams<core::PlanRequest>;
pub type ListCatalog = McpParams<core::ListCatalog>;
pub type AddCropEntry = McpParams<core::AddCropEntry>;
pub type EntryPlan = McpParams<core::EntryPlan>;
pub type RecordTransaction = McpParams<core::RecordTransaction>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(body: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(body.into())]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    farmbook: Arc<Mutex<Farmbook>>,
}

impl McpHandlers {
    pub fn new(farmbook: Arc<Mutex<Farmbook>>) -> Self {
        Self { farmbook }
    }

    /// Plans are returned in their JSON wire form so clients can compute with
    /// the dates.
    pub async fn generate_plan(&self, Parameters(params): Parameters<PlanRequest>) -> McpResult {
        debug!("generate_plan: {params:?}");

        let plan = generate_plan(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to generate plan", &e))?;
        let json = plan
            .to_json_pretty()
            .map_err(|e| to_mcp_error("Failed to serialize plan", &e))?;
        text(json)
    }

    pub async fn list_catalog(&self, Parameters(params): Parameters<ListCatalog>) -> McpResult {
        debug!("list_catalog: {params:?}");

        let params = params.as_ref();
        let locale = params.locale.unwrap_or_default();
        let listing = match params.category {
            Some(category) => CatalogListing::new(catalog::crops_in(category), locale),
            None => CatalogListing::new(catalog::crops(), locale),
        };
        text(listing.to_string())
    }

    pub async fn add_crop(&self, Parameters(params): Parameters<AddCropEntry>) -> McpResult {
        debug!("add_crop: {params:?}");

        let entry = self
            .farmbook
            .lock()
            .await
            .add_crop_entry(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to add crop entry", &e))?;
        text(CreateResult::new(entry).to_string())
    }

    pub async fn list_crops(&self) -> McpResult {
        let entries = self
            .farmbook
            .lock()
            .await
            .list_crop_entries()
            .await
            .map_err(|e| to_mcp_error("Failed to list crop entries", &e))?;

        let title = if entries.is_empty() {
            "No crops recorded yet"
        } else {
            "Crop log"
        };
        text(format!("# {title}\n\n{}", CropEntries(entries)))
    }

    pub async fn crop_plan(&self, Parameters(params): Parameters<EntryPlan>) -> McpResult {
        debug!("crop_plan: {params:?}");

        let params = params.as_ref();
        let crop_plan = self
            .farmbook
            .lock()
            .await
            .plan_for_entry(params)
            .await
            .map_err(|e| to_mcp_error("Failed to build the crop plan", &e))?;
        text(PlanView::for_entry(&crop_plan, params.locale.unwrap_or_default()).to_string())
    }

    pub async fn record_transaction(
        &self,
        Parameters(params): Parameters<RecordTransaction>,
    ) -> McpResult {
        debug!("record_transaction: {params:?}");

        let tx = self
            .farmbook
            .lock()
            .await
            .record_transaction(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to record transaction", &e))?;
        text(CreateResult::new(tx).to_string())
    }

    pub async fn ledger_summary(&self) -> McpResult {
        let summary = self
            .farmbook
            .lock()
            .await
            .ledger_summary()
            .await
            .map_err(|e| to_mcp_error("Failed to summarize ledger", &e))?;
        text(summary.to_string())
    }
}
