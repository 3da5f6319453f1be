//! Command-line argument wrappers and command handlers.
//!
//! Each clap argument struct converts into a core parameter type from
//! [`kheti_core::params`], so validation lives in one place and the MCP
//! server accepts exactly the same requests:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Farmbook / plan engine
//! ```

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use kheti_core::{
    CatalogListing, CreateResult, CropEntries, DeleteResult, Farmbook, OperationStatus,
    PlanView, Transactions, WeeklyPlanView, catalog, generate_plan,
    i18n::Locale,
    models::{CropCategory, IrrigationMethod, PlanResult, Season, TxKind},
    params::{
        AddCropEntry, EntryPlan, Id, ListCatalog, ListTransactions, PlanRequest,
        RecordTransaction,
    },
};
use log::debug;

use crate::renderer::TerminalRenderer;

/// How a generated plan is printed.
#[derive(Args, Clone, Copy)]
pub struct PlanOutputArgs {
    /// Print the plan as JSON ({start, end, stages, tasks})
    #[arg(long, conflicts_with = "weekly")]
    pub json: bool,
    /// Group tasks by week from sowing
    #[arg(long)]
    pub weekly: bool,
}

/// Generate a crop calendar
#[derive(Args)]
pub struct GeneratePlanArgs {
    /// Crop category: cereal, pulses, oilseed, fruit or vegetable
    #[arg(long)]
    pub category: CropCategory,
    /// Crop name as listed by `kheti catalog`
    #[arg(long)]
    pub crop: String,
    /// Irrigation method: rainfed, drip, sprinkler or flood
    #[arg(long, default_value = "rainfed")]
    pub irrigation: IrrigationMethod,
    /// Sown area in acres
    #[arg(long, default_value_t = 1.0)]
    pub area: f64,
    /// Sowing date (YYYY-MM-DD)
    #[arg(long)]
    pub sowing: String,
    #[command(flatten)]
    pub output: PlanOutputArgs,
}

impl GeneratePlanArgs {
    fn to_request(&self, locale: Locale) -> PlanRequest {
        PlanRequest {
            category: self.category,
            crop: self.crop.clone(),
            irrigation: self.irrigation,
            area_acre: self.area,
            sowing_iso: self.sowing.clone(),
            locale: Some(locale),
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Generate a calendar for a crop and sowing date
    #[command(alias = "g")]
    Generate(GeneratePlanArgs),
}

/// List catalog crops
#[derive(Args)]
pub struct CatalogArgs {
    /// Only show one category
    #[arg(long)]
    pub category: Option<CropCategory>,
}

impl CatalogArgs {
    fn to_params(&self, locale: Locale) -> ListCatalog {
        ListCatalog {
            category: self.category,
            locale: Some(locale),
        }
    }
}

/// Add a crop to the crop log
#[derive(Args)]
pub struct AddCropArgs {
    /// Crop category: cereal, pulses, oilseed, fruit or vegetable
    #[arg(long)]
    pub category: CropCategory,
    /// Crop name
    #[arg(long)]
    pub crop: String,
    /// Season: kharif, rabi, summer or annual
    #[arg(long, default_value = "kharif")]
    pub season: Season,
    /// Irrigation method: rainfed, drip, sprinkler or flood
    #[arg(long, default_value = "rainfed")]
    pub irrigation: IrrigationMethod,
    /// Sown area in acres
    #[arg(long)]
    pub area: f64,
    /// Sowing date (YYYY-MM-DD); needed later to generate the plan
    #[arg(long)]
    pub sowing: Option<String>,
    /// Free-text notes, e.g. the plot name
    #[arg(short, long)]
    pub notes: Option<String>,
}

impl From<AddCropArgs> for AddCropEntry {
    fn from(val: AddCropArgs) -> Self {
        AddCropEntry {
            category: val.category,
            crop: val.crop,
            season: val.season,
            irrigation: val.irrigation,
            area_acre: val.area,
            sowing_date: val.sowing,
            notes: val.notes,
        }
    }
}

/// Identify a crop log entry
#[derive(Args)]
pub struct CropIdArgs {
    /// ID of the crop entry
    pub id: u64,
}

impl From<CropIdArgs> for Id {
    fn from(val: CropIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Generate the calendar for a crop log entry
#[derive(Args)]
pub struct CropPlanArgs {
    /// ID of the crop entry
    pub id: u64,
    #[command(flatten)]
    pub output: PlanOutputArgs,
}

#[derive(Subcommand)]
pub enum CropCommands {
    /// Add a crop to the log
    #[command(alias = "a")]
    Add(AddCropArgs),
    /// List logged crops, newest first
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show one logged crop
    #[command(alias = "s")]
    Show(CropIdArgs),
    /// Remove a crop from the log
    #[command(aliases = ["rm", "d"])]
    Remove(CropIdArgs),
    /// Generate the calendar for a logged crop
    #[command(alias = "p")]
    Plan(CropPlanArgs),
}

/// Record an income or an expense
///
/// Give either `--amount`, or `--rate` and `--quantity` to have the amount
/// computed.
#[derive(Args)]
pub struct RecordArgs {
    /// income or expense
    pub kind: TxKind,
    /// Category, e.g. Seeds, Fertiliser, Sale or Subsidy
    pub category: String,
    /// Total amount in rupees
    #[arg(long)]
    pub amount: Option<f64>,
    /// Price per unit
    #[arg(long, requires = "quantity")]
    pub rate: Option<f64>,
    /// Number of units
    #[arg(long, requires = "rate")]
    pub quantity: Option<f64>,
    /// Buyer, seller or item label
    #[arg(long)]
    pub name: Option<String>,
    /// Day of the transaction (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<String>,
}

impl From<RecordArgs> for RecordTransaction {
    fn from(val: RecordArgs) -> Self {
        RecordTransaction {
            kind: val.kind,
            category: val.category,
            name: val.name,
            amount: val.amount,
            rate: val.rate,
            quantity: val.quantity,
            date: val
                .date
                .unwrap_or_else(|| jiff::Zoned::now().date().to_string()),
        }
    }
}

/// List ledger transactions
#[derive(Args)]
pub struct ListLedgerArgs {
    /// Only show income or expense
    #[arg(long = "type")]
    pub kind: Option<TxKind>,
}

impl From<ListLedgerArgs> for ListTransactions {
    fn from(val: ListLedgerArgs) -> Self {
        ListTransactions { kind: val.kind }
    }
}

/// Identify a transaction
#[derive(Args)]
pub struct TransactionIdArgs {
    /// ID of the transaction
    pub id: u64,
}

impl From<TransactionIdArgs> for Id {
    fn from(val: TransactionIdArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum LedgerCommands {
    /// Record an income or expense
    #[command(aliases = ["r", "add"])]
    Record(RecordArgs),
    /// List transactions by date
    #[command(aliases = ["l", "ls"])]
    List(ListLedgerArgs),
    /// Remove a transaction
    #[command(aliases = ["rm", "d"])]
    Remove(TransactionIdArgs),
    /// Totals, profit and expenses per category
    #[command(alias = "s")]
    Summary,
}

/// CLI command handler; renders every result as markdown.
pub struct Cli {
    renderer: TerminalRenderer,
    locale: Locale,
}

impl Cli {
    pub fn new(renderer: TerminalRenderer, locale: Locale) -> Self {
        Self { renderer, locale }
    }

    pub fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Generate(args) => {
                let request = args.to_request(self.locale);
                debug!("generate plan: {request:?}");
                let plan = generate_plan(&request).context("Failed to generate plan")?;
                self.render_plan(&plan, args.output, &args.crop)
            }
        }
    }

    pub fn show_catalog(&self, args: CatalogArgs) -> Result<()> {
        let params = args.to_params(self.locale);
        let locale = params.locale.unwrap_or_default();
        let listing = match params.category {
            Some(category) => CatalogListing::new(catalog::crops_in(category), locale),
            None => CatalogListing::new(catalog::crops(), locale),
        };
        self.renderer.render(&format!("# Crop catalog\n\n{listing}"))
    }

    pub async fn handle_crop_command(&self, farmbook: &Farmbook, command: CropCommands) -> Result<()> {
        match command {
            CropCommands::Add(args) => {
                let entry = farmbook
                    .add_crop_entry(&args.into())
                    .await
                    .context("Failed to add crop entry")?;
                self.renderer.render(&CreateResult::new(entry).to_string())
            }
            CropCommands::List => {
                let entries = farmbook
                    .list_crop_entries()
                    .await
                    .context("Failed to list crop entries")?;
                self.renderer
                    .render(&format!("# Crop log\n\n{}", CropEntries(entries)))
            }
            CropCommands::Show(args) => {
                let id = args.id;
                match farmbook
                    .get_crop_entry(&args.into())
                    .await
                    .context("Failed to get crop entry")?
                {
                    Some(entry) => self.renderer.render(&entry.to_string()),
                    None => self.renderer.render(
                        &OperationStatus::failure(format!("Crop entry {id} not found")).to_string(),
                    ),
                }
            }
            CropCommands::Remove(args) => {
                let entry = farmbook
                    .remove_crop_entry(&args.into())
                    .await
                    .context("Failed to remove crop entry")?;
                self.renderer.render(&DeleteResult::new(entry).to_string())
            }
            CropCommands::Plan(args) => {
                let crop_plan = farmbook
                    .plan_for_entry(&EntryPlan {
                        id: args.id,
                        locale: Some(self.locale),
                    })
                    .await
                    .with_context(|| format!("Failed to build the plan for crop entry {}", args.id))?;

                if args.output.json || args.output.weekly {
                    let title = crop_plan.entry.crop.clone();
                    self.render_plan(&crop_plan.plan, args.output, &title)
                } else {
                    self.renderer
                        .render(&PlanView::for_entry(&crop_plan, self.locale).to_string())
                }
            }
        }
    }

    pub async fn handle_ledger_command(
        &self,
        farmbook: &Farmbook,
        command: LedgerCommands,
    ) -> Result<()> {
        match command {
            LedgerCommands::Record(args) => {
                let tx = farmbook
                    .record_transaction(&args.into())
                    .await
                    .context("Failed to record transaction")?;
                self.renderer.render(&CreateResult::new(tx).to_string())
            }
            LedgerCommands::List(args) => {
                let transactions = farmbook
                    .list_transactions(&args.into())
                    .await
                    .context("Failed to list transactions")?;
                self.renderer
                    .render(&format!("# Ledger\n\n{}", Transactions(transactions)))
            }
            LedgerCommands::Remove(args) => {
                let tx = farmbook
                    .remove_transaction(&args.into())
                    .await
                    .context("Failed to remove transaction")?;
                self.renderer.render(&DeleteResult::new(tx).to_string())
            }
            LedgerCommands::Summary => {
                let summary = farmbook
                    .ledger_summary()
                    .await
                    .context("Failed to summarize ledger")?;
                self.renderer.render(&summary.to_string())
            }
        }
    }

    fn render_plan(&self, plan: &PlanResult, output: PlanOutputArgs, title: &str) -> Result<()> {
        if output.json {
            println!("{}", plan.to_json_pretty()?);
            Ok(())
        } else if output.weekly {
            self.renderer
                .render(&WeeklyPlanView::new(plan, self.locale).to_string())
        } else {
            self.renderer
                .render(&PlanView::new(plan, self.locale).titled(title).to_string())
        }
    }
}
