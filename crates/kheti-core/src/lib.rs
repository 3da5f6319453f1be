//! Core library for Kheti, a crop planner and farm record keeper.
//!
//! The heart of the crate is a pure plan engine: given a crop category, a
//! crop, an irrigation method, an area and a sowing date, [`generate_plan`]
//! projects a static template onto calendar dates and returns localized
//! stages and tasks. Around it sit a crop log and an income/expense ledger
//! stored in SQLite and reached through the async [`Farmbook`] facade.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): plain data, serializable to the JSON wire
//!   form
//! - **Display Wrappers** ([`display`]): markdown views for plans, calendars
//!   and records
//! - **Terminal Rendering**: rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use kheti_core::{
//!     generate_plan,
//!     i18n::Locale,
//!     models::{CropCategory, IrrigationMethod},
//!     params::PlanRequest,
//! };
//!
//! let plan = generate_plan(&PlanRequest {
//!     category: CropCategory::Pulses,
//!     crop: "Tur (Pigeon Pea)".to_string(),
//!     irrigation: IrrigationMethod::Drip,
//!     area_acre: 1.5,
//!     sowing_iso: "2025-06-15".to_string(),
//!     locale: Some(Locale::Hi),
//! })
//! .unwrap();
//!
//! assert_eq!(plan.duration_days(), 150);
//! assert!(plan.tasks.windows(2).all(|w| w[0].date <= w[1].date));
//! ```
//!
//! Records go through the facade:
//!
//! ```rust,no_run
//! use kheti_core::{FarmbookBuilder, display::CropEntries};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let farmbook = FarmbookBuilder::new()
//!     .with_database_path(Some("kheti.db"))
//!     .build()
//!     .await?;
//!
//! let entries = farmbook.list_crop_entries().await?;
//! println!("{}", CropEntries(entries));
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod dates;
pub mod db;
pub mod display;
pub mod error;
pub mod farmbook;
pub mod i18n;
pub mod models;
pub mod params;
pub mod schedule;

// Re-export commonly used types
pub use catalog::{CropInfo, verify_catalog};
pub use db::Database;
pub use display::{
    CatalogListing, CreateResult, CropEntries, DeleteResult, OperationStatus, PlanView,
    Transactions, WeeklyPlanView,
};
pub use error::{KhetiError, Result};
pub use farmbook::{Farmbook, FarmbookBuilder};
pub use i18n::{Locale, translate};
pub use models::{CropEntry, CropPlan, LedgerSummary, PlanResult, Transaction};
pub use params::{
    AddCropEntry, EntryPlan, Id, ListCatalog, ListTransactions, PlanRequest, RecordTransaction,
};
pub use schedule::{PlanCalendar, generate_plan};
