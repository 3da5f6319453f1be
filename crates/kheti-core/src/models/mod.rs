//! Data models for crop plans, the crop log and the farm ledger.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping data structures separate from
//! presentation.
//!
//! - [`kinds`]: closed enumerations (category, irrigation, task type, season,
//!   transaction type)
//! - [`plan`]: template rows and the generated [`PlanResult`]
//! - [`entry`]: crop log records
//! - [`ledger`]: transactions and the ledger summary
//!
//! # Examples
//!
//! ```rust
//! use kheti_core::models::{CropCategory, IrrigationMethod, TaskKind};
//!
//! let category: CropCategory = "cereal".parse().unwrap();
//! assert_eq!(category, CropCategory::Cereal);
//! assert_eq!(IrrigationMethod::Drip.interval_days(), Some(3));
//! assert_eq!(TaskKind::Pest.as_str(), "pest");
//! ```

pub mod entry;
pub mod kinds;
pub mod ledger;
pub mod plan;

#[cfg(test)]
mod tests;

pub use entry::{CropEntry, CropPlan, NewCropEntry};
pub use kinds::{CropCategory, IrrigationMethod, Season, TaskKind, TxKind};
pub use ledger::{
    CategoryTotal, EXPENSE_CATEGORIES, INCOME_CATEGORIES, LedgerSummary, NewTransaction,
    Transaction,
};
pub use plan::{PlanResult, PlanStage, PlanTask, ResolvedStage, ResolvedTask};
