//! Async facade over the crop log, the ledger and the plan engine.
//!
//! [`Farmbook`] is what the CLI and the MCP server talk to. Every method
//! validates its parameters up front, then runs the SQLite work on
//! [`tokio::task::spawn_blocking`] with a fresh [`Database`] connection, so
//! callers never block the async runtime.
//!
//! - [`builder`]: creates a [`Farmbook`], resolving the database location
//! - [`entry_ops`]: crop log operations and per-entry plans
//! - [`ledger_ops`]: income/expense operations and the ledger summary
//!
//! # Examples
//!
//! ```rust,no_run
//! use kheti_core::{
//!     FarmbookBuilder,
//!     models::{CropCategory, IrrigationMethod, Season},
//!     params::{AddCropEntry, EntryPlan},
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let farmbook = FarmbookBuilder::new()
//!     .with_database_path(Some("/tmp/kheti.db"))
//!     .build()
//!     .await?;
//!
//! let entry = farmbook
//!     .add_crop_entry(&AddCropEntry {
//!         category: CropCategory::Cereal,
//!         crop: "Rice".to_string(),
//!         season: Season::Kharif,
//!         irrigation: IrrigationMethod::Rainfed,
//!         area_acre: 2.0,
//!         sowing_date: Some("2025-06-01".to_string()),
//!         notes: None,
//!     })
//!     .await?;
//!
//! let crop_plan = farmbook
//!     .plan_for_entry(&EntryPlan { id: entry.id, locale: None })
//!     .await?;
//! println!("Harvest ends {}", crop_plan.plan.end);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

pub mod builder;
pub mod entry_ops;
pub mod ledger_ops;

#[cfg(test)]
mod tests;

pub use builder::FarmbookBuilder;
use crate::{
    db::Database,
    error::{KhetiError, Result},
};

/// Entry point for the crop log and the ledger.
#[derive(Debug, Clone)]
pub struct Farmbook {
    pub(crate) db_path: PathBuf,
}

impl Farmbook {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Location of the SQLite file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Run `op` against a fresh connection on the blocking pool.
    async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(|e| KhetiError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
