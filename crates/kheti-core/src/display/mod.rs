//! Markdown presentation of plans, the crop log and the ledger.
//!
//! Domain models implement [`std::fmt::Display`] directly where one layout
//! fits every context. Plans need a locale for their dates, and collections
//! need empty-state handling, so those are formatted through wrapper types.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │  Views & Result │    │    Markdown     │
//! │ (PlanResult,..) │───▶│    Wrappers     │───▶│ (Terminal/MCP)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`plan`]: plan views ([`PlanView`], [`WeeklyPlanView`])
//! - [`collections`]: collection wrappers ([`CropEntries`], [`Transactions`],
//!   [`CatalogListing`])
//! - [`results`]: operation results ([`CreateResult`], [`DeleteResult`])
//! - [`status`]: confirmation lines ([`OperationStatus`])
//! - [`datetime`]: timestamp and localized date formatting
//! - [`models`]: Display implementations for domain models
//!
//! All output is markdown so the CLI can render it with termimad and the MCP
//! server can return it as text content unchanged.

pub mod collections;
pub mod datetime;
pub mod models;
pub mod plan;
pub mod results;
pub mod status;

pub use collections::{CatalogListing, CropEntries, Transactions};
pub use datetime::{DisplayDate, LocalDateTime};
pub use plan::{PlanView, WeeklyPlanView};
pub use results::{CreateResult, DeleteResult};
pub use status::OperationStatus;
