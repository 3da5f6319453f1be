//! SQLite storage for the crop log and the farm ledger.
//!
//! The plan engine never touches storage; this module only persists what the
//! farmer records. Each [`Database`] wraps one connection and creates the
//! schema on open.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod entry_queries;
pub mod ledger_queries;
pub mod migrations;
mod utils;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) the database file and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
