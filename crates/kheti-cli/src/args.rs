use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kheti_core::i18n::Locale;

use crate::cli::{CatalogArgs, CropCommands, LedgerCommands, PlanCommands};

/// Crop calendars, crop log and farm ledger
///
/// Kheti turns a crop, an irrigation method and a sowing date into a dated
/// calendar of field work: land preparation, fertilizer doses, pest scouting,
/// irrigation and harvest. It also keeps a log of the crops you have sown and
/// a ledger of farm income and expenses. Run `kheti serve` to expose the same
/// operations to AI assistants over MCP (Model Context Protocol).
#[derive(Parser)]
#[command(version, about, name = "kheti")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/kheti/kheti.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Language for plan text and dates: en, mr or hi
    #[arg(long, global = true, default_value = "en")]
    pub locale: Locale,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Kheti CLI
///
/// - `plan`: generate a crop calendar without storing anything
/// - `catalog`: list the crops plans can be generated for
/// - `crop`: the crop log
/// - `ledger`: farm income and expenses
/// - `serve`: start the MCP server
#[derive(Subcommand)]
pub enum Commands {
    /// Generate crop calendars
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// List catalog crops and their season length
    Catalog(CatalogArgs),
    /// Manage the crop log
    #[command(alias = "c")]
    Crop {
        #[command(subcommand)]
        command: CropCommands,
    },
    /// Record and review farm income and expenses
    #[command(alias = "l")]
    Ledger {
        #[command(subcommand)]
        command: LedgerCommands,
    },
    /// Start the MCP server
    Serve,
}
