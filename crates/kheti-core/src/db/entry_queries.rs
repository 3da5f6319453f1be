//! Crop log CRUD operations.

use jiff::Timestamp;
use rusqlite::{OptionalExtension, Row, params};

use super::utils::{parse_optional_date, parse_text, read_id};
use crate::{
    error::{DatabaseResultExt, KhetiError, Result},
    models::{CropEntry, NewCropEntry},
};

const INSERT_ENTRY_SQL: &str = "INSERT INTO crop_entries (category, crop, season, irrigation, area_acre, sowing_date, notes, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const ENTRY_COLUMNS: &str =
    "id, category, crop, season, irrigation, area_acre, sowing_date, notes, created_at";
const DELETE_ENTRY_SQL: &str = "DELETE FROM crop_entries WHERE id = ?1";

fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<CropEntry> {
    Ok(CropEntry {
        id: read_id(row, 0)?,
        category: parse_text(row, 1)?,
        crop: row.get(2)?,
        season: parse_text(row, 3)?,
        irrigation: parse_text(row, 4)?,
        area_acre: row.get(5)?,
        sowing_date: parse_optional_date(row, 6)?,
        notes: row.get(7)?,
        created_at: parse_text(row, 8)?,
    })
}

impl super::Database {
    /// Stores a validated crop entry and returns it with its new ID.
    pub fn insert_crop_entry(&mut self, entry: &NewCropEntry) -> Result<CropEntry> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();

        tx.execute(
            INSERT_ENTRY_SQL,
            params![
                entry.category.as_str(),
                entry.crop,
                entry.season.as_str(),
                entry.irrigation.as_str(),
                entry.area_acre,
                entry.sowing_date.map(|d| d.to_string()),
                entry.notes,
                now.to_string(),
            ],
        )
        .db_context("Failed to insert crop entry")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(CropEntry {
            id,
            category: entry.category,
            crop: entry.crop.clone(),
            season: entry.season,
            irrigation: entry.irrigation,
            area_acre: entry.area_acre,
            sowing_date: entry.sowing_date,
            notes: entry.notes.clone(),
            created_at: now,
        })
    }

    /// Retrieves a crop entry by its ID.
    pub fn get_crop_entry(&self, id: u64) -> Result<Option<CropEntry>> {
        self.connection
            .query_row(
                &format!("SELECT {ENTRY_COLUMNS} FROM crop_entries WHERE id = ?1"),
                params![id as i64],
                entry_from_row,
            )
            .optional()
            .db_context("Failed to query crop entry")
    }

    /// Lists all crop entries, most recently recorded first.
    pub fn list_crop_entries(&self) -> Result<Vec<CropEntry>> {
        let mut stmt = self
            .connection
            .prepare(&format!(
                "SELECT {ENTRY_COLUMNS} FROM crop_entries ORDER BY id DESC"
            ))
            .db_context("Failed to prepare query")?;

        let rows = stmt.query_map([], entry_from_row)
            .db_context("Failed to query crop entries")?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read crop entries")
    }

    /// Deletes a crop entry.
    pub fn delete_crop_entry(&mut self, id: u64) -> Result<()> {
        let deleted = self
            .connection
            .execute(DELETE_ENTRY_SQL, params![id as i64])
            .db_context("Failed to delete crop entry")?;

        if deleted == 0 {
            return Err(KhetiError::EntryNotFound { id });
        }
        Ok(())
    }
}
