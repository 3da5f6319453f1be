//! Ledger transaction queries.

use jiff::Timestamp;
use rusqlite::{OptionalExtension, Row, params};

use super::utils::{parse_text, read_id};
use crate::{
    error::{DatabaseResultExt, KhetiError, Result},
    models::{NewTransaction, Transaction, TxKind},
};

const INSERT_TRANSACTION_SQL: &str = "INSERT INTO transactions (kind, category, name, amount, date, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const TRANSACTION_COLUMNS: &str = "id, kind, category, name, amount, date, created_at";
const DELETE_TRANSACTION_SQL: &str = "DELETE FROM transactions WHERE id = ?1";

fn transaction_from_row(row: &Row<'_>) -> rusqlite::Result<Transaction> {
    Ok(Transaction {
        id: read_id(row, 0)?,
        kind: parse_text(row, 1)?,
        category: row.get(2)?,
        name: row.get(3)?,
        amount: row.get(4)?,
        date: parse_text(row, 5)?,
        created_at: parse_text(row, 6)?,
    })
}

impl super::Database {
    /// Stores a validated transaction and returns it with its new ID.
    pub fn insert_transaction(&mut self, new: &NewTransaction) -> Result<Transaction> {
        let now = Timestamp::now();

        self.connection
            .execute(
                INSERT_TRANSACTION_SQL,
                params![
                    new.kind.as_str(),
                    new.category,
                    new.name,
                    new.amount,
                    new.date.to_string(),
                    now.to_string(),
                ],
            )
            .db_context("Failed to insert transaction")?;

        Ok(Transaction {
            id: self.connection.last_insert_rowid() as u64,
            kind: new.kind,
            category: new.category.clone(),
            name: new.name.clone(),
            amount: new.amount,
            date: new.date,
            created_at: now,
        })
    }

    /// Retrieves a transaction by its ID.
    pub fn get_transaction(&self, id: u64) -> Result<Option<Transaction>> {
        self.connection
            .query_row(
                &format!("SELECT {TRANSACTION_COLUMNS} FROM transactions WHERE id = ?1"),
                params![id as i64],
                transaction_from_row,
            )
            .optional()
            .db_context("Failed to query transaction")
    }

    /// Lists transactions in date order, optionally only one kind.
    pub fn list_transactions(&self, kind: Option<TxKind>) -> Result<Vec<Transaction>> {
        let mut query = format!("SELECT {TRANSACTION_COLUMNS} FROM transactions");
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(kind) = kind {
            query.push_str(" WHERE kind = ?");
            params_vec.push(Box::new(kind.as_str()));
        }
        query.push_str(" ORDER BY date ASC, id ASC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let rows = stmt.query_map(&params_refs[..], transaction_from_row)
            .db_context("Failed to query transactions")?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read transactions")
    }

    /// Deletes a transaction.
    pub fn delete_transaction(&mut self, id: u64) -> Result<()> {
        let deleted = self
            .connection
            .execute(DELETE_TRANSACTION_SQL, params![id as i64])
            .db_context("Failed to delete transaction")?;

        if deleted == 0 {
            return Err(KhetiError::TransactionNotFound { id });
        }
        Ok(())
    }
}
