//! Ledger operations for the Farmbook.

use log::debug;

use super::Farmbook;
use crate::{
    error::{KhetiError, Result},
    models::{LedgerSummary, NewTransaction, Transaction},
    params::{Id, ListTransactions, RecordTransaction},
};

impl Farmbook {
    /// Records an income or expense.
    ///
    /// # Errors
    ///
    /// Returns `KhetiError::InvalidInput` if the category does not belong to
    /// the transaction kind, the amount (or rate and quantity) is not
    /// positive, or the date does not parse.
    pub async fn record_transaction(&self, params: &RecordTransaction) -> Result<Transaction> {
        let new = NewTransaction::try_from(params.clone())?;

        let tx = self
            .with_database(move |db| db.insert_transaction(&new))
            .await?;
        debug!(
            "Recorded {} {} of {} on {}",
            tx.kind.as_str(),
            tx.id,
            tx.amount,
            tx.date
        );
        Ok(tx)
    }

    /// Lists transactions in date order.
    pub async fn list_transactions(&self, params: &ListTransactions) -> Result<Vec<Transaction>> {
        let kind = params.kind;
        self.with_database(move |db| db.list_transactions(kind))
            .await
    }

    /// Removes a transaction and returns what was removed.
    ///
    /// # Errors
    ///
    /// Returns `KhetiError::TransactionNotFound` if no transaction has this ID.
    pub async fn remove_transaction(&self, params: &Id) -> Result<Transaction> {
        let id = params.id;

        let tx = self
            .with_database(move |db| {
                let tx = db
                    .get_transaction(id)?
                    .ok_or(KhetiError::TransactionNotFound { id })?;
                db.delete_transaction(id)?;
                Ok(tx)
            })
            .await?;
        debug!("Removed transaction {id}");
        Ok(tx)
    }

    /// Income, expense and profit totals over the whole ledger.
    pub async fn ledger_summary(&self) -> Result<LedgerSummary> {
        let transactions = self.with_database(|db| db.list_transactions(None)).await?;
        Ok(LedgerSummary::from_transactions(&transactions))
    }
}
