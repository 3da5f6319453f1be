//! Income/expense ledger models.

use jiff::{Timestamp, civil::Date};
use serde::{Deserialize, Serialize};

use super::TxKind;

/// Categories an expense may be filed under.
pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Pesticides",
    "Fertiliser",
    "Seeds",
    "Water",
    "Electricity",
    "Other",
];

/// Categories an income may be filed under.
pub const INCOME_CATEGORIES: &[&str] = &["Sale", "Subsidy", "Other"];

/// A recorded income or expense.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: u64,

    #[serde(rename = "type")]
    pub kind: TxKind,

    pub category: String,

    /// Free-text label, e.g. the buyer or the product bought
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Amount in rupees (always positive; the kind carries the sign)
    pub amount: f64,

    /// Day the money moved
    pub date: Date,

    /// Timestamp when the transaction was recorded (UTC)
    pub created_at: Timestamp,
}

impl Transaction {
    /// Amount with the sign implied by the kind.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TxKind::Income => self.amount,
            TxKind::Expense => -self.amount,
        }
    }
}

/// Validated data for a transaction that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub kind: TxKind,
    pub category: String,
    pub name: Option<String>,
    pub amount: f64,
    pub date: Date,
}

/// Total of one expense category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

/// Totals over a set of transactions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LedgerSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    /// Income minus expenses; negative on a loss
    pub profit: f64,
    /// Expense totals per category, in order of first appearance
    pub expenses_by_category: Vec<CategoryTotal>,
}

impl LedgerSummary {
    /// Fold a list of transactions into totals.
    pub fn from_transactions<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut summary = Self::default();

        for tx in transactions {
            match tx.kind {
                TxKind::Income => summary.total_income += tx.amount,
                TxKind::Expense => {
                    summary.total_expenses += tx.amount;
                    match summary
                        .expenses_by_category
                        .iter_mut()
                        .find(|total| total.category == tx.category)
                    {
                        Some(total) => total.amount += tx.amount,
                        None => summary.expenses_by_category.push(CategoryTotal {
                            category: tx.category.clone(),
                            amount: tx.amount,
                        }),
                    }
                }
            }
        }

        summary.profit = summary.total_income - summary.total_expenses;
        summary
    }

    /// Largest single expense category total, 0 when there are no expenses.
    pub fn max_category_total(&self) -> f64 {
        self.expenses_by_category
            .iter()
            .map(|total| total.amount)
            .fold(0.0, f64::max)
    }
}
