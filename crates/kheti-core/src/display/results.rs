//! Result wrapper types for displaying operation outcomes.
//!
//! This module provides wrapper types that format the results of create and
//! delete operations with consistent messaging and resource display.

use std::fmt;

use crate::models::{CropEntry, Transaction};

/// Wrapper type for displaying the result of create operations.
///
/// ```rust
/// use jiff::{Timestamp, civil::date};
/// use kheti_core::{
///     display::CreateResult,
///     models::{Transaction, TxKind},
/// };
///
/// let tx = Transaction {
///     id: 3,
///     kind: TxKind::Expense,
///     category: "Seeds".to_string(),
///     name: None,
///     amount: 1800.0,
///     date: date(2025, 6, 10),
///     created_at: Timestamp::now(),
/// };
///
/// let output = CreateResult::new(tx).to_string();
/// assert!(output.starts_with("Recorded expense with ID: 3"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<CropEntry> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added crop entry with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Transaction> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Recorded {} with ID: {}",
            self.resource.kind, self.resource.id
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<CropEntry> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Removed crop entry '{}' (ID: {})",
            self.resource.crop, self.resource.id
        )
    }
}

impl fmt::Display for DeleteResult<Transaction> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Removed {} '{}' of {:.2} (ID: {})",
            self.resource.kind, self.resource.category, self.resource.amount, self.resource.id
        )
    }
}
