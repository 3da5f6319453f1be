//! Display implementations for domain models.
//!
//! Markdown output for the crop log and ledger records, kept apart from the
//! model definitions.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    CropCategory, CropEntry, IrrigationMethod, LedgerSummary, Season, TaskKind, Transaction,
    TxKind,
};

const BAR_WIDTH: f64 = 20.0;

macro_rules! display_as_str {
    ($($ty:ty),+) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })+
    };
}

display_as_str!(CropCategory, IrrigationMethod, TaskKind, Season, TxKind);

impl fmt::Display for CropEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}. {}", self.id, self.crop)?;
        writeln!(f)?;
        writeln!(f, "- **Category**: {}", self.category)?;
        writeln!(f, "- **Season**: {}", self.season)?;
        writeln!(f, "- **Irrigation**: {}", self.irrigation)?;
        writeln!(f, "- **Area**: {} acre(s)", self.area_acre)?;
        match self.sowing_date {
            Some(date) => writeln!(f, "- **Sown**: {date}")?,
            None => writeln!(f, "- **Sown**: not yet")?,
        }
        writeln!(f, "- **Recorded**: {}", LocalDateTime(&self.created_at))?;

        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.kind {
            TxKind::Income => '+',
            TxKind::Expense => '-',
        };
        write!(
            f,
            "- `#{}` {} **{}{:.2}** {}",
            self.id, self.date, sign, self.amount, self.category
        )?;
        if let Some(name) = &self.name {
            write!(f, " ({name})")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for LedgerSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Ledger summary")?;
        writeln!(f)?;
        writeln!(f, "- **Income**: {:.2}", self.total_income)?;
        writeln!(f, "- **Expenses**: {:.2}", self.total_expenses)?;
        if self.profit < 0.0 {
            writeln!(f, "- **Loss**: {:.2}", -self.profit)?;
        } else {
            writeln!(f, "- **Profit**: {:.2}", self.profit)?;
        }

        if self.expenses_by_category.is_empty() {
            return Ok(());
        }

        writeln!(f, "\n## Expenses by category")?;
        writeln!(f)?;
        let max = self.max_category_total();
        for total in &self.expenses_by_category {
            let filled = if max > 0.0 {
                (total.amount / max * BAR_WIDTH).round() as usize
            } else {
                0
            };
            writeln!(
                f,
                "- {:<12} `{}` {:.2}",
                total.category,
                "█".repeat(filled.max(1)),
                total.amount
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::{Timestamp, civil::date};

    use super::*;

    fn tx(kind: TxKind, category: &str, amount: f64) -> Transaction {
        Transaction {
            id: 7,
            kind,
            category: category.to_string(),
            name: None,
            amount,
            date: date(2025, 6, 10),
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_transaction_sign() {
        let out = tx(TxKind::Expense, "Seeds", 1800.0).to_string();
        assert_eq!(out, "- `#7` 2025-06-10 **-1800.00** Seeds\n");

        let mut sale = tx(TxKind::Income, "Sale", 52500.0);
        sale.name = Some("APMC Latur".to_string());
        assert!(sale.to_string().ends_with("**+52500.00** Sale (APMC Latur)\n"));
    }

    #[test]
    fn test_summary_reports_loss_and_bars() {
        let txs = [
            tx(TxKind::Expense, "Seeds", 1000.0),
            tx(TxKind::Expense, "Water", 250.0),
            tx(TxKind::Income, "Subsidy", 500.0),
        ];
        let out = LedgerSummary::from_transactions(&txs).to_string();

        assert!(out.contains("- **Loss**: 750.00"));
        assert!(out.contains(&format!("`{}` 1000.00", "█".repeat(20))));
        assert!(out.contains(&format!("`{}` 250.00", "█".repeat(5))));
    }

    #[test]
    fn test_empty_summary_has_no_category_section() {
        let out = LedgerSummary::default().to_string();
        assert!(out.contains("- **Profit**: 0.00"));
        assert!(!out.contains("by category"));
    }
}
