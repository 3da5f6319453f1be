//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain objects
//! with consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use crate::{
    catalog::{self, CropInfo},
    i18n::Locale,
    models::{CropEntry, Transaction},
};

/// Newtype wrapper for displaying the crop log.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use kheti_core::{
///     display::CropEntries,
///     models::{CropCategory, CropEntry, IrrigationMethod, Season},
/// };
///
/// let entry = CropEntry {
///     id: 1,
///     category: CropCategory::Oilseed,
///     crop: "Soybean".to_string(),
///     season: Season::Kharif,
///     irrigation: IrrigationMethod::Sprinkler,
///     area_acre: 3.0,
///     sowing_date: None,
///     notes: None,
///     created_at: Timestamp::now(),
/// };
///
/// let output = CropEntries(vec![entry]).to_string();
/// assert!(output.contains("## 1. Soybean"));
/// assert!(output.contains("- **Sown**: not yet"));
/// ```
pub struct CropEntries(pub Vec<CropEntry>);

impl CropEntries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of entries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, CropEntry> {
        self.0.iter()
    }
}

impl Index<usize> for CropEntries {
    type Output = CropEntry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a CropEntries {
    type Item = &'a CropEntry;
    type IntoIter = std::slice::Iter<'a, CropEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for CropEntries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No crops recorded.")
        } else {
            for entry in &self.0 {
                write!(f, "{entry}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying ledger transactions.
pub struct Transactions(pub Vec<Transaction>);

impl Transactions {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.0.iter()
    }

    /// Income minus expenses over the listed transactions.
    pub fn net(&self) -> f64 {
        self.0.iter().map(Transaction::signed_amount).sum()
    }
}

impl<'a> IntoIterator for &'a Transactions {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Transactions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No transactions found.");
        }
        for tx in &self.0 {
            write!(f, "{tx}")?;
        }
        writeln!(f)?;
        writeln!(f, "Net: **{:.2}**", self.net())
    }
}

/// Catalog crops with their localized labels and effective durations.
///
/// ```rust
/// use kheti_core::{catalog, display::CatalogListing, i18n::Locale, models::CropCategory};
///
/// let listing = CatalogListing::new(catalog::crops_in(CropCategory::Pulses), Locale::Mr);
/// let output = listing.to_string();
/// assert!(output.contains("| Tur (Pigeon Pea) | तूर | 150 |"));
/// ```
pub struct CatalogListing {
    crops: Vec<&'static CropInfo>,
    locale: Locale,
}

impl CatalogListing {
    pub fn new(crops: impl IntoIterator<Item = &'static CropInfo>, locale: Locale) -> Self {
        Self {
            crops: crops.into_iter().collect(),
            locale,
        }
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }
}

impl fmt::Display for CatalogListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut current = None;

        for crop in &self.crops {
            if current != Some(crop.category) {
                if current.is_some() {
                    writeln!(f)?;
                }
                current = Some(crop.category);
                writeln!(f, "## {}", crop.category)?;
                writeln!(f)?;
                writeln!(f, "| Crop | Label | Days |")?;
                writeln!(f, "|:-|:-|-:|")?;
            }

            let days = catalog::template_for(crop.category, crop.name)
                .map(|template| template.duration_days.to_string())
                .unwrap_or_else(|_| "?".to_string());
            writeln!(
                f,
                "| {} | {} | {} |",
                crop.name,
                crop.label(self.locale),
                days
            )?;
        }

        Ok(())
    }
}
