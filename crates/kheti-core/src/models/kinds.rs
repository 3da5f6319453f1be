//! Closed enumerations shared by the plan engine and the record keepers.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Broad crop class; each has one agronomic template.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum CropCategory {
    Cereal,
    Pulses,
    Oilseed,
    Fruit,
    Vegetable,
}

impl CropCategory {
    /// Every category, in catalog order.
    pub const ALL: [CropCategory; 5] = [
        CropCategory::Cereal,
        CropCategory::Pulses,
        CropCategory::Oilseed,
        CropCategory::Fruit,
        CropCategory::Vegetable,
    ];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            CropCategory::Cereal => "Cereal",
            CropCategory::Pulses => "Pulses",
            CropCategory::Oilseed => "Oilseed",
            CropCategory::Fruit => "Fruit",
            CropCategory::Vegetable => "Vegetable",
        }
    }
}

impl FromStr for CropCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cereal" => Ok(CropCategory::Cereal),
            "pulses" => Ok(CropCategory::Pulses),
            "oilseed" => Ok(CropCategory::Oilseed),
            "fruit" => Ok(CropCategory::Fruit),
            "vegetable" => Ok(CropCategory::Vegetable),
            _ => Err(format!("Invalid crop category: {s}")),
        }
    }
}

/// How the field is watered; drives the irrigation reminders of a plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum IrrigationMethod {
    Rainfed,
    Drip,
    Sprinkler,
    Flood,
}

impl IrrigationMethod {
    pub const ALL: [IrrigationMethod; 4] = [
        IrrigationMethod::Rainfed,
        IrrigationMethod::Drip,
        IrrigationMethod::Sprinkler,
        IrrigationMethod::Flood,
    ];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            IrrigationMethod::Rainfed => "Rainfed",
            IrrigationMethod::Drip => "Drip",
            IrrigationMethod::Sprinkler => "Sprinkler",
            IrrigationMethod::Flood => "Flood",
        }
    }

    /// Days between recurring irrigation reminders, `None` for rain-fed
    /// fields which only get fixed-point reminders.
    pub fn interval_days(&self) -> Option<i32> {
        match self {
            IrrigationMethod::Rainfed => None,
            IrrigationMethod::Drip => Some(3),
            IrrigationMethod::Sprinkler => Some(5),
            IrrigationMethod::Flood => Some(10),
        }
    }
}

impl FromStr for IrrigationMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rainfed" => Ok(IrrigationMethod::Rainfed),
            "drip" => Ok(IrrigationMethod::Drip),
            "sprinkler" => Ok(IrrigationMethod::Sprinkler),
            "flood" => Ok(IrrigationMethod::Flood),
            _ => Err(format!("Invalid irrigation method: {s}")),
        }
    }
}

/// Category tag of a plan task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Activity,
    Fertilizer,
    Pest,
    Irrigation,
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Activity => "activity",
            TaskKind::Fertilizer => "fertilizer",
            TaskKind::Pest => "pest",
            TaskKind::Irrigation => "irrigation",
        }
    }

    /// Get the kind with a marker for list display.
    ///
    /// ```rust
    /// use kheti_core::models::TaskKind;
    ///
    /// assert_eq!(TaskKind::Fertilizer.with_icon(), "◆ fertilizer");
    /// assert_eq!(TaskKind::Irrigation.with_icon(), "≈ irrigation");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            TaskKind::Activity => "● activity",
            TaskKind::Fertilizer => "◆ fertilizer",
            TaskKind::Pest => "▲ pest",
            TaskKind::Irrigation => "≈ irrigation",
        }
    }
}

impl FromStr for TaskKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "activity" => Ok(TaskKind::Activity),
            "fertilizer" => Ok(TaskKind::Fertilizer),
            "pest" => Ok(TaskKind::Pest),
            "irrigation" => Ok(TaskKind::Irrigation),
            _ => Err(format!("Invalid task type: {s}")),
        }
    }
}

/// Cropping season a crop entry was sown in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum Season {
    #[default]
    Kharif,
    Rabi,
    Summer,
    Annual,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Kharif => "Kharif",
            Season::Rabi => "Rabi",
            Season::Summer => "Summer",
            Season::Annual => "Annual",
        }
    }
}

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kharif" => Ok(Season::Kharif),
            "rabi" => Ok(Season::Rabi),
            "summer" => Ok(Season::Summer),
            "annual" => Ok(Season::Annual),
            _ => Err(format!("Invalid season: {s}")),
        }
    }
}

/// Direction of a ledger transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

impl TxKind {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Income => "income",
            TxKind::Expense => "expense",
        }
    }

    /// Categories a transaction of this kind may be filed under.
    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            TxKind::Income => super::ledger::INCOME_CATEGORIES,
            TxKind::Expense => super::ledger::EXPENSE_CATEGORIES,
        }
    }
}

impl FromStr for TxKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TxKind::Income),
            "expense" => Ok(TxKind::Expense),
            _ => Err(format!("Invalid transaction type: {s}")),
        }
    }
}
