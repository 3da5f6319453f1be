//! Request structures shared by every interface.
//!
//! The CLI and the MCP server both speak these types: clap argument structs
//! convert into them with `From`, and the MCP layer wraps them with
//! `#[serde(transparent)]` so the JSON schema is derived from the same
//! definitions (`schema` feature). Raw strings and numbers from the outside
//! world are checked here and converted into the validated `New*` models
//! before anything reaches storage.
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌──────────────┐    ┌─────────────┐
//! │  CLI args   │───▶│ core params │───▶│  validated   │───▶│  farmbook / │
//! │ MCP params  │    │ (this file) │    │ New* models  │    │  schedule   │
//! └─────────────┘    └─────────────┘    └──────────────┘    └─────────────┘
//! ```

use jiff::civil::Date;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    dates::parse_iso_date,
    error::{KhetiError, Result},
    i18n::Locale,
    models::{
        CropCategory, IrrigationMethod, NewCropEntry, NewTransaction, Season, TxKind,
    },
};

/// Input of the plan generator.
///
/// Field names on the wire are `category`, `crop`, `irrigation`,
/// `areaAcre`, `sowingISO` and `locale`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanRequest {
    /// Crop category (Cereal, Pulses, Oilseed, Fruit, Vegetable)
    pub category: CropCategory,
    /// Crop name; catalog names pick up crop-specific durations
    pub crop: String,
    /// Irrigation method (Rainfed, Drip, Sprinkler, Flood)
    pub irrigation: IrrigationMethod,
    /// Sown area in acres, must be positive
    #[serde(rename = "areaAcre")]
    pub area_acre: f64,
    /// Sowing date as YYYY-MM-DD
    #[serde(rename = "sowingISO")]
    pub sowing_iso: String,
    /// Output language (en, mr, hi); English when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
}

impl PlanRequest {
    /// Check the request and return the parsed sowing date.
    ///
    /// # Errors
    ///
    /// * `KhetiError::InvalidInput` - empty crop name
    /// * `KhetiError::InvalidInput` - area not positive and finite
    /// * `KhetiError::InvalidInput` - sowing date does not parse
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kheti_core::{
    ///     models::{CropCategory, IrrigationMethod},
    ///     params::PlanRequest,
    /// };
    ///
    /// let mut request = PlanRequest {
    ///     category: CropCategory::Cereal,
    ///     crop: "Rice".to_string(),
    ///     irrigation: IrrigationMethod::Rainfed,
    ///     area_acre: 2.0,
    ///     sowing_iso: "2025-06-01".to_string(),
    ///     locale: None,
    /// };
    /// assert!(request.validate().is_ok());
    ///
    /// request.area_acre = 0.0;
    /// assert!(request.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<Date> {
        validate_crop_name(&self.crop)?;
        validate_area(self.area_acre)?;
        parse_iso_date(&self.sowing_iso, "sowingISO")
    }

    /// Requested locale, English when unset.
    pub fn locale(&self) -> Locale {
        self.locale.unwrap_or_default()
    }
}

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the record to operate on
    pub id: u64,
}

/// Parameters for recording a crop in the crop log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddCropEntry {
    pub category: CropCategory,
    /// Crop name, preferably one of the catalog names
    pub crop: String,
    /// Cropping season; Kharif when omitted
    #[serde(default)]
    pub season: Season,
    pub irrigation: IrrigationMethod,
    /// Sown area in acres, must be positive
    pub area_acre: f64,
    /// Sowing date as YYYY-MM-DD; required later to generate a plan
    #[serde(default)]
    pub sowing_date: Option<String>,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl TryFrom<AddCropEntry> for NewCropEntry {
    type Error = KhetiError;

    fn try_from(params: AddCropEntry) -> Result<Self> {
        let crop = validate_crop_name(&params.crop)?;
        let area_acre = validate_area(params.area_acre)?;
        let sowing_date = params
            .sowing_date
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| parse_iso_date(s, "sowing_date"))
            .transpose()?;

        Ok(NewCropEntry {
            category: params.category,
            crop,
            season: params.season,
            irrigation: params.irrigation,
            area_acre,
            sowing_date,
            notes: non_blank(params.notes),
        })
    }
}

/// Parameters for rendering the plan of a stored crop entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct EntryPlan {
    /// ID of the crop entry
    pub id: u64,
    /// Output language (en, mr, hi); English when omitted
    #[serde(default)]
    pub locale: Option<Locale>,
}

/// Parameters for recording an income or expense.
///
/// Give either `amount`, or `rate` and `quantity` whose product becomes the
/// amount (e.g. rupees per quintal times quintals sold).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RecordTransaction {
    /// income or expense
    #[serde(rename = "type")]
    pub kind: TxKind,
    /// Expense: Pesticides, Fertiliser, Seeds, Water, Electricity, Other.
    /// Income: Sale, Subsidy, Other.
    pub category: String,
    /// Optional label such as the buyer or product
    #[serde(default)]
    pub name: Option<String>,
    /// Amount in rupees
    #[serde(default)]
    pub amount: Option<f64>,
    /// Price per unit, used with `quantity`
    #[serde(default)]
    pub rate: Option<f64>,
    /// Number of units, used with `rate`
    #[serde(default)]
    pub quantity: Option<f64>,
    /// Date as YYYY-MM-DD
    pub date: String,
}

impl TryFrom<RecordTransaction> for NewTransaction {
    type Error = KhetiError;

    fn try_from(params: RecordTransaction) -> Result<Self> {
        let category = params
            .kind
            .categories()
            .iter()
            .find(|c| c.eq_ignore_ascii_case(params.category.trim()))
            .ok_or_else(|| {
                KhetiError::invalid_input("category").with_reason(format!(
                    "'{}' is not a valid {} category (expected one of: {})",
                    params.category,
                    params.kind.as_str(),
                    params.kind.categories().join(", ")
                ))
            })?;

        let amount = match (params.amount, params.rate, params.quantity) {
            (Some(amount), None, None) => positive("amount", amount)?,
            (None, Some(rate), Some(quantity)) => {
                let rate = positive("rate", rate)?;
                let quantity = positive("quantity", quantity)?;
                positive("amount", rate * quantity)?
            }
            (None, _, _) => {
                return Err(KhetiError::invalid_input("amount")
                    .with_reason("give an amount, or both rate and quantity"));
            }
            (Some(_), _, _) => {
                return Err(KhetiError::invalid_input("amount")
                    .with_reason("give either an amount or rate and quantity, not both"));
            }
        };

        Ok(NewTransaction {
            kind: params.kind,
            category: (*category).to_string(),
            name: non_blank(params.name),
            amount,
            date: parse_iso_date(&params.date, "date")?,
        })
    }
}

/// Parameters for listing ledger transactions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListTransactions {
    /// Only list this kind (income or expense)
    #[serde(default, rename = "type")]
    pub kind: Option<TxKind>,
}

/// Parameters for listing the crop catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListCatalog {
    /// Only list crops of this category
    #[serde(default)]
    pub category: Option<CropCategory>,
    /// Language for crop labels (en, mr, hi)
    #[serde(default)]
    pub locale: Option<Locale>,
}

fn validate_crop_name(crop: &str) -> Result<String> {
    let crop = crop.trim();
    if crop.is_empty() {
        return Err(KhetiError::invalid_input("crop").with_reason("crop name must not be empty"));
    }
    Ok(crop.to_string())
}

fn validate_area(area_acre: f64) -> Result<f64> {
    positive("area_acre", area_acre)
}

fn positive(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(KhetiError::invalid_input(field)
            .with_reason(format!("must be a positive number, got {value}")))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
