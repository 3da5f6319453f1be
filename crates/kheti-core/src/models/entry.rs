//! Crop log entry model.

use jiff::{Timestamp, civil::Date};
use serde::{Deserialize, Serialize};

use super::{CropCategory, IrrigationMethod, PlanResult, Season};
use crate::{
    error::{KhetiError, Result},
    i18n::Locale,
    params::PlanRequest,
};

/// A crop the farmer has recorded in their crop log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropEntry {
    /// Unique identifier for the entry
    pub id: u64,

    pub category: CropCategory,

    /// Crop name, normally one of the catalog names
    pub crop: String,

    pub season: Season,

    pub irrigation: IrrigationMethod,

    /// Sown area in acres (always positive)
    pub area_acre: f64,

    /// Sowing date; a plan can only be generated once this is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sowing_date: Option<Date>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Timestamp when the entry was recorded (UTC)
    pub created_at: Timestamp,
}

impl CropEntry {
    /// Build the plan request for this entry.
    ///
    /// # Errors
    ///
    /// Returns `KhetiError::InvalidInput` if the entry has no sowing date.
    pub fn plan_request(&self, locale: Locale) -> Result<PlanRequest> {
        let sowing = self.sowing_date.ok_or_else(|| {
            KhetiError::invalid_input("sowing_date")
                .with_reason("add a sowing date to generate the calendar")
        })?;

        Ok(PlanRequest {
            category: self.category,
            crop: self.crop.clone(),
            irrigation: self.irrigation,
            area_acre: self.area_acre,
            sowing_iso: sowing.to_string(),
            locale: Some(locale),
        })
    }
}

/// Validated data for a crop entry that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCropEntry {
    pub category: CropCategory,
    pub crop: String,
    pub season: Season,
    pub irrigation: IrrigationMethod,
    pub area_acre: f64,
    pub sowing_date: Option<Date>,
    pub notes: Option<String>,
}

/// A stored crop entry together with its generated calendar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropPlan {
    pub entry: CropEntry,
    pub plan: PlanResult,
}
