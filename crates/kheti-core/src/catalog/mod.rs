//! Static agronomic templates and the crop catalog.
//!
//! Every category has one base template: a duration, an ordered list of
//! growth stages and a list of base tasks, all as day offsets from sowing.
//! Some crops override the base duration. The tables are process-wide
//! constants; [`verify_catalog`] checks them against each other once at
//! startup.

mod crops;
mod templates;


use std::collections::HashSet;

use log::debug;
use serde::Serialize;

pub use crops::{CropInfo, crops, crops_in, find_crop};
use crate::{
    error::{KhetiError, Result},
    models::{CropCategory, PlanStage, PlanTask},
};

/// Base template of one crop category.
#[derive(Debug, Clone, Copy)]
pub struct CategoryTemplate {
    pub category: CropCategory,
    pub duration_days: i32,
    pub stages: &'static [PlanStage],
    pub base_tasks: &'static [PlanTask],
}

/// Partial template for a specific crop.
///
/// Fields that are `Some` replace the category's value wholesale; lists are
/// never merged.
#[derive(Debug, Clone, Copy)]
pub struct CropOverride {
    pub crop: &'static str,
    pub duration_days: Option<i32>,
    pub stages: Option<&'static [PlanStage]>,
    pub base_tasks: Option<&'static [PlanTask]>,
}

impl CropOverride {
    const fn duration(crop: &'static str, days: i32) -> Self {
        Self {
            crop,
            duration_days: Some(days),
            stages: None,
            base_tasks: None,
        }
    }

    /// Merge this override over `base` for the crop named `key`.
    fn apply(&self, base: &CategoryTemplate, key: &str) -> CropPlanTemplate {
        CropPlanTemplate {
            key: key.to_string(),
            duration_days: self.duration_days.unwrap_or(base.duration_days),
            stages: self.stages.unwrap_or(base.stages),
            base_tasks: self.base_tasks.unwrap_or(base.base_tasks),
        }
    }
}

/// The effective template for a crop: category template merged with the
/// crop's override, if any.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CropPlanTemplate {
    /// Crop name the template was resolved for
    pub key: String,
    pub duration_days: i32,
    pub stages: &'static [PlanStage],
    pub base_tasks: &'static [PlanTask],
}

/// Resolve the template for `crop` within `category`.
///
/// Crops without an override, including names outside the catalog, get the
/// category defaults.
///
/// # Errors
///
/// Returns `KhetiError::Configuration` if the category has no template.
pub fn template_for(category: CropCategory, crop: &str) -> Result<CropPlanTemplate> {
    let base = templates::category_template(category).ok_or_else(|| {
        KhetiError::configuration(format!("no template for category {}", category.as_str()))
    })?;

    let template = match templates::crop_override(crop) {
        Some(over) => over.apply(base, crop),
        None => CropPlanTemplate {
            key: crop.to_string(),
            duration_days: base.duration_days,
            stages: base.stages,
            base_tasks: base.base_tasks,
        },
    };

    Ok(template)
}

/// Check the static tables against each other.
///
/// Fails if a crop override names a crop missing from the catalog, a catalog
/// name is listed twice, a category has no template, or a base template's
/// stages are out of order or do not end on its duration.
pub fn verify_catalog() -> Result<()> {
    let mut seen = HashSet::new();
    for crop in crops() {
        if !seen.insert(crop.name) {
            return Err(KhetiError::configuration(format!(
                "crop '{}' is listed twice in the catalog",
                crop.name
            )));
        }
    }

    for over in templates::CROP_OVERRIDES {
        if find_crop(over.crop).is_none() {
            return Err(KhetiError::configuration(format!(
                "override for '{}' does not match any catalog crop",
                over.crop
            )));
        }
    }

    for category in CropCategory::ALL {
        let template = templates::category_template(category).ok_or_else(|| {
            KhetiError::configuration(format!("no template for category {}", category.as_str()))
        })?;
        check_stages(category, template.stages, template.duration_days)?;
    }

    debug!(
        "Catalog verified: {} crops, {} overrides, {} templates",
        crops().len(),
        templates::CROP_OVERRIDES.len(),
        templates::CATEGORY_TEMPLATES.len()
    );
    Ok(())
}

fn check_stages(category: CropCategory, stages: &[PlanStage], duration_days: i32) -> Result<()> {
    let bad = |reason: String| {
        KhetiError::configuration(format!("{} template: {reason}", category.as_str()))
    };

    for stage in stages {
        if stage.start_day > stage.end_day {
            return Err(bad(format!("stage '{}' ends before it starts", stage.name)));
        }
    }
    for pair in stages.windows(2) {
        if pair[1].start_day < pair[0].start_day {
            return Err(bad(format!("stage '{}' is out of order", pair[1].name)));
        }
    }
    match stages.last() {
        Some(last) if last.end_day == duration_days => Ok(()),
        Some(last) => Err(bad(format!(
            "last stage ends on day {} but the duration is {duration_days}",
            last.end_day
        ))),
        None => Err(bad("no stages".to_string())),
    }
}
