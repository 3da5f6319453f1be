//! Crop plan generation.
//!
//! [`generate_plan`] turns a [`PlanRequest`] into a dated, localized
//! [`PlanResult`]: the category template (with crop override) supplies
//! stages and base tasks, the irrigation method adds watering reminders, and
//! every day offset is projected onto the calendar from the sowing date.
//! Generation is pure; the same request always yields the same plan.

pub mod calendar;
pub mod irrigation;

#[cfg(test)]
mod tests;

use jiff::civil::Date;
use log::debug;

pub use calendar::{PlanCalendar, WeekBucket};
pub use irrigation::build_irrigation_tasks;
use crate::{
    catalog::template_for,
    dates::add_days,
    error::Result,
    i18n::{Locale, translate},
    models::{PlanResult, PlanTask, ResolvedStage, ResolvedTask, TaskKind},
    params::PlanRequest,
};

/// Generate the crop calendar for a request.
///
/// # Errors
///
/// * `KhetiError::InvalidInput` - empty crop, non-positive area or a sowing
///   date that does not parse
/// * `KhetiError::Configuration` - the category has no template
///
/// # Examples
///
/// ```rust
/// use kheti_core::{
///     models::{CropCategory, IrrigationMethod},
///     params::PlanRequest,
///     schedule::generate_plan,
/// };
///
/// let plan = generate_plan(&PlanRequest {
///     category: CropCategory::Cereal,
///     crop: "Rice".to_string(),
///     irrigation: IrrigationMethod::Rainfed,
///     area_acre: 2.0,
///     sowing_iso: "2025-06-01".to_string(),
///     locale: None,
/// })?;
///
/// assert_eq!(plan.end.to_string(), "2025-09-29");
/// assert_eq!(plan.tasks[0].title, "Field prep");
/// # Ok::<(), kheti_core::KhetiError>(())
/// ```
pub fn generate_plan(request: &PlanRequest) -> Result<PlanResult> {
    let sowing = request.validate()?;
    let locale = request.locale();
    let template = template_for(request.category, &request.crop)?;

    let end = add_days(sowing, template.duration_days.into())?;
    let irrigation = build_irrigation_tasks(request.irrigation, template.duration_days);

    debug!(
        "Generating plan for {} ({}): {} days, {} base tasks, {} irrigation tasks",
        template.key,
        request.category.as_str(),
        template.duration_days,
        template.base_tasks.len(),
        irrigation.len()
    );

    // Base tasks first so that equal offsets keep template order.
    let mut ordered: Vec<&PlanTask> = template.base_tasks.iter().chain(&irrigation).collect();
    ordered.sort_by_key(|task| task.day);

    let tasks = ordered
        .into_iter()
        .map(|task| resolve_task(task, sowing, locale, request.area_acre))
        .collect::<Result<Vec<_>>>()?;

    let stages = template
        .stages
        .iter()
        .map(|stage| {
            Ok(ResolvedStage {
                name: translate(stage.name, locale).to_string(),
                start: add_days(sowing, stage.start_day.into())?,
                end: add_days(sowing, stage.end_day.into())?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PlanResult {
        start: sowing,
        end,
        stages,
        tasks,
    })
}

fn resolve_task(
    task: &PlanTask,
    sowing: Date,
    locale: Locale,
    area_acre: f64,
) -> Result<ResolvedTask> {
    let description = translate(task.description, locale);
    let description = match task.kind {
        TaskKind::Fertilizer => format!("{description}. Quantity based on {area_acre} acre(s)."),
        _ => description.to_string(),
    };

    Ok(ResolvedTask {
        date: add_days(sowing, task.day.into())?,
        title: translate(task.title, locale).to_string(),
        kind: task.kind,
        description,
    })
}
