//! Irrigation reminders derived from the irrigation method.

use crate::models::{IrrigationMethod, PlanTask, TaskKind};

/// Day offset of the first recurring irrigation.
const FIRST_IRRIGATION_DAY: i32 = 3;

/// Recurring irrigation stops this many days before the nominal end.
const DRY_DOWN_DAYS: i32 = 10;

const RAINFED_REMINDERS: [PlanTask; 2] = [
    PlanTask::new(
        20,
        "Irrigation (if dry)",
        TaskKind::Irrigation,
        "Ensure adequate moisture during vegetative stage",
    ),
    PlanTask::new(
        55,
        "Irrigation (if dry)",
        TaskKind::Irrigation,
        "Provide life-saving irrigation at flowering if rainfall deficit",
    ),
];

/// Irrigation tasks for a crop of `duration_days`.
///
/// Rain-fed fields get two fixed reminders on days 20 and 55 whatever the
/// duration. Other methods get a reminder every interval from day 3,
/// strictly before `duration_days - 10`.
pub fn build_irrigation_tasks(method: IrrigationMethod, duration_days: i32) -> Vec<PlanTask> {
    let Some(every) = method.interval_days() else {
        return RAINFED_REMINDERS.to_vec();
    };

    let description = recurring_description(method);
    (FIRST_IRRIGATION_DAY..duration_days - DRY_DOWN_DAYS)
        .step_by(every as usize)
        .map(|day| PlanTask::new(day, "Irrigation", TaskKind::Irrigation, description))
        .collect()
}

fn recurring_description(method: IrrigationMethod) -> &'static str {
    match method {
        IrrigationMethod::Drip => "Irrigate based on soil moisture (interval ~3 days)",
        IrrigationMethod::Sprinkler => "Irrigate based on soil moisture (interval ~5 days)",
        IrrigationMethod::Flood => "Irrigate based on soil moisture (interval ~10 days)",
        IrrigationMethod::Rainfed => "",
    }
}
