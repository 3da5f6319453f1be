//! Markdown views of generated plans.

use std::fmt;

use super::datetime::DisplayDate;
use crate::{
    i18n::Locale,
    models::{CropPlan, PlanResult, ResolvedTask},
    schedule::PlanCalendar,
};

/// A plan rendered as a stage table followed by a dated task list.
///
/// Dates are written in the plan's locale; the stage and task text is
/// already localized by the generator.
///
/// ```rust
/// use kheti_core::{
///     display::PlanView,
///     generate_plan,
///     i18n::Locale,
///     models::{CropCategory, IrrigationMethod},
///     params::PlanRequest,
/// };
///
/// let plan = generate_plan(&PlanRequest {
///     category: CropCategory::Cereal,
///     crop: "Rice".to_string(),
///     irrigation: IrrigationMethod::Rainfed,
///     area_acre: 2.0,
///     sowing_iso: "2025-06-01".to_string(),
///     locale: None,
/// })
/// .unwrap();
///
/// let output = PlanView::new(&plan, Locale::En).titled("Rice").to_string();
/// assert!(output.starts_with("# Rice"));
/// assert!(output.contains("- Harvest: 29 Sep 2025"));
/// ```
pub struct PlanView<'a> {
    plan: &'a PlanResult,
    locale: Locale,
    title: Option<String>,
}

impl<'a> PlanView<'a> {
    pub fn new(plan: &'a PlanResult, locale: Locale) -> Self {
        Self {
            plan,
            locale,
            title: None,
        }
    }

    /// Heading shown above the plan.
    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// View of a crop log entry's plan, titled after the entry.
    pub fn for_entry(crop_plan: &'a CropPlan, locale: Locale) -> Self {
        let entry = &crop_plan.entry;
        Self::new(&crop_plan.plan, locale).titled(format!(
            "{}. {} ({}, {} acre(s))",
            entry.id, entry.crop, entry.irrigation, entry.area_acre
        ))
    }

    fn date(&self, date: jiff::civil::Date) -> DisplayDate {
        DisplayDate(date, self.locale)
    }
}

impl fmt::Display for PlanView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.plan;

        writeln!(f, "# {}", self.title.as_deref().unwrap_or("Crop plan"))?;
        writeln!(f)?;
        writeln!(f, "- Sowing: {}", self.date(plan.start))?;
        writeln!(f, "- Harvest: {}", self.date(plan.end))?;
        writeln!(f, "- Duration: {} days", plan.duration_days())?;

        writeln!(f, "\n## Stages")?;
        writeln!(f)?;
        writeln!(f, "| Stage | From | To |")?;
        writeln!(f, "|:-|:-|:-|")?;
        for stage in &plan.stages {
            writeln!(
                f,
                "| {} | {} | {} |",
                stage.name,
                self.date(stage.start),
                self.date(stage.end)
            )?;
        }

        writeln!(f, "\n## Tasks")?;
        writeln!(f)?;
        if plan.tasks.is_empty() {
            writeln!(f, "No tasks in this plan.")?;
        }
        for task in &plan.tasks {
            write_task(f, task, self.locale)?;
        }

        Ok(())
    }
}

fn write_task(f: &mut fmt::Formatter<'_>, task: &ResolvedTask, locale: Locale) -> fmt::Result {
    writeln!(
        f,
        "### {} · {} ({})",
        DisplayDate(task.date, locale),
        task.title,
        task.kind.with_icon()
    )?;
    writeln!(f)?;
    writeln!(f, "{}", task.description)?;
    writeln!(f)
}

/// A plan grouped by week; weeks without tasks are skipped.
pub struct WeeklyPlanView<'a> {
    calendar: PlanCalendar,
    plan: &'a PlanResult,
    locale: Locale,
}

impl<'a> WeeklyPlanView<'a> {
    pub fn new(plan: &'a PlanResult, locale: Locale) -> Self {
        Self {
            calendar: plan.calendar(),
            plan,
            locale,
        }
    }

    pub fn calendar(&self) -> &PlanCalendar {
        &self.calendar
    }
}

impl fmt::Display for WeeklyPlanView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let locale = self.locale;

        writeln!(
            f,
            "# Weekly plan: {} to {}",
            DisplayDate(self.plan.start, locale),
            DisplayDate(self.plan.end, locale)
        )?;

        if !self.calendar.pre_sowing.is_empty() {
            writeln!(f, "\n## Before sowing")?;
            writeln!(f)?;
            write_task_lines(f, &self.calendar.pre_sowing, locale)?;
        }

        for week in self.calendar.busy_weeks() {
            writeln!(
                f,
                "\n## Week {} ({} to {})",
                week.week,
                DisplayDate(week.start, locale),
                DisplayDate(week.end, locale)
            )?;
            writeln!(f)?;
            write_task_lines(f, &week.tasks, locale)?;
        }

        if !self.calendar.post_harvest.is_empty() {
            writeln!(f, "\n## After harvest")?;
            writeln!(f)?;
            write_task_lines(f, &self.calendar.post_harvest, locale)?;
        }

        Ok(())
    }
}

fn write_task_lines(f: &mut fmt::Formatter<'_>, tasks: &[ResolvedTask], locale: Locale) -> fmt::Result {
    for task in tasks {
        writeln!(
            f,
            "- {} **{}** ({}): {}",
            DisplayDate(task.date, locale),
            task.title,
            task.kind.as_str(),
            task.description
        )?;
    }
    Ok(())
}
