//! Weekly view of a generated plan.

use jiff::{ToSpan, civil::Date};
use serde::{Deserialize, Serialize};

use crate::models::{PlanResult, ResolvedTask};

/// Seven days of a plan, counted from sowing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeekBucket {
    /// 1-based week number
    pub week: u32,
    pub start: Date,
    /// Inclusive, six days after `start`
    pub end: Date,
    pub tasks: Vec<ResolvedTask>,
}

/// A plan's tasks grouped into weeks.
///
/// Weeks start on the sowing date and step by seven days while the week
/// start is on or before the plan end. Tasks before sowing land in
/// `pre_sowing`, tasks after the last week in `post_harvest`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanCalendar {
    pub pre_sowing: Vec<ResolvedTask>,
    pub weeks: Vec<WeekBucket>,
    pub post_harvest: Vec<ResolvedTask>,
}

impl PlanCalendar {
    /// Weeks that have at least one task.
    pub fn busy_weeks(&self) -> impl Iterator<Item = &WeekBucket> {
        self.weeks.iter().filter(|week| !week.tasks.is_empty())
    }
}

impl PlanResult {
    /// Group the plan's tasks by week.
    pub fn calendar(&self) -> PlanCalendar {
        let mut calendar = PlanCalendar::default();

        let mut week_start = self.start;
        let mut week = 1;
        while week_start <= self.end {
            let Ok(week_end) = week_start.checked_add(6.days()) else {
                break;
            };
            calendar.weeks.push(WeekBucket {
                week,
                start: week_start,
                end: week_end,
                tasks: Vec::new(),
            });
            match week_start.checked_add(7.days()) {
                Ok(next) => week_start = next,
                Err(_) => break,
            }
            week += 1;
        }

        for task in &self.tasks {
            if task.date < self.start {
                calendar.pre_sowing.push(task.clone());
                continue;
            }
            match calendar
                .weeks
                .iter_mut()
                .find(|bucket| bucket.start <= task.date && task.date <= bucket.end)
            {
                Some(bucket) => bucket.tasks.push(task.clone()),
                None => calendar.post_harvest.push(task.clone()),
            }
        }

        calendar
    }
}
