//! Plan template and plan result types.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::TaskKind;

/// A named growth phase, as day offsets relative to sowing.
///
/// Offsets may be negative for pre-sowing land preparation.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PlanStage {
    pub name: &'static str,
    pub start_day: i32,
    pub end_day: i32,
}

impl PlanStage {
    pub const fn new(name: &'static str, start_day: i32, end_day: i32) -> Self {
        Self {
            name,
            start_day,
            end_day,
        }
    }
}

/// A single recommended action, as a day offset relative to sowing.
///
/// Titles and descriptions are canonical English strings; they are the keys
/// of the translation table.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PlanTask {
    pub day: i32,
    pub title: &'static str,
    #[serde(rename = "type")]
    pub kind: TaskKind,
    pub description: &'static str,
}

impl PlanTask {
    pub const fn new(
        day: i32,
        title: &'static str,
        kind: TaskKind,
        description: &'static str,
    ) -> Self {
        Self {
            day,
            title,
            kind,
            description,
        }
    }
}

/// A stage projected onto calendar dates with a localized name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolvedStage {
    pub name: String,
    pub start: Date,
    pub end: Date,
}

/// A task projected onto a calendar date with localized text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolvedTask {
    pub date: Date,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: TaskKind,
    pub description: String,
}

/// A generated crop calendar.
///
/// Produced fresh from a [`crate::params::PlanRequest`] on every call and
/// never persisted by the engine. Serializes to the wire form
/// `{start, end, stages, tasks}` with `YYYY-MM-DD` dates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanResult {
    /// Sowing date
    pub start: Date,
    /// Sowing date plus the template duration
    pub end: Date,
    /// Stages ordered by start offset
    pub stages: Vec<ResolvedStage>,
    /// Tasks ordered by date ascending
    pub tasks: Vec<ResolvedTask>,
}

impl PlanResult {
    /// Number of days between sowing and the nominal harvest end.
    pub fn duration_days(&self) -> i32 {
        (self.end - self.start).get_days()
    }

    /// Tasks of a single kind, in plan order.
    pub fn tasks_of(&self, kind: TaskKind) -> impl Iterator<Item = &ResolvedTask> {
        self.tasks.iter().filter(move |task| task.kind == kind)
    }

    /// Serialize to the pretty-printed JSON wire form.
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
