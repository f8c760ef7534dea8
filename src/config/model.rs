// src/config/model.rs

use serde::Deserialize;

use crate::dag::{ScheduleOptions, TaskSpec};
use crate::types::{DuplicateTitlePolicy, UnknownDependencyPolicy};

/// A scheduling request as read from disk, before validation.
///
/// TOML form:
///
/// ```toml
/// [config]
/// unknown_dependencies = "ignore"
/// duplicate_titles = "reject"
///
/// [[task]]
/// title = "design"
/// estimated_hours = 4.0
/// due_date = "2024-01-15"
///
/// [[task]]
/// title = "build"
/// estimated_hours = 10
/// dependencies = ["design"]
/// ```
///
/// JSON form is `{ "tasks": [{ "title": ..., "estimatedHours": ... }] }`
/// with an optional `"config"` object. Task order is significant: it decides
/// tie-breaks between tasks with equal due dates.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRequestFile {
    /// Scheduling policies from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// Tasks from `[[task]]` (TOML) or `"tasks"` (JSON), in input order.
    #[serde(default, alias = "task")]
    pub tasks: Vec<TaskSpec>,
}

/// Validated request. Construct via `RequestFile::try_from(raw)`.
#[derive(Debug, Clone)]
pub struct RequestFile {
    pub config: ConfigSection,
    pub tasks: Vec<TaskSpec>,
}

impl RequestFile {
    pub(crate) fn new_unchecked(config: ConfigSection, tasks: Vec<TaskSpec>) -> Self {
        Self { config, tasks }
    }
}

/// `[config]` section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigSection {
    /// `"ignore"` (default) or `"reject"`.
    #[serde(default, alias = "unknownDependencies")]
    pub unknown_dependencies: UnknownDependencyPolicy,

    /// `"reject"` (default) or `"last_wins"`.
    #[serde(default, alias = "duplicateTitles")]
    pub duplicate_titles: DuplicateTitlePolicy,
}

impl ConfigSection {
    pub fn schedule_options(&self) -> ScheduleOptions {
        ScheduleOptions {
            unknown_dependencies: self.unknown_dependencies,
            duplicate_titles: self.duplicate_titles,
        }
    }
}
