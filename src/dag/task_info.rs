// src/dag/task_info.rs

//! Task specifications (input) and scheduled tasks (output).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One task as supplied by the caller.
///
/// `title` is the join key: dependencies refer to other tasks by title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSpec {
    pub title: String,

    /// Effort metadata. Carried through, never used for ordering.
    #[serde(alias = "estimated_hours")]
    pub estimated_hours: f64,

    /// Tie-break signal only; tasks without a due date sort last in a wave.
    ///
    /// Written as an ISO date string (`"2024-01-31"`), also in TOML. A
    /// datetime string (`"2024-01-31T09:00:00"`, optionally with an offset)
    /// is accepted and truncated to its calendar date.
    #[serde(default, alias = "due_date", deserialize_with = "due_date::deserialize")]
    pub due_date: Option<NaiveDate>,

    /// Titles of the tasks this one waits for.
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl TaskSpec {
    pub fn new(title: impl Into<String>, estimated_hours: f64) -> Self {
        Self {
            title: title.into(),
            estimated_hours,
            due_date: None,
            dependencies: Vec::new(),
        }
    }

    pub fn with_due_date(mut self, due: NaiveDate) -> Self {
        self.due_date = Some(due);
        self
    }

    pub fn with_dependency(mut self, dep: impl Into<String>) -> Self {
        self.dependencies.push(dep.into());
        self
    }
}

/// A task with its position in the computed execution order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledTask {
    pub title: String,
    pub estimated_hours: f64,
    #[serde(default, deserialize_with = "due_date::deserialize")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// 1-based, dense and unique across one schedule.
    pub order: usize,

    /// 0-based index of the wave this task was released in.
    #[serde(skip)]
    pub wave: usize,
}

impl ScheduledTask {
    pub fn from_spec(spec: &TaskSpec, order: usize, wave: usize) -> Self {
        Self {
            title: spec.title.clone(),
            estimated_hours: spec.estimated_hours,
            due_date: spec.due_date,
            dependencies: spec.dependencies.clone(),
            order,
            wave,
        }
    }
}

mod due_date {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        parse(raw.trim())
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid due date {raw:?}")))
    }

    fn parse(s: &str) -> Option<NaiveDate> {
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Some(date);
        }
        if let Ok(dt) = s.parse::<NaiveDateTime>() {
            return Some(dt.date());
        }
        // Keep the date as written rather than converting to UTC.
        DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
    }
}
