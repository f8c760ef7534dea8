#![allow(dead_code)]

use chrono::NaiveDate;
use taskwave::config::{ConfigSection, RawRequestFile, RequestFile};
use taskwave::dag::TaskSpec;
use taskwave::types::{DuplicateTitlePolicy, UnknownDependencyPolicy};

/// Builder for `RequestFile` to simplify test setup.
pub struct RequestBuilder {
    request: RawRequestFile,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            request: RawRequestFile {
                config: ConfigSection::default(),
                tasks: Vec::new(),
            },
        }
    }

    pub fn with_task(mut self, task: TaskSpec) -> Self {
        self.request.tasks.push(task);
        self
    }

    pub fn unknown_dependencies(mut self, policy: UnknownDependencyPolicy) -> Self {
        self.request.config.unknown_dependencies = policy;
        self
    }

    pub fn duplicate_titles(mut self, policy: DuplicateTitlePolicy) -> Self {
        self.request.config.duplicate_titles = policy;
        self
    }

    pub fn build(self) -> RequestFile {
        RequestFile::try_from(self.request).expect("Failed to build valid request from builder")
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `TaskSpec`.
pub struct TaskSpecBuilder {
    task: TaskSpec,
}

impl TaskSpecBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            task: TaskSpec::new(title, 1.0),
        }
    }

    pub fn hours(mut self, hours: f64) -> Self {
        self.task.estimated_hours = hours;
        self
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.task.dependencies.push(dep.to_string());
        self
    }

    /// Due date as `YYYY-MM-DD`.
    pub fn due(mut self, date: &str) -> Self {
        let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .unwrap_or_else(|e| panic!("bad test date {date:?}: {e}"));
        self.task.due_date = Some(parsed);
        self
    }

    pub fn build(self) -> TaskSpec {
        self.task
    }
}

/// Shorthand for `TaskSpecBuilder::new(title)`.
pub fn task(title: &str) -> TaskSpecBuilder {
    TaskSpecBuilder::new(title)
}
