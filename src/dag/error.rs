// src/dag/error.rs

//! Failure modes of a single scheduling call.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The dependency graph contains at least one cycle, so no order exists.
    ///
    /// Only counts are reported; use [`crate::dag::find_cycles`] to localise
    /// the offending tasks for diagnostics.
    #[error(
        "circular dependency detected in task dependencies ({unscheduled} of {total} tasks could not be ordered)"
    )]
    CycleDetected { unscheduled: usize, total: usize },

    /// A dependency names no task in the request (strict policy only).
    #[error("task '{task}' depends on unknown task '{dependency}'")]
    DependencyNotFound { task: String, dependency: String },

    /// Two tasks in one request share a title (rejecting policy only).
    #[error("duplicate task title '{0}'")]
    DuplicateTitle(String),
}
