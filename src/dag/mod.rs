// src/dag/mod.rs

//! Dependency graph and wave scheduling.
//!
//! - [`graph`] turns a flat task list into adjacency lists and in-degrees.
//! - [`ready`] tracks which tasks are ready, one wave at a time.
//! - [`scheduler`] runs the wave loop and detects cycles.
//! - [`cycles`] localises cycles for diagnostics.
//! - [`task_info`] holds the input and output task types.

pub mod cycles;
pub mod error;
pub mod graph;
pub mod ready;
pub mod scheduler;
pub mod task_info;

pub use cycles::find_cycles;
pub use error::ScheduleError;
pub use graph::DependencyGraph;
pub use ready::ReadySet;
pub use scheduler::{schedule, Schedule, ScheduleOptions, Scheduler};
pub use task_info::{ScheduledTask, TaskSpec};
