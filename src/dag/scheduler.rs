use std::cmp::Ordering;

use tracing::{debug, info, warn};

use crate::dag::error::ScheduleError;
use crate::dag::graph::DependencyGraph;
use crate::dag::ready::ReadySet;
use crate::dag::task_info::{ScheduledTask, TaskSpec};
use crate::types::{DuplicateTitlePolicy, UnknownDependencyPolicy};

/// Policies for the two input irregularities the algorithm can tolerate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduleOptions {
    pub unknown_dependencies: UnknownDependencyPolicy,
    pub duplicate_titles: DuplicateTitlePolicy,
}

/// Wave-based topological scheduler.
///
/// Every call builds its own [`DependencyGraph`] and [`ReadySet`]; nothing
/// is shared between calls, so one `Scheduler` can serve many threads.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    options: ScheduleOptions,
}

impl Scheduler {
    pub fn new(options: ScheduleOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ScheduleOptions {
        &self.options
    }

    /// Compute the execution order for `tasks`.
    ///
    /// Tasks are released in waves: all tasks that are ready at the same
    /// step are sorted by due date (undated last, stable otherwise) and
    /// numbered before any task they unblock is considered.
    pub fn schedule(&self, tasks: &[TaskSpec]) -> Result<Schedule, ScheduleError> {
        let graph = DependencyGraph::build(tasks, &self.options)?;
        let mut ready = ReadySet::new(&graph);
        let mut scheduled: Vec<ScheduledTask> = Vec::with_capacity(graph.len());
        let mut wave_index = 0;

        loop {
            let mut wave = ready.take_wave();
            if wave.is_empty() {
                break;
            }

            // `sort_by` is stable: equal keys keep release order.
            wave.sort_by(|&a, &b| by_due_date(graph.task(a), graph.task(b)));
            debug!(wave = wave_index, size = wave.len(), "scheduling wave");

            for &node in &wave {
                let order = scheduled.len() + 1;
                scheduled.push(ScheduledTask::from_spec(graph.task(node), order, wave_index));
            }
            for &node in &wave {
                ready.release(&graph, node);
            }

            wave_index += 1;
        }

        if scheduled.len() != graph.len() {
            let unscheduled = graph.len() - scheduled.len();
            warn!(
                unscheduled,
                total = graph.len(),
                "scheduling stalled; dependency cycle detected"
            );
            return Err(ScheduleError::CycleDetected {
                unscheduled,
                total: graph.len(),
            });
        }

        info!(
            tasks = scheduled.len(),
            waves = wave_index,
            "schedule computed"
        );
        Ok(Schedule { tasks: scheduled })
    }
}

/// Schedule `tasks` with the default policies.
pub fn schedule(tasks: &[TaskSpec]) -> Result<Schedule, ScheduleError> {
    Scheduler::default().schedule(tasks)
}

/// Undated tasks sort after every dated one.
fn by_due_date(a: &TaskSpec, b: &TaskSpec) -> Ordering {
    match (a.due_date, b.due_date) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Successful scheduling result, ordered by `order`.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    tasks: Vec<ScheduledTask>,
}

impl Schedule {
    pub fn tasks(&self) -> &[ScheduledTask] {
        &self.tasks
    }

    pub fn into_tasks(self) -> Vec<ScheduledTask> {
        self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn order_of(&self, title: &str) -> Option<usize> {
        self.tasks.iter().find(|t| t.title == title).map(|t| t.order)
    }

    /// Titles in execution order.
    pub fn titles(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.title.as_str()).collect()
    }

    /// Tasks grouped by the wave they were released in.
    pub fn waves(&self) -> Vec<&[ScheduledTask]> {
        self.tasks.chunk_by(|a, b| a.wave == b.wave).collect()
    }
}
