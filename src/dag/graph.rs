// src/dag/graph.rs

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::dag::error::ScheduleError;
use crate::dag::scheduler::ScheduleOptions;
use crate::dag::task_info::TaskSpec;
use crate::types::{DuplicateTitlePolicy, UnknownDependencyPolicy};

/// Request-scoped dependency graph over an index arena.
///
/// Nodes are positions in `tasks` (input order, after duplicate handling).
/// Edges point from a dependency to the tasks waiting on it, and only exist
/// when both ends are part of the request.
#[derive(Debug, Clone)]
pub struct DependencyGraph<'a> {
    tasks: Vec<&'a TaskSpec>,
    index: HashMap<&'a str, usize>,
    /// `dependents[n]`: nodes that depend on `n`, in input order.
    dependents: Vec<Vec<usize>>,
    /// Number of distinct in-request dependencies per node.
    in_degree: Vec<usize>,
}

impl<'a> DependencyGraph<'a> {
    /// Build the graph for one scheduling call.
    ///
    /// Fails only when a policy in `options` asks for it: duplicate titles
    /// under [`DuplicateTitlePolicy::Reject`] and dangling references under
    /// [`UnknownDependencyPolicy::Reject`].
    pub fn build(specs: &'a [TaskSpec], options: &ScheduleOptions) -> Result<Self, ScheduleError> {
        let tasks = collect_unique(specs, options.duplicate_titles)?;

        let index: HashMap<&str, usize> = tasks
            .iter()
            .enumerate()
            .map(|(i, &t)| (t.title.as_str(), i))
            .collect();

        let mut dependents = vec![Vec::new(); tasks.len()];
        let mut in_degree = vec![0usize; tasks.len()];

        for (node, task) in tasks.iter().enumerate() {
            let mut seen = HashSet::new();
            for dep in &task.dependencies {
                match index.get(dep.as_str()) {
                    Some(&source) => {
                        // A repeated reference still counts as one edge.
                        if seen.insert(source) {
                            dependents[source].push(node);
                            in_degree[node] += 1;
                        }
                    }
                    None => match options.unknown_dependencies {
                        UnknownDependencyPolicy::Ignore => {
                            warn!(
                                task = %task.title,
                                dependency = %dep,
                                "dependency not in request; treating as satisfied"
                            );
                        }
                        UnknownDependencyPolicy::Reject => {
                            return Err(ScheduleError::DependencyNotFound {
                                task: task.title.clone(),
                                dependency: dep.clone(),
                            });
                        }
                    },
                }
            }
        }

        debug!(
            tasks = tasks.len(),
            edges = in_degree.iter().sum::<usize>(),
            "dependency graph built"
        );

        Ok(Self {
            tasks,
            index,
            dependents,
            in_degree,
        })
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn task(&self, node: usize) -> &'a TaskSpec {
        self.tasks[node]
    }

    pub fn node_of(&self, title: &str) -> Option<usize> {
        self.index.get(title).copied()
    }

    pub fn in_degree(&self, node: usize) -> usize {
        self.in_degree[node]
    }

    pub fn dependents_of(&self, node: usize) -> &[usize] {
        &self.dependents[node]
    }

    /// Nodes without in-request dependencies, in input order.
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.tasks.len()).filter(|&n| self.in_degree[n] == 0)
    }
}

fn collect_unique(
    specs: &[TaskSpec],
    policy: DuplicateTitlePolicy,
) -> Result<Vec<&TaskSpec>, ScheduleError> {
    match policy {
        DuplicateTitlePolicy::Reject => {
            let mut seen = HashSet::new();
            for spec in specs {
                if !seen.insert(spec.title.as_str()) {
                    return Err(ScheduleError::DuplicateTitle(spec.title.clone()));
                }
            }
            Ok(specs.iter().collect())
        }
        DuplicateTitlePolicy::LastWins => {
            let last: HashMap<&str, usize> = specs
                .iter()
                .enumerate()
                .map(|(i, s)| (s.title.as_str(), i))
                .collect();

            let kept: Vec<&TaskSpec> = specs
                .iter()
                .enumerate()
                .filter(|(i, s)| last.get(s.title.as_str()) == Some(i))
                .map(|(_, s)| s)
                .collect();

            if kept.len() != specs.len() {
                warn!(
                    dropped = specs.len() - kept.len(),
                    "duplicate task titles collapsed; later definitions win"
                );
            }
            Ok(kept)
        }
    }
}
