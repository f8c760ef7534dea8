// src/dag/cycles.rs

//! Cycle localisation for diagnostics.
//!
//! The scheduler only reports that a cycle exists. When a caller wants to
//! tell a human *which* tasks are involved, it can run [`find_cycles`] on the
//! same input with the same options.

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;

use crate::dag::error::ScheduleError;
use crate::dag::graph::DependencyGraph;
use crate::dag::scheduler::ScheduleOptions;
use crate::dag::task_info::TaskSpec;

/// Return the groups of task titles that form dependency cycles.
///
/// The graph is built exactly as the scheduler builds it, so duplicate
/// titles collapse and dangling references are handled per `options`. Each
/// group is a strongly connected component with more than one task, or a
/// single task that depends on itself. Titles inside a group, and the groups
/// themselves, follow input order.
pub fn find_cycles(
    tasks: &[TaskSpec],
    options: &ScheduleOptions,
) -> Result<Vec<Vec<String>>, ScheduleError> {
    let deps = DependencyGraph::build(tasks, options)?;

    // Edge direction: dependency -> dependent, over arena indices.
    let mut graph: DiGraphMap<usize, ()> = DiGraphMap::new();
    for node in 0..deps.len() {
        graph.add_node(node);
    }
    for node in 0..deps.len() {
        for &dependent in deps.dependents_of(node) {
            graph.add_edge(node, dependent, ());
        }
    }

    let mut cycles: Vec<Vec<usize>> = tarjan_scc(&graph)
        .into_iter()
        .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
        .collect();

    for scc in &mut cycles {
        scc.sort_unstable();
    }
    cycles.sort_unstable_by_key(|scc| scc[0]);

    Ok(cycles
        .into_iter()
        .map(|scc| scc.into_iter().map(|n| deps.task(n).title.clone()).collect())
        .collect())
}
