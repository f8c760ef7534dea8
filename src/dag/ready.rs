// src/dag/ready.rs

//! Ready-set tracking with explicit wave boundaries.

use std::mem;

use crate::dag::graph::DependencyGraph;

/// Tracks which tasks have all in-request dependencies satisfied.
///
/// Tasks released while a wave is being processed land in `next` and are
/// only handed out by the following [`ReadySet::take_wave`] call, so a wave
/// never absorbs tasks that it unblocked itself.
#[derive(Debug)]
pub struct ReadySet {
    /// Unsatisfied dependency count per node.
    remaining: Vec<usize>,
    next: Vec<usize>,
}

impl ReadySet {
    /// Seed the tracker with the roots of `graph` (input order).
    pub fn new(graph: &DependencyGraph<'_>) -> Self {
        Self {
            remaining: (0..graph.len()).map(|n| graph.in_degree(n)).collect(),
            next: graph.roots().collect(),
        }
    }

    /// Hand out every task that is ready right now, in release order.
    pub fn take_wave(&mut self) -> Vec<usize> {
        mem::take(&mut self.next)
    }

    /// Record that `node` has been scheduled and release its dependents
    /// whose last dependency this was.
    pub fn release(&mut self, graph: &DependencyGraph<'_>, node: usize) {
        for &dependent in graph.dependents_of(node) {
            let remaining = &mut self.remaining[dependent];
            *remaining -= 1;
            if *remaining == 0 {
                self.next.push(dependent);
            }
        }
    }

    pub fn has_ready(&self) -> bool {
        !self.next.is_empty()
    }
}
