use std::collections::HashMap;

use chrono::NaiveDate;
use proptest::prelude::*;
use taskwave::dag::{schedule, ScheduleError, TaskSpec};

// Acyclic by construction: task i may only depend on tasks 0..i. The list is
// then shuffled so input order is unrelated to dependency order.
fn dag_strategy(max_tasks: usize) -> impl Strategy<Value = Vec<TaskSpec>> {
    (1..=max_tasks).prop_flat_map(|num_tasks| {
        let deps = proptest::collection::vec(
            proptest::collection::vec(any::<usize>(), 0..4),
            num_tasks,
        );
        let dues = proptest::collection::vec(proptest::option::of(0u32..5), num_tasks);
        (deps, dues).prop_flat_map(move |(raw_deps, dues)| {
            let tasks: Vec<TaskSpec> = raw_deps
                .into_iter()
                .zip(dues)
                .enumerate()
                .map(|(i, (potential, due))| {
                    let mut spec = TaskSpec::new(format!("task_{i}"), 1.0 + i as f64);
                    for idx in potential {
                        if i > 0 {
                            spec = spec.with_dependency(format!("task_{}", idx % i));
                        }
                    }
                    if let Some(offset) = due {
                        let day = NaiveDate::from_ymd_opt(2024, 1, 1 + offset).unwrap();
                        spec = spec.with_due_date(day);
                    }
                    spec
                })
                .collect();
            Just(tasks).prop_shuffle()
        })
    })
}

fn orders(tasks: &[TaskSpec]) -> HashMap<String, usize> {
    schedule(tasks)
        .unwrap()
        .tasks()
        .iter()
        .map(|t| (t.title.clone(), t.order))
        .collect()
}

proptest! {
    #[test]
    fn orders_are_a_permutation(tasks in dag_strategy(12)) {
        let result = schedule(&tasks).unwrap();
        let mut seen: Vec<usize> = result.tasks().iter().map(|t| t.order).collect();
        seen.sort_unstable();
        prop_assert_eq!(seen, (1..=tasks.len()).collect::<Vec<_>>());
    }

    #[test]
    fn dependencies_come_first(tasks in dag_strategy(12)) {
        let by_title = orders(&tasks);
        for task in &tasks {
            for dep in &task.dependencies {
                prop_assert!(
                    by_title[dep] < by_title[&task.title],
                    "{} (order {}) must come after {} (order {})",
                    task.title, by_title[&task.title], dep, by_title[dep]
                );
            }
        }
    }

    #[test]
    fn output_is_deterministic(tasks in dag_strategy(12)) {
        let first = schedule(&tasks).unwrap();
        let second = schedule(&tasks).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn each_wave_is_sorted_by_due_date(tasks in dag_strategy(12)) {
        let result = schedule(&tasks).unwrap();
        for wave in result.waves() {
            for pair in wave.windows(2) {
                let ok = match (pair[0].due_date, pair[1].due_date) {
                    (Some(a), Some(b)) => a <= b,
                    (None, Some(_)) => false,
                    _ => true,
                };
                prop_assert!(ok, "{} before {} breaks due-date order", pair[0].title, pair[1].title);
            }
        }
    }

    #[test]
    fn back_edge_always_fails(
        tasks in dag_strategy(12),
        pick in any::<usize>(),
        which in any::<usize>(),
    ) {
        let mut tasks = tasks;
        let pos = pick % tasks.len();
        let target = tasks[pos].title.clone();

        // `target` itself plus everything that transitively depends on it.
        let downstream: Vec<String> = tasks
            .iter()
            .filter(|t| reaches(&tasks, &target, &t.title))
            .map(|t| t.title.clone())
            .collect();
        let source = downstream[which % downstream.len()].clone();

        tasks[pos].dependencies.push(source);
        let result = schedule(&tasks);
        prop_assert!(
            matches!(result, Err(ScheduleError::CycleDetected { .. })),
            "back edge onto {} was scheduled: {:?}",
            target,
            result
        );
    }
}

/// Whether `to` (transitively) depends on `from`.
fn reaches(tasks: &[TaskSpec], from: &str, to: &str) -> bool {
    let mut stack = vec![to.to_string()];
    let mut visited = std::collections::HashSet::new();
    while let Some(current) = stack.pop() {
        if current == from {
            return true;
        }
        if !visited.insert(current.clone()) {
            continue;
        }
        if let Some(task) = tasks.iter().find(|t| t.title == current) {
            stack.extend(task.dependencies.iter().cloned());
        }
    }
    false
}
