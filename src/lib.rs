// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod report;
pub mod types;

use std::io::Write;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::dag::{find_cycles, ScheduleError, Scheduler};
use crate::errors::TaskwaveError;
use crate::types::UnknownDependencyPolicy;

pub use crate::dag::{schedule, Schedule, ScheduleOptions, ScheduledTask, TaskSpec};

/// High-level entry point used by `main.rs`; prints to stdout.
pub fn run(args: CliArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&args, &mut out)
}

/// Load the request named by `args`, schedule it and write the result.
///
/// This wires together:
/// - request loading + boundary validation
/// - policy overrides from the CLI
/// - the scheduler
/// - cycle diagnostics (with `--explain-cycles`)
/// - output rendering
pub fn execute(args: &CliArgs, out: &mut impl Write) -> Result<()> {
    let request = load_and_validate(&args.input)?;

    if args.dry_run {
        report::write_dry_run(out, &request)?;
        debug!("dry-run complete (no scheduling)");
        return Ok(());
    }

    let mut options = request.config.schedule_options();
    if args.strict {
        options.unknown_dependencies = UnknownDependencyPolicy::Reject;
    }

    info!(
        input = %args.input,
        tasks = request.tasks.len(),
        ?options,
        "scheduling request"
    );

    let scheduler = Scheduler::new(options);
    let schedule = match scheduler.schedule(&request.tasks) {
        Ok(schedule) => schedule,
        Err(err) => {
            if args.explain_cycles && matches!(err, ScheduleError::CycleDetected { .. }) {
                explain_cycles(&request.tasks, &options);
            }
            return Err(TaskwaveError::from(err).into());
        }
    };

    report::write_schedule(out, &schedule, args.format)?;
    Ok(())
}

fn explain_cycles(tasks: &[TaskSpec], options: &ScheduleOptions) {
    match find_cycles(tasks, options) {
        Ok(cycles) => {
            for (i, cycle) in cycles.iter().enumerate() {
                warn!(cycle = i + 1, tasks = ?cycle, "tasks form a dependency cycle");
            }
        }
        Err(err) => warn!(error = %err, "could not localise dependency cycles"),
    }
}
