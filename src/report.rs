// src/report.rs

//! Presentation of requests and schedules.

use std::io::Write;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::config::RequestFile;
use crate::dag::{Schedule, ScheduledTask};
use crate::errors::Result;

/// Wire shape of a successful response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse<'a> {
    pub recommended_order: &'a [ScheduledTask],
}

pub fn write_schedule(out: &mut impl Write, schedule: &Schedule, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let response = ScheduleResponse {
                recommended_order: schedule.tasks(),
            };
            serde_json::to_writer_pretty(&mut *out, &response)?;
            writeln!(out)?;
        }
        OutputFormat::Table => write_table(out, schedule)?,
    }
    Ok(())
}

fn write_table(out: &mut impl Write, schedule: &Schedule) -> Result<()> {
    if schedule.is_empty() {
        writeln!(out, "(no tasks)")?;
        return Ok(());
    }

    for (i, wave) in schedule.waves().iter().enumerate() {
        writeln!(out, "wave {} ({} tasks):", i, wave.len())?;
        for task in wave.iter() {
            let due = task
                .due_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string());
            write!(
                out,
                "  {:>3}. {}  [{}h, due {}]",
                task.order, task.title, task.estimated_hours, due
            )?;
            if !task.dependencies.is_empty() {
                write!(out, "  after: {}", task.dependencies.join(", "))?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Dry-run output: the request as understood, without computing an order.
pub fn write_dry_run(out: &mut impl Write, request: &RequestFile) -> Result<()> {
    writeln!(out, "taskwave dry-run")?;
    writeln!(
        out,
        "  config.unknown_dependencies = {:?}",
        request.config.unknown_dependencies
    )?;
    writeln!(
        out,
        "  config.duplicate_titles = {:?}",
        request.config.duplicate_titles
    )?;
    writeln!(out)?;

    writeln!(out, "tasks ({}):", request.tasks.len())?;
    for task in &request.tasks {
        writeln!(out, "  - {}", task.title)?;
        writeln!(out, "      estimated_hours: {}", task.estimated_hours)?;
        if let Some(due) = task.due_date {
            writeln!(out, "      due_date: {due}")?;
        }
        if !task.dependencies.is_empty() {
            writeln!(out, "      dependencies: {:?}", task.dependencies)?;
        }
    }
    Ok(())
}
