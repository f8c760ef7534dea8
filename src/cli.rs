// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `taskwave`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskwave",
    version,
    about = "Compute a dependency-respecting execution order for a set of tasks.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the request file (TOML, or JSON when the extension is `.json`).
    #[arg(long, value_name = "PATH", default_value = "Tasks.toml")]
    pub input: String,

    /// Output format for the computed order.
    #[arg(long, value_enum, value_name = "FORMAT", default_value = "json")]
    pub format: OutputFormat,

    /// Reject dependencies that name no task in the request.
    ///
    /// Overrides `[config].unknown_dependencies`.
    #[arg(long)]
    pub strict: bool,

    /// On a dependency cycle, log the tasks that form each cycle.
    #[arg(long)]
    pub explain_cycles: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKWAVE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the request, but don't compute an order.
    #[arg(long)]
    pub dry_run: bool,
}

/// How the computed order is printed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `{ "recommendedOrder": [...] }`
    Json,
    /// One line per task, grouped by wave.
    Table,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
