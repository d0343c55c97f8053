//! CLI argument definitions for the assignment planner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "class-planner",
    version,
    about = "Class Planner - inspect subject/teacher/classroom assignment plans",
    long_about = "Inspect assignment plan files exported by the planner.\n\n\
                  Re-validates every entity, reports workload and coverage\n\
                  statistics, and prints per-teacher schedules."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Re-validate every entity in a plan file and report findings.
    Check(CheckArgs),

    /// Print workload and coverage statistics for a plan file.
    Stats(StatsArgs),

    /// Print a whole-plan or per-teacher summary.
    Summary(SummaryArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to a plan JSON file.
    #[arg(value_name = "PLAN_FILE")]
    pub plan_file: PathBuf,
}

#[derive(Parser)]
pub struct StatsArgs {
    /// Path to a plan JSON file.
    #[arg(value_name = "PLAN_FILE")]
    pub plan_file: PathBuf,

    /// Emit statistics as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct SummaryArgs {
    /// Path to a plan JSON file.
    #[arg(value_name = "PLAN_FILE")]
    pub plan_file: PathBuf,

    /// Summarize a single teacher's assignments instead of the whole plan.
    #[arg(long = "teacher", value_name = "TEACHER_ID")]
    pub teacher: Option<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
