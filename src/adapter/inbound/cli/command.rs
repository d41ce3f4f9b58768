//! Command-line interface definitions.
//!
//! Defines the CLI structure for the staffsurvey application using `clap`.
//! Subcommands record submissions, list them, and produce reports.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Employee survey storage and reporting CLI
#[derive(Parser, Debug)]
#[command(name = "staffsurvey")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "staffsurvey.toml")]
    pub config: PathBuf,

    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the staffsurvey CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the database tables
    Init,

    /// Record or list employees
    #[command(subcommand)]
    Employee(EmployeeCommand),

    /// Record or list support requests
    #[command(subcommand)]
    Request(RequestCommand),

    /// Write the employees report as an Excel workbook
    Export(ExportArgs),

    /// Render a chart as Plotly JSON
    Chart(ChartArgs),
}

/// Subcommands for `staffsurvey employee`
#[derive(Subcommand, Debug)]
pub enum EmployeeCommand {
    /// Record one employee
    Add(EmployeeAddArgs),
    /// List every employee
    List,
}

/// Subcommands for `staffsurvey request`
#[derive(Subcommand, Debug)]
pub enum RequestCommand {
    /// Record one support request
    Add(RequestAddArgs),
    /// List every support request
    List,
}

/// Arguments for `employee add`.
#[derive(Parser, Debug)]
pub struct EmployeeAddArgs {
    /// Full name
    #[arg(long)]
    pub name: String,

    /// Age in years
    #[arg(long)]
    pub age: i32,

    /// Department, unit, or center
    #[arg(long)]
    pub department: String,

    /// Job title
    #[arg(long)]
    pub title: String,

    /// Profile update status
    #[arg(long)]
    pub status: String,
}

/// Arguments for `request add`.
#[derive(Parser, Debug)]
pub struct RequestAddArgs {
    /// Request text
    pub content: String,
}

/// Arguments for `export`.
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Destination `.xlsx` file
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Which chart to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    /// Donut of profile update statuses
    Status,
    /// Head count per department
    Department,
    /// Head count per job title
    Title,
    /// Age histogram
    Age,
}

/// Arguments for `chart`.
#[derive(Parser, Debug)]
pub struct ChartArgs {
    /// Chart to render
    #[arg(value_enum)]
    pub kind: ChartKind,

    /// Write the figure to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
