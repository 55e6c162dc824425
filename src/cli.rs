use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "helium",
    version,
    about = "One-page code quality report from maintainability and complexity metrics"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default helium.toml
    Init(InitCommand),
    /// Fill the report template and render it
    Report(ReportCommand),
    /// Print the selected entries without rendering
    Summary(SummaryCommand),
    /// Write the built-in report template
    Template(TemplateCommand),
}

/// Metric inputs shared by `report` and `summary`.
#[derive(Args)]
pub struct MetricsArgs {
    /// Project root holding helium.toml
    pub path: PathBuf,
    /// Maintainability index JSON produced by the analyzer
    #[arg(long = "mi", value_name = "FILE")]
    pub maintainability: PathBuf,
    /// Cyclomatic complexity JSON produced by the analyzer
    #[arg(long = "cc", value_name = "FILE")]
    pub complexity: PathBuf,
    /// Rank complexity across all files instead of the worst maintainability files
    #[arg(long)]
    pub separate_metrics: bool,
}

#[derive(Args)]
pub struct InitCommand {
    pub path: PathBuf,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub dry_run: bool,
    #[arg(long)]
    pub no_overwrite: bool,
}

#[derive(Args)]
pub struct ReportCommand {
    #[command(flatten)]
    pub metrics: MetricsArgs,
    /// Template source: "builtin", a path, or "base64:<data>"
    #[arg(long)]
    pub template: Option<String>,
    /// Rendered report path (defaults to report.output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Keep the filled SVG at this path
    #[arg(long)]
    pub svg_output: Option<PathBuf>,
    /// Stop after writing the filled SVG
    #[arg(long, requires = "svg_output")]
    pub no_render: bool,
}

#[derive(Args)]
pub struct SummaryCommand {
    #[command(flatten)]
    pub metrics: MetricsArgs,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: SummaryFormat,
}

#[derive(Args)]
pub struct TemplateCommand {
    /// Destination file; prints to stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
pub enum SummaryFormat {
    Json,
    Md,
}
