//! CLI argument definitions for the heroes tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use hero_cli::report::ReportFormat;
use hero_stats::DEFAULT_SAMPLE_POWER;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "heroes",
    version,
    about = "Superhero dataset statistics and name search",
    long_about = "Load a superhero dataset and report power popularity, averages,\n\
                  breakdowns by gender, race and publisher, and the heroes with the\n\
                  most and fewest powers. Then look a hero up by name."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Print every statistic, then prompt for a hero name to search.
    Report(ReportArgs),

    /// Look up heroes by exact name.
    Search(SearchArgs),
}

/// Where to load the dataset from.
#[derive(Args)]
pub struct DataArgs {
    /// Dataset file: a JSON array of records, or the information CSV when
    /// `--csv-powers` is given (default: $HEROES_DATA or newHeroes.json).
    #[arg(long = "data", value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Powers CSV (`hero_names` plus one True/False column per power).
    ///
    /// Switches to the CSV pair format, with `--data` as the information CSV.
    #[arg(long = "csv-powers", value_name = "PATH")]
    pub csv_powers: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ReportArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: ReportFormatArg,

    /// Power whose holders are counted at the top of the report.
    #[arg(long = "sample-power", value_name = "POWER", default_value = DEFAULT_SAMPLE_POWER)]
    pub sample_power: String,

    /// Skip the interactive name search after the report.
    #[arg(long = "no-search")]
    pub no_search: bool,
}

#[derive(Parser)]
pub struct SearchArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Exact, case-sensitive hero name.
    #[arg(value_name = "NAME")]
    pub name: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Text,
    Table,
    Json,
}

impl From<ReportFormatArg> for ReportFormat {
    fn from(arg: ReportFormatArg) -> Self {
        match arg {
            ReportFormatArg::Text => Self::Text,
            ReportFormatArg::Table => Self::Table,
            ReportFormatArg::Json => Self::Json,
        }
    }
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

impl From<LogLevelArg> for LevelFilter {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
