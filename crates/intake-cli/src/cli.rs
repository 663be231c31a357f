//! CLI argument definitions for the intake processor.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "form-intake",
    version,
    about = "Intake form processor - validate, score, and report submissions",
    long_about = "Process medical intake form submissions.\n\n\
                  Validates every field against its configured rules and blocks\n\
                  invalid submissions. Valid Vanderbilt assessment submissions are\n\
                  scored and written out as XML and a text summary."
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

    /// Allow submitted values (patient data) to appear in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Process a submission bundle: validate, score, and write reports.
    Process(ProcessArgs),

    /// Show the validation rules resolved for each field of a bundle.
    Rules(RulesArgs),
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Path to the submission bundle JSON.
    #[arg(value_name = "SUBMISSION")]
    pub bundle: PathBuf,

    /// Output directory for report files (default: <SUBMISSION dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Validate and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct RulesArgs {
    /// Path to the submission bundle JSON.
    #[arg(value_name = "SUBMISSION")]
    pub bundle: PathBuf,
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
