//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use oli_standards::SchemaKind;

#[derive(Parser)]
#[command(
    name = "oli-import",
    version,
    about = "Bulk label CSV import - check address label files before attesting",
    long_about = "Check a CSV file of address labels against the label schema.\n\n\
                  Headers are matched fuzzily, chain ids and booleans are canonicalized,\n\
                  and every cell is validated against chains, usage categories and the\n\
                  public project directory."
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
    /// Parse and validate a CSV file.
    Check(CheckArgs),

    /// List the fields of an import schema.
    Fields(FieldsArgs),

    /// List known chains and their aliases.
    Chains,

    /// List usage categories.
    Categories,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// CSV file to check.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Schema the file follows.
    #[arg(long = "schema", value_enum, default_value = "labels")]
    pub schema: SchemaArg,

    /// Project directory endpoint (default: the public OLI project list).
    #[arg(long = "projects-url", value_name = "URL", env = "OLI_PROJECTS_URL")]
    pub projects_url: Option<String>,

    /// Skip the project directory fetch; project cells find no matches.
    #[arg(long = "offline")]
    pub offline: bool,

    /// Report format written to stdout.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,

    /// Write canonicalized rows to this CSV file.
    #[arg(long = "write-clean", value_name = "PATH")]
    pub write_clean: Option<PathBuf>,
}

#[derive(Parser)]
pub struct FieldsArgs {
    /// Schema to list.
    #[arg(long = "schema", value_enum, default_value = "labels")]
    pub schema: SchemaArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SchemaArg {
    Labels,
    Projects,
}

impl From<SchemaArg> for SchemaKind {
    fn from(arg: SchemaArg) -> Self {
        match arg {
            SchemaArg::Labels => SchemaKind::Labels,
            SchemaArg::Projects => SchemaKind::Projects,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
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
