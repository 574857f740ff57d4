use chaintrace::core::io::report::ReportFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Lenia Malki",
    version,
    about = "chaintrace - Recover the backbone order of a protein chain from unordered alpha-carbon coordinates.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recover the chain order of the points in a record file.
    Trace(TraceArgs),
    /// Print the initial neighbour count of every point, to diagnose inputs that cannot be traced.
    Inspect(InspectArgs),
}

/// Options shared by every command that needs a distance window.
#[derive(Args, Debug, Clone)]
pub struct WindowArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the lower bound of the bond-length window (Angstroms).
    #[arg(long, value_name = "FLOAT")]
    pub dmin: Option<f64>,

    /// Override the upper bound of the bond-length window (Angstroms).
    #[arg(long, value_name = "FLOAT")]
    pub dmax: Option<f64>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S window.min=3.75
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `trace` subcommand.
#[derive(Args, Debug)]
pub struct TraceArgs {
    /// Path to the input record file (`<tag> <id> <x> <y> <z>` per line).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    #[command(flatten)]
    pub window: WindowArgs,

    /// Write the report to a file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Report format: 'text' or 'csv'.
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<ReportFormat>,

    /// Report the chain front to back instead of in peeling order.
    #[arg(long, conflicts_with = "discovery_order")]
    pub front_to_back: bool,

    /// Report the chain in peeling order, even if the config file asks for front to back.
    #[arg(long)]
    pub discovery_order: bool,

    /// Do not draw a progress bar.
    #[arg(long)]
    pub no_progress: bool,
}

impl TraceArgs {
    /// Orientation requested on the command line, if any.
    pub fn front_to_back_override(&self) -> Option<bool> {
        if self.front_to_back {
            Some(true)
        } else if self.discovery_order {
            Some(false)
        } else {
            None
        }
    }
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Path to the input record file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    #[command(flatten)]
    pub window: WindowArgs,
}
