use crate::render::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rOvertime
/// CLI application to calculate overtime from a Jobcan attendance book
#[derive(Parser)]
#[command(
    name = "rovertime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Calculate current and projected month-end overtime from a Jobcan attendance-book snapshot",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or multiple setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Page snapshot plus the values that can replace what the page shows.
#[derive(Args, Debug, Clone)]
pub struct SnapshotArgs {
    /// Page snapshot (.json, .yaml/.yml) or attendance table (.csv)
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    #[arg(long = "today", help = "Evaluate as of this date (M/D or YYYY-MM-DD)")]
    pub today: Option<String>,

    #[arg(long = "monthly", help = "Monthly standard working time (H:MM)")]
    pub monthly: Option<String>,

    #[arg(long = "days", help = "Standard work days in the month")]
    pub days: Option<u32>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Show the active configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Calculate the overtime summary
    Calc {
        #[command(flatten)]
        input: SnapshotArgs,

        #[arg(long, value_enum, help = "Output format (default from config)")]
        format: Option<OutputFormat>,
    },

    /// List the classified attendance records
    Records {
        #[command(flatten)]
        input: SnapshotArgs,

        #[arg(long, value_name = "FILE", help = "Write the records to a CSV file")]
        file: Option<PathBuf>,

        #[arg(long, short = 'f', help = "Overwrite FILE without asking")]
        force: bool,
    },

    /// Convert minutes to H:MM, or H:MM text to minutes
    Convert {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}
