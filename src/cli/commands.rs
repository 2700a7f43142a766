//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Battle chronicle CLI
#[derive(Parser, Debug)]
#[command(name = "chronicle")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Account uid, overrides the configured one
    #[arg(short, long, global = true)]
    pub uid: Option<u64>,

    /// Response language, overrides the configured one
    #[arg(short, long, global = true)]
    pub lang: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Signal search history, newest first
    Signals {
        /// Banner type (1 standard, 2 character, 3 weapon, 5 bangboo); repeat for several, omit for all
        #[arg(short, long = "banner")]
        banners: Vec<i64>,

        /// Maximum number of pulls
        #[arg(long)]
        limit: Option<usize>,

        /// Resume after this signal id
        #[arg(long, default_value = "0")]
        end_id: u64,
    },

    /// Gacha currencies and pity
    GachaInfo {
        /// Print the unparsed response data
        #[arg(long)]
        raw: bool,
    },

    /// Running and upcoming banners
    GachaCalendar,

    /// Running and upcoming events
    Events,

    /// Deadly Assault results
    DeadlyAssault {
        /// Previous season instead of the current one
        #[arg(long)]
        previous: bool,

        /// Print the unparsed response data
        #[arg(long)]
        raw: bool,
    },

    /// Shiyu Defense results
    ShiyuDefense {
        /// Previous season instead of the current one
        #[arg(long)]
        previous: bool,

        /// Print the unparsed response data
        #[arg(long)]
        raw: bool,
    },

    /// Threshold Simulation results
    ThresholdSimulation {
        /// Run id, latest run if omitted
        #[arg(long)]
        id: Option<u64>,

        /// Only the run summary
        #[arg(long, conflicts_with = "raw")]
        brief: bool,

        /// Print the unparsed response data
        #[arg(long)]
        raw: bool,
    },

    /// Real-time notes
    Notes {
        /// Print the unparsed response data
        #[arg(long)]
        raw: bool,
    },

    /// Monthly currency income
    Diary {
        /// Month as YYYYMM, current month if omitted
        #[arg(long)]
        month: Option<String>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one value per line)
    Json,
    /// Indented JSON
    Pretty,
}
