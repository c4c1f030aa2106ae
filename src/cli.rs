//! Command line interface

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kukakit", version)]
#[command(about = "Generate chunked KUKA spline programs (.dat/.src)", long_about = None)]
pub struct Cli {
    /// Configuration file (.toml or .json)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory the generated files are written to
    #[arg(short, long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Suppress the progress ticker and informational logs
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log level selected by `--quiet` / `-v`
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            return tracing::Level::WARN;
        }
        match self.verbose {
            0 => tracing::Level::INFO,
            1 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Scatter random circles in front of the robot
    #[command(alias = "r")]
    Random {
        /// Number of circles
        #[arg(short = 'n', long)]
        count: Option<usize>,
        /// Maximum points per spline block (0 = one block)
        #[arg(short = 'm', long = "max")]
        max_points: Option<usize>,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Traverse one circle several times
    #[command(alias = "p")]
    Repeat {
        /// Number of traversals
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
    /// Convert a point table (time,x,y,z,a,b,c,time_mark per line)
    #[command(alias = "c")]
    Csv {
        /// Table file
        file: PathBuf,
        /// Maximum points per spline block (0 = one block)
        #[arg(short = 'm', long = "max")]
        max_points: Option<usize>,
        /// Replace unparsable fields with 0 instead of failing
        #[arg(long)]
        lenient: bool,
    },
}
