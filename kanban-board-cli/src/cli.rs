//! CLI definition for the kanban board driver.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// How results are printed on stdout
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Yaml => write!(f, "yaml"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Kanban board driver
///
/// Seeds an in-memory board, optionally replays a script of operations and drag
/// gestures against it, and prints the result.
#[derive(Parser, Debug)]
#[command(name = "kanban-board")]
#[command(version)]
#[command(about = "Drive an in-memory kanban board from the command line")]
pub struct Cli {
    /// Configuration file (TOML, YAML or JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug output to stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub debug: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the seeded board
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },
    /// Apply a script of steps and print the resulting board
    Replay {
        /// Script file: a YAML or JSON list of `op` and `drag` steps
        script: PathBuf,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
        /// Exit with an error if any step was rejected
        #[arg(long)]
        strict: bool,
        /// Include the activity log in the output
        #[arg(long)]
        activity: bool,
    },
}
