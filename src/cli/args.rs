//! Command line argument parsing for the Magus CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Magus - dynamic property and event dispatch metadata inspector
#[derive(Parser, Debug, Clone)]
#[command(name = "magus")]
#[command(about = "Inspect class metadata: virtual properties, events, and name suggestions")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct MagusArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl MagusArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Resolve virtual property tables from a metadata file
    Resolve(ResolveArgs),

    /// Suggest the closest candidate name for a target
    Suggest(SuggestArgs),

    /// List event-shaped fields from a metadata file
    Events(EventsArgs),
}

/// Arguments for resolving property tables
#[derive(Parser, Debug, Clone)]
pub struct ResolveArgs {
    /// Class metadata file path (JSON array of class descriptions)
    #[arg(value_name = "METADATA_FILE")]
    pub metadata_file: PathBuf,

    /// Restrict output to a single class
    #[arg(short, long, value_name = "CLASS")]
    pub class: Option<String>,
}

/// Arguments for spelling suggestions
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// The name to correct
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Candidate names, in priority order
    #[arg(value_name = "CANDIDATE", required = true)]
    pub candidates: Vec<String>,
}

/// Arguments for listing event fields
#[derive(Parser, Debug, Clone)]
pub struct EventsArgs {
    /// Class metadata file path (JSON array of class descriptions)
    #[arg(value_name = "METADATA_FILE")]
    pub metadata_file: PathBuf,

    /// Restrict output to a single class
    #[arg(short, long, value_name = "CLASS")]
    pub class: Option<String>,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        let args = MagusArgs::parse_from(["magus", "suggest", "tagret", "target"]);
        assert_eq!(args.verbosity(), 1);

        let args = MagusArgs::parse_from(["magus", "-q", "suggest", "tagret", "target"]);
        assert_eq!(args.verbosity(), 0);

        let args = MagusArgs::parse_from(["magus", "-vv", "suggest", "tagret", "target"]);
        assert_eq!(args.verbosity(), 2);
    }

    #[test]
    fn test_resolve_args() {
        let args = MagusArgs::parse_from([
            "magus",
            "--format",
            "json",
            "resolve",
            "classes.json",
            "--class",
            "Article",
        ]);
        assert_eq!(args.output_format, OutputFormat::Json);
        match args.command {
            Command::Resolve(resolve) => {
                assert_eq!(resolve.metadata_file.to_str(), Some("classes.json"));
                assert_eq!(resolve.class.as_deref(), Some("Article"));
            }
            _ => panic!("Expected resolve command"),
        }
    }
}
