//! Command-line argument definitions for the canonry binary.

use clap::{Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;

/// Output format for the canon report
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with colors
    Text,
    /// Machine-readable JSON
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Load and validate a canon of TOML specification documents
#[derive(Parser, Debug)]
#[command(name = "canonry")]
#[command(version)]
#[command(about = "Load a canon of TOML specification documents and report its health")]
pub struct Cli {
    /// Canon root directory (defaults to $CANONRY_ROOT, then the current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Only print errors and the failure verdict
    #[arg(short, long)]
    pub quiet: bool,
}
