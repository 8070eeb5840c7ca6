//! Canonry command-line interface.
//!
//! Resolves the canon root from `--root`, then `CANONRY_ROOT`, then the
//! current directory, loads every canon category, and prints a report.
//! The process exits with 0 when the whole canon loaded cleanly and 1
//! when any category failed.

use clap::Parser;
use std::env;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;
mod display;

use cli::{Cli, OutputFormat};

/// Exit code when every category loaded without error
const EXIT_SUCCESS: i32 = 0;

/// Exit code when the canon failed to load
const EXIT_ERROR: i32 = 1;

/// Environment variable consulted for the canon root when --root is absent
const ROOT_ENV_VAR: &str = "CANONRY_ROOT";

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    };
    process::exit(exit_code);
}

/// Load the canon and render the report, returning the process exit code.
fn run(cli: Cli) -> anyhow::Result<i32> {
    let root = resolve_root(cli.root);
    tracing::debug!("Loading canon from {}", root.display());

    let report = canonry::CanonLoader::new(&root).load_all();

    let rendered = match cli.format {
        OutputFormat::Text => display::format_text(&report, &root, cli.quiet),
        OutputFormat::Json => display::format_json(&report, &root)?,
    };
    print!("{rendered}");

    Ok(if report.valid { EXIT_SUCCESS } else { EXIT_ERROR })
}

/// Resolve the canon root from the flag, the environment, or the current directory.
fn resolve_root(flag: Option<PathBuf>) -> PathBuf {
    if let Some(root) = flag {
        return root;
    }
    if let Ok(root) = env::var(ROOT_ENV_VAR) {
        if !root.is_empty() {
            return PathBuf::from(root);
        }
    }
    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
