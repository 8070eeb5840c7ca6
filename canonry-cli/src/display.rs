//! Rendering of canon load reports as colored text or JSON.

use anyhow::Result;
use canonry::{CanonError, LoadReport};
use colored::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;
use std::path::Path;

/// JSON representation of a load report
#[derive(Debug, Serialize)]
struct JsonReport {
    valid: bool,
    root: String,
    documents_loaded: usize,
    summary: BTreeMap<String, Vec<String>>,
    documents: BTreeMap<String, Vec<JsonDocument>>,
    errors: Vec<JsonError>,
}

/// JSON representation of a single loaded document
#[derive(Debug, Serialize)]
struct JsonDocument {
    name: String,
    path: String,
    keys: Vec<String>,
}

/// JSON representation of a load error
#[derive(Debug, Serialize)]
struct JsonError {
    category: Option<String>,
    message: String,
}

/// Format a load report as human-readable text with colors.
///
/// In quiet mode only errors and the failure verdict are printed, so a
/// clean canon produces no output at all.
pub fn format_text(report: &LoadReport, root: &Path, quiet: bool) -> String {
    let mut output = String::new();

    if !quiet {
        writeln!(output, "Canon root: {}", root.display().to_string().dimmed()).unwrap();
        if !report.summary.is_empty() {
            writeln!(output).unwrap();
        }
        for (category, items) in &report.summary {
            let rendered = if items.is_empty() {
                "(none)".dimmed().to_string()
            } else {
                items.join(", ")
            };
            writeln!(output, "  {}: {}", category.to_string().bold(), rendered).unwrap();
        }
    }

    if report.has_errors() {
        if !quiet {
            writeln!(output).unwrap();
        }
        for error in &report.errors {
            let (category, message) = error_parts(error);
            writeln!(output, "  {} [{}] {}", "ERROR".red(), category, message).unwrap();
        }
    }

    if !quiet {
        writeln!(output, "\n{}", "Summary:".bold()).unwrap();
        writeln!(output, "  Documents loaded: {}", report.document_count()).unwrap();
        if !report.errors.is_empty() {
            writeln!(output, "  Errors: {}", report.errors.len().to_string().red()).unwrap();
        }
        if report.valid {
            writeln!(output, "\n{} Canon validation passed!", "✅".green()).unwrap();
        } else {
            writeln!(output, "\n{} Canon validation failed with errors.", "❌".red()).unwrap();
        }
    } else if report.has_errors() {
        writeln!(output, "\n{} Canon validation failed with errors.", "❌".red()).unwrap();
    }

    output
}

/// Format a load report as pretty-printed JSON.
pub fn format_json(report: &LoadReport, root: &Path) -> Result<String> {
    let json_report = JsonReport {
        valid: report.valid,
        root: root.display().to_string(),
        documents_loaded: report.document_count(),
        summary: report
            .summary
            .iter()
            .map(|(category, items)| (category.name().to_string(), items.clone()))
            .collect(),
        documents: report
            .documents
            .iter()
            .map(|(bucket, documents)| {
                let documents = documents
                    .iter()
                    .map(|document| JsonDocument {
                        name: document.name().to_string(),
                        path: document.path().display().to_string(),
                        keys: document.keys().to_vec(),
                    })
                    .collect();
                (bucket.name().to_string(), documents)
            })
            .collect(),
        errors: report.errors.iter().map(json_error).collect(),
    };

    let mut output = serde_json::to_string_pretty(&json_report)?;
    output.push('\n');
    Ok(output)
}

/// Split an error into its category label and message for display.
fn error_parts(error: &CanonError) -> (&'static str, String) {
    match error {
        CanonError::RootNotSet => ("-", error.to_string()),
        CanonError::Category { category, source } => (category.name(), source.to_string()),
    }
}

fn json_error(error: &CanonError) -> JsonError {
    match error {
        CanonError::RootNotSet => JsonError {
            category: None,
            message: error.to_string(),
        },
        CanonError::Category { category, source } => JsonError {
            category: Some(category.name().to_string()),
            message: source.to_string(),
        },
    }
}
