//! Command implementations for the `oxide-yesql` tool.
//!
//! Each command writes its report to the given writer so it can be
//! exercised without spawning the binary.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use oxide_yesql::{Queries, parse_file};
use serde::Serialize;
use tracing::{debug, info};

/// Output format for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable text.
    #[default]
    Text,
    /// JSON, one document per invocation.
    Json,
}

#[derive(Serialize)]
struct FileReport<'a> {
    path: &'a Path,
    queries: usize,
}

/// Parses every file and reports how many queries each declares.
///
/// Stops at the first file that fails to load or parse. In text format each
/// file is reported as soon as it passes; JSON is written as one document
/// once every file has passed.
///
/// # Errors
///
/// Returns the first load or parse error, or a write error.
pub fn check(files: &[PathBuf], format: OutputFormat, out: &mut impl Write) -> anyhow::Result<()> {
    let mut reports = Vec::with_capacity(files.len());
    for path in files {
        debug!(path = %path.display(), "Checking query file");
        let queries = parse_file(path)?;
        let report = FileReport {
            path,
            queries: queries.len(),
        };
        match format {
            OutputFormat::Text => {
                writeln!(out, "{}: {} queries", report.path.display(), report.queries)?;
            }
            OutputFormat::Json => reports.push(report),
        }
    }

    if format == OutputFormat::Json {
        serde_json::to_writer_pretty(&mut *out, &reports)?;
        writeln!(out)?;
    }
    info!(files = files.len(), "All query files are valid");
    Ok(())
}

/// Lists every query in a file with its tags.
///
/// # Errors
///
/// Returns a load, parse, or write error.
pub fn list(file: &Path, format: OutputFormat, out: &mut impl Write) -> anyhow::Result<()> {
    let queries = parse_file(file)?;
    match format {
        OutputFormat::Text => write_listing(&queries, out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &queries)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_listing(queries: &Queries, out: &mut impl Write) -> std::io::Result<()> {
    for (name, query) in queries {
        if query.tags().is_empty() {
            writeln!(out, "{name}")?;
        } else {
            let tags: Vec<String> = query
                .tags()
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect();
            writeln!(out, "{name} [{}]", tags.join(", "))?;
        }
    }
    Ok(())
}

/// Prints the assembled statement of one query.
///
/// # Errors
///
/// Fails with `QueryNotFound` if `name` is not declared in the file, or
/// with a load, parse, or write error.
pub fn show(
    file: &Path,
    name: &str,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let queries = parse_file(file)?;
    let query = queries.require(name)?;
    match format {
        OutputFormat::Text => writeln!(out, "{}", query.text())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, query)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
