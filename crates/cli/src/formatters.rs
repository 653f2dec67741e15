//! Output formatting for command results.
//!
//! Responsibilities:
//! - Render results as pretty JSON or newline-delimited JSON on stdout.
//!
//! Does NOT handle:
//! - Logging (tracing writes to stderr, see `main`).

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One pretty-printed JSON document
    #[default]
    Json,
    /// One compact JSON value per line; sequences are split into their items
    Ndjson,
}

/// Write a single value.
pub fn write_value<W: Write, T: Serialize>(
    out: &mut W,
    format: OutputFormat,
    value: &T,
) -> Result<()> {
    match format {
        OutputFormat::Json => serde_json::to_writer_pretty(&mut *out, value)?,
        OutputFormat::Ndjson => serde_json::to_writer(&mut *out, value)?,
    }
    writeln!(out)?;
    Ok(())
}

/// Write a sequence: a JSON array, or one line per item.
pub fn write_items<W: Write, T: Serialize>(
    out: &mut W,
    format: OutputFormat,
    items: &[T],
) -> Result<()> {
    match format {
        OutputFormat::Json => write_value(out, format, &items),
        OutputFormat::Ndjson => {
            for item in items {
                write_value(out, format, item)?;
            }
            Ok(())
        }
    }
}

/// Print a confirmation for operations that return nothing.
pub fn write_ack<W: Write>(
    out: &mut W,
    format: OutputFormat,
    action: &str,
    name: &str,
) -> Result<()> {
    write_value(
        out,
        format,
        &serde_json::json!({"ok": true, "action": action, "name": name}),
    )
}
