//! Per-format output for command results

use algotrace_core::error::Result;
use serde_json::Value;

use super::OutputFormat;

/// Print a command result in `format`.
///
/// Only the selected branch runs. The json branch builds a document that
/// is printed pretty; the human and records branches print for themselves.
pub fn emit(
    format: OutputFormat,
    json: impl FnOnce() -> Result<Value>,
    human: impl FnOnce(),
    records: impl FnOnce(),
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&json()?)?),
        OutputFormat::Human => human(),
        OutputFormat::Records => records(),
    }
    Ok(())
}
