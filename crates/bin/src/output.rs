//! Output formatting helpers for human-readable and JSON output.

use lazyjson::Native;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Print a single JSON object built by the caller on one line.
pub fn print_json(value: &serde_json::Value) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

/// Convert a materialized value for embedding in a `serde_json` report.
///
/// `None` (a NotJson value) becomes `null`.
pub fn to_json(native: Option<Native>) -> Result<serde_json::Value, serde_json::Error> {
    match native {
        Some(native) => serde_json::to_value(native),
        None => Ok(serde_json::Value::Null),
    }
}
