//! Subcommand implementations.

use std::fs::File;
use std::io;
use std::path::Path;

use lazyjson::Value;

pub mod get;
pub mod kind;
pub mod set;

/// Read a whole document from `file`, or from stdin when no file is given.
///
/// The document is wrapped as raw bytes; nothing is decoded yet.
pub fn read_document(file: Option<&Path>) -> lazyjson::Result<Value> {
    match file {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Reading document from file");
            Value::from_reader(File::open(path)?)
        }
        None => {
            tracing::debug!("Reading document from stdin");
            Value::from_reader(io::stdin().lock())
        }
    }
}

/// Interpret a command-line value as JSON, falling back to a plain string.
pub fn parse_argument(text: &str) -> Value {
    let value = Value::from_slice(text.as_bytes());
    if value.kind().is_json() {
        value
    } else {
        tracing::trace!(text, "Argument is not JSON, storing as string");
        Value::new(text)
    }
}
