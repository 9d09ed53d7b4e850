//!
//! lazyjson: hold a JSON document without parsing it, and only pay for what you touch.
//! This library provides a single value model that can be backed by raw bytes, by a parsed
//! structure, or by both, with non-destructive overlays layered on top.
//!
//! ## Core Concepts
//!
//! lazyjson is built around a handful of concepts:
//!
//! * **Values (`value::Value`)**: A shared handle to a JSON node. A node starts out either as raw bytes
//!   (classified on construction, never parsed up front) or as a native literal.
//! * **Kinds (`value::Kind`)**: The top-level JSON kind of a node, fixed at construction time.
//! * **Navigation**: `Value::path` / `Value::index` resolve children through the overlay, then the parsed
//!   structure, then the raw bytes (via the `pointer` locator), in that order.
//! * **Overlays**: `Value::set_path` / `Value::set_index` record replacements without touching the original
//!   bytes or a previously parsed structure.
//! * **Materialization**: `Value::value` builds a plain `value::Native` tree with overlays applied, and
//!   `Value::bytes` re-encodes, reusing untouched raw bytes verbatim.
//! * **Metadata**: a side-channel object on every node, separate from the data it annotates.
//! * **Sharing**: a `Value` can be placed into several parents at once; changes through one are seen by all.

pub mod path;
pub mod pointer;
pub mod value;

/// Re-export the `Value` handle for easier access.
pub use value::{Kind, Literal, Native, Value};

/// Result type used throughout the lazyjson library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the lazyjson library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured navigation errors from the value module
    #[error(transparent)]
    Value(value::ValueError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Value(_) => "value",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a path or index was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Value(value_err) => value_err.is_undefined(),
            _ => false,
        }
    }

    /// Check if this error came from the byte-pointer locator.
    pub fn is_locate_error(&self) -> bool {
        match self {
            Error::Value(value_err) => value_err.is_locate_error(),
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Check if this error is serialization related.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}
