//! Error types for value navigation.
//!
//! Only recoverable conditions live here. Broken internal invariants (undecodable bytes
//! that already passed validation, a validated buffer with no recognizable kind) are not
//! errors: they abort through [`invariant_violated`].

use thiserror::Error;

use crate::pointer::LocateError;

/// Structured error types for value navigation.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ValueError {
    /// The requested key or index does not exist
    #[error("{}", describe_undefined(.path.as_deref()))]
    Undefined { path: Option<String> },

    /// The pointer locator failed while scanning unparsed bytes
    #[error(transparent)]
    Locate(#[from] LocateError),
}

fn describe_undefined(path: Option<&str>) -> String {
    match path {
        Some(path) if !path.is_empty() => format!("{path} is not defined"),
        _ => "not defined".to_string(),
    }
}

impl ValueError {
    /// Shorthand for an `Undefined` carrying the requested key.
    pub fn undefined(path: impl Into<String>) -> Self {
        ValueError::Undefined {
            path: Some(path.into()),
        }
    }

    /// Shorthand for an `Undefined` with no known key.
    pub fn undefined_unnamed() -> Self {
        ValueError::Undefined { path: None }
    }

    /// Check if this error means the key or index does not exist
    pub fn is_undefined(&self) -> bool {
        matches!(self, ValueError::Undefined { .. })
    }

    /// Check if this error came from the pointer locator
    pub fn is_locate_error(&self) -> bool {
        matches!(self, ValueError::Locate(_))
    }

    /// Get the requested key if this is an `Undefined` that knows it
    pub fn path(&self) -> Option<&str> {
        match self {
            ValueError::Undefined { path } => path.as_deref(),
            _ => None,
        }
    }
}

// Conversion from ValueError to the main Error type
impl From<ValueError> for crate::Error {
    fn from(err: ValueError) -> Self {
        crate::Error::Value(err)
    }
}

/// Aborts on a broken internal contract.
///
/// Continuing past one of these would hand out silently wrong data.
#[track_caller]
pub(crate) fn invariant_violated(what: impl std::fmt::Display) -> ! {
    tracing::error!(%what, "lazyjson invariant violated");
    panic!("lazyjson invariant violated: {what}")
}
