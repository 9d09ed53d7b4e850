//! Kind classification for raw JSON bytes.
//!
//! A buffer is validated once against the full JSON grammar; if it passes, the first
//! significant byte decides the top-level kind, with no tree built along the way.

use std::fmt;

use serde::de::IgnoredAny;

use super::errors::invariant_violated;

/// The top-level kind of a [`Value`](super::Value).
///
/// The kind is decided when the value is constructed and never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    /// Bytes that are not valid JSON
    NotJson,
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl Kind {
    /// Returns the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::NotJson => "not_json",
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }

    /// Returns true for Array and Object
    pub fn is_container(&self) -> bool {
        matches!(self, Kind::Array | Kind::Object)
    }

    /// Returns true for every kind except NotJson
    pub fn is_json(&self) -> bool {
        !matches!(self, Kind::NotJson)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checks `bytes` against the JSON grammar without building anything.
pub fn validate(bytes: &[u8]) -> Result<(), serde_json::Error> {
    serde_json::from_slice::<IgnoredAny>(bytes).map(|_| ())
}

/// Validates `bytes` and returns its top-level kind, or [`Kind::NotJson`].
///
/// ```
/// # use lazyjson::value::{Kind, kind::classify};
/// assert_eq!(classify(b" {\"a\":1}"), Kind::Object);
/// assert_eq!(classify(b"-3.65"), Kind::Number);
/// assert_eq!(classify(b"asdf"), Kind::NotJson);
/// ```
pub fn classify(bytes: &[u8]) -> Kind {
    if let Err(err) = validate(bytes) {
        tracing::trace!(len = bytes.len(), %err, "Bytes are not JSON");
        return Kind::NotJson;
    }
    identify(bytes)
}

/// Identifies the kind of bytes already known to be valid JSON.
pub(crate) fn identify(bytes: &[u8]) -> Kind {
    for byte in bytes {
        let kind = match byte {
            b'{' => Kind::Object,
            b'[' => Kind::Array,
            b'"' => Kind::String,
            b'0'..=b'9' | b'-' => Kind::Number,
            b't' | b'f' => Kind::Boolean,
            b'n' => Kind::Null,
            _ => continue,
        };
        tracing::trace!(%kind, "Classified bytes");
        return kind;
    }
    invariant_violated("validated JSON has no kind-identifying byte")
}
