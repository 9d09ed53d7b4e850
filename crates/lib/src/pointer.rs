//! Pointer lookups over unparsed JSON bytes.
//!
//! This module locates the byte range of a single member or element inside a JSON
//! document without building the document tree. Each pointer token is resolved by
//! scanning one container level with a serde visitor: the matching member is borrowed
//! as a [`RawValue`] and every other member is skipped with [`IgnoredAny`].
//!
//! Pointer expressions follow RFC 6901: the empty string addresses the whole document,
//! otherwise the expression is a sequence of `/`-prefixed tokens in which `~1` stands
//! for `/` and `~0` for `~`.
//!
//! ```
//! use bytes::Bytes;
//! use lazyjson::pointer;
//!
//! let doc = Bytes::from_static(br#"{"address":{"street":"sutton oaks"}}"#);
//! let street = pointer::find(&doc, "/address/street")?;
//! assert_eq!(street.as_deref(), Some(&br#""sutton oaks""#[..]));
//! # Ok::<(), pointer::LocateError>(())
//! ```

use std::fmt;

use bytes::Bytes;
use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde_json::value::RawValue;
use thiserror::Error;

/// Errors reported by the pointer locator.
///
/// A missing key or an out-of-range index is not an error; [`find`] reports those
/// as `Ok(None)`.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum LocateError {
    /// The expression is neither empty nor `/`-prefixed
    #[error("Invalid pointer expression: '{pointer}'")]
    InvalidPointer { pointer: String },

    /// A token applied to an array is not a canonical decimal index
    #[error("Invalid array index '{segment}' in pointer '{pointer}'")]
    InvalidIndex { pointer: String, segment: String },

    /// The bytes being searched are not well-formed JSON
    #[error("Malformed JSON while resolving '{pointer}': {source}")]
    Syntax {
        pointer: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LocateError {
    /// The pointer expression that failed.
    pub fn pointer(&self) -> &str {
        match self {
            LocateError::InvalidPointer { pointer }
            | LocateError::InvalidIndex { pointer, .. }
            | LocateError::Syntax { pointer, .. } => pointer,
        }
    }

    /// Check if this error is caused by malformed input bytes
    pub fn is_syntax_error(&self) -> bool {
        matches!(self, LocateError::Syntax { .. })
    }

    /// Check if this error is caused by a non-numeric array token
    pub fn is_index_error(&self) -> bool {
        matches!(self, LocateError::InvalidIndex { .. })
    }
}

/// Escapes a single key so it can be used as one pointer token.
pub fn escape(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

/// Reverses [`escape`].
pub fn unescape(token: &str) -> String {
    token.replace("~1", "/").replace("~0", "~")
}

/// Parses a canonical array index: decimal digits with no sign and no leading zero.
///
/// Returns `None` when the token can never address an array element.
///
/// ```
/// # use lazyjson::pointer::parse_index;
/// assert_eq!(parse_index("0"), Some(0));
/// assert_eq!(parse_index("12"), Some(12));
/// assert_eq!(parse_index("012"), None);
/// assert_eq!(parse_index("-1"), None);
/// assert_eq!(parse_index("name"), None);
/// ```
pub fn parse_index(token: &str) -> Option<usize> {
    let bytes = token.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    // Well-formed but too large for this platform: it can only miss
    Some(token.parse().unwrap_or(usize::MAX))
}

/// Builds the single-token pointer for an object key.
pub fn for_key(key: &str) -> String {
    format!("/{}", escape(key))
}

/// Builds the single-token pointer for an array index.
pub fn for_index(index: usize) -> String {
    format!("/{index}")
}

/// Locates the sub-range of `bytes` addressed by `pointer`.
///
/// The returned [`Bytes`] shares the allocation of the input. Stepping into a scalar,
/// a missing key, and an out-of-range index all return `Ok(None)`.
pub fn find(bytes: &Bytes, pointer: &str) -> Result<Option<Bytes>, LocateError> {
    if pointer.is_empty() {
        return Ok(Some(bytes.clone()));
    }
    let Some(tokens) = pointer.strip_prefix('/') else {
        return Err(LocateError::InvalidPointer {
            pointer: pointer.to_string(),
        });
    };

    let mut current: &[u8] = bytes;
    for token in tokens.split('/') {
        let segment = unescape(token);
        let located =
            locate_member(current, &segment).map_err(|source| LocateError::Syntax {
                pointer: pointer.to_string(),
                source,
            })?;
        match located {
            Located::Found(raw) => current = raw.get().as_bytes(),
            Located::Missing => return Ok(None),
            Located::NotAnIndex => {
                return Err(LocateError::InvalidIndex {
                    pointer: pointer.to_string(),
                    segment,
                });
            }
        }
    }

    tracing::trace!(pointer, len = current.len(), "Pointer resolved");
    Ok(Some(bytes.slice_ref(current)))
}

/// Outcome of resolving one token against one container level.
enum Located<'de> {
    Found(&'de RawValue),
    Missing,
    NotAnIndex,
}

fn locate_member<'de>(bytes: &'de [u8], segment: &str) -> Result<Located<'de>, serde_json::Error> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    let located = de::Deserializer::deserialize_any(&mut de, Member { segment })?;
    de.end()?;
    Ok(located)
}

/// Visitor that picks out one member of the container it is handed.
struct Member<'s> {
    segment: &'s str,
}

impl<'de> Visitor<'de> for Member<'_> {
    type Value = Located<'de>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "any JSON value")
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(Located::Missing)
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
        Ok(Located::Missing)
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
        Ok(Located::Missing)
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
        Ok(Located::Missing)
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<Self::Value, E> {
        Ok(Located::Missing)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Located::Missing)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        // Duplicate keys resolve to the last occurrence, like a full decode does
        let mut found = None;
        while let Some(key) = map.next_key::<String>()? {
            if key == self.segment {
                found = Some(map.next_value::<&'de RawValue>()?);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(found.map_or(Located::Missing, Located::Found))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let Some(target) = parse_index(self.segment) else {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            return Ok(Located::NotAnIndex);
        };

        let mut found = None;
        let mut position = 0usize;
        loop {
            if position == target {
                match seq.next_element::<&'de RawValue>()? {
                    Some(raw) => found = Some(raw),
                    None => break,
                }
            } else if seq.next_element::<IgnoredAny>()?.is_none() {
                break;
            }
            position += 1;
        }
        Ok(found.map_or(Located::Missing, Located::Found))
    }
}
