//! Node storage behind a [`Value`](super::Value) handle.
//!
//! Each node is in exactly one of two states. A `Raw` node holds the original bytes
//! and has never been decoded. A `Parsed` node holds a decoded [`Structure`], and keeps
//! the bytes it came from when there were any. Independently of the state, a node may
//! carry an overlay layer and a metadata object.

use std::collections::BTreeMap;

use bytes::Bytes;
use serde_json::value::RawValue;

use super::errors::invariant_violated;
use super::{Kind, Native, Value};

/// Pending replacements keyed by object key or decimal array index.
pub(crate) type Overlay = BTreeMap<String, Value>;

pub(crate) struct Node {
    pub(crate) kind: Kind,
    pub(crate) state: State,
    pub(crate) overlay: Option<Overlay>,
    pub(crate) metadata: Option<Value>,
}

pub(crate) enum State {
    /// Never decoded; NotJson nodes stay here forever
    Raw(Bytes),
    /// Decoded. `raw` is immutable and only kept for verbatim re-encoding.
    Parsed {
        structure: Structure,
        raw: Option<Bytes>,
    },
}

/// A decoded node. Container children are shared handles, never deep copies.
pub(crate) enum Structure {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

impl Node {
    pub(crate) fn raw(kind: Kind, raw: Bytes) -> Self {
        Self {
            kind,
            state: State::Raw(raw),
            overlay: None,
            metadata: None,
        }
    }

    pub(crate) fn parsed(kind: Kind, structure: Structure) -> Self {
        Self {
            kind,
            state: State::Parsed {
                structure,
                raw: None,
            },
            overlay: None,
            metadata: None,
        }
    }

    pub(crate) fn is_parsed(&self) -> bool {
        matches!(self.state, State::Parsed { .. })
    }

    pub(crate) fn has_overlay(&self) -> bool {
        self.overlay.as_ref().is_some_and(|overlay| !overlay.is_empty())
    }

    /// Decodes the raw bytes once. No-op for parsed and NotJson nodes.
    pub(crate) fn ensure_parsed(&mut self) {
        if !self.kind.is_json() {
            return;
        }
        if let State::Raw(raw) = &self.state {
            let raw = raw.clone();
            let structure = Structure::decode(self.kind, &raw);
            tracing::debug!(kind = %self.kind, len = raw.len(), "Parsed value lazily");
            self.state = State::Parsed {
                structure,
                raw: Some(raw),
            };
        }
    }
}

impl Structure {
    /// Decodes validated bytes of a known kind.
    ///
    /// Containers are split one level deep: each child becomes a bytes-backed value over
    /// a sub-slice of `raw`, so untouched descendants are never decoded.
    pub(crate) fn decode(kind: Kind, raw: &Bytes) -> Self {
        match kind {
            Kind::Object => {
                let members: BTreeMap<String, &RawValue> = serde_json::from_slice(raw)
                    .unwrap_or_else(|err| invariant_violated(format!("decode object: {err}")));
                Structure::Object(
                    members
                        .into_iter()
                        .map(|(key, member)| (key, Value::from_trusted(slice_of(raw, member))))
                        .collect(),
                )
            }
            Kind::Array => {
                let elements: Vec<&RawValue> = serde_json::from_slice(raw)
                    .unwrap_or_else(|err| invariant_violated(format!("decode array: {err}")));
                Structure::Array(
                    elements
                        .into_iter()
                        .map(|element| Value::from_trusted(slice_of(raw, element)))
                        .collect(),
                )
            }
            Kind::NotJson => invariant_violated("decode requested for bytes that are not JSON"),
            _ => {
                let native: Native = serde_json::from_slice(raw)
                    .unwrap_or_else(|err| invariant_violated(format!("decode {kind}: {err}")));
                match (kind, native) {
                    (Kind::Null, Native::Null) => Structure::Null,
                    (Kind::Boolean, Native::Bool(b)) => Structure::Bool(b),
                    (Kind::Number, Native::Number(n)) => Structure::Number(n),
                    (Kind::String, Native::String(s)) => Structure::String(s),
                    (kind, native) => invariant_violated(format!(
                        "classified as {kind} but decoded as {}",
                        native.kind()
                    )),
                }
            }
        }
    }

    /// Scalar structures as native values. Containers are handled by the materializer.
    pub(crate) fn scalar(&self) -> Option<Native> {
        match self {
            Structure::Null => Some(Native::Null),
            Structure::Bool(b) => Some(Native::Bool(*b)),
            Structure::Number(n) => Some(Native::Number(*n)),
            Structure::String(s) => Some(Native::String(s.clone())),
            Structure::Array(_) | Structure::Object(_) => None,
        }
    }
}

/// The sub-range of `raw` a borrowed child occupies, sharing its allocation.
fn slice_of(raw: &Bytes, child: &RawValue) -> Bytes {
    raw.slice_ref(child.get().as_bytes())
}
