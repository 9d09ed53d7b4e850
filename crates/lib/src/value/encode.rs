//! Re-encoding values to JSON bytes.
//!
//! Any node nobody has touched hands back its original bytes. Everything else is
//! assembled from its children's encodings, so an untouched sub-tree under a modified
//! parent is still copied verbatim rather than re-serialized.

use std::collections::BTreeMap;

use bytes::Bytes;

use super::errors::invariant_violated;
use super::node::{State, Structure};
use super::{Kind, Value};

impl Value {
    /// Encodes this value as JSON bytes equivalent to [`Value::value`].
    ///
    /// NotJson values return their original bytes.
    ///
    /// ```
    /// # use lazyjson::Value;
    /// let input = br#"{ "name": "marty" }"#;
    /// let value = Value::from_slice(input);
    /// assert_eq!(&value.bytes()[..], &input[..]);
    ///
    /// value.set_path("name", "steve");
    /// assert_eq!(&value.bytes()[..], br#"{"name":"steve"}"#);
    /// ```
    pub fn bytes(&self) -> Bytes {
        {
            let node = self.node.borrow();
            match &node.state {
                State::Raw(raw) if !node.kind.is_container() => return raw.clone(),
                State::Parsed { raw: Some(raw), .. } if !node.kind.is_container() => {
                    return raw.clone();
                }
                State::Raw(raw) if !node.has_overlay() => {
                    tracing::debug!(kind = %node.kind, len = raw.len(), "Reusing raw bytes");
                    return raw.clone();
                }
                _ => {}
            }
        }

        self.node.borrow_mut().ensure_parsed();
        let node = self.node.borrow();
        let State::Parsed { structure, .. } = &node.state else {
            invariant_violated("container still unparsed after ensure_parsed");
        };

        match structure {
            Structure::Object(members) => {
                let mut merged: BTreeMap<&str, &Value> =
                    members.iter().map(|(key, member)| (key.as_str(), member)).collect();
                for (key, replacement) in node.overlay.iter().flatten() {
                    if replacement.kind().is_json() {
                        merged.insert(key, replacement);
                    }
                }
                encode_object(merged)
            }
            Structure::Array(elements) => {
                let mut merged: Vec<&Value> = elements.iter().collect();
                for (key, replacement) in node.overlay.iter().flatten() {
                    let Ok(index) = key.parse::<usize>() else {
                        invariant_violated(format!("array overlay key '{key}' is not an index"));
                    };
                    if !replacement.kind().is_json() {
                        continue;
                    }
                    if let Some(slot) = merged.get_mut(index) {
                        *slot = replacement;
                    }
                }
                encode_array(merged)
            }
            scalar => {
                let native = scalar
                    .scalar()
                    .unwrap_or_else(|| invariant_violated("container reached scalar encoding"));
                serde_json::to_vec(&native)
                    .map(Bytes::from)
                    .unwrap_or_else(|err| invariant_violated(format!("encode {native:?}: {err}")))
            }
        }
    }
}

fn encode_object(members: BTreeMap<&str, &Value>) -> Bytes {
    let mut out = Vec::new();
    out.push(b'{');
    let mut first = true;
    for (key, member) in members {
        if member.kind() == Kind::NotJson {
            continue;
        }
        if !first {
            out.push(b',');
        }
        first = false;
        serde_json::to_writer(&mut out, key)
            .unwrap_or_else(|err| invariant_violated(format!("encode key {key:?}: {err}")));
        out.push(b':');
        out.extend_from_slice(&member.bytes());
    }
    out.push(b'}');
    Bytes::from(out)
}

fn encode_array(elements: Vec<&Value>) -> Bytes {
    let mut out = Vec::new();
    out.push(b'[');
    for (position, element) in elements.into_iter().enumerate() {
        if position > 0 {
            out.push(b',');
        }
        if element.kind() == Kind::NotJson {
            out.extend_from_slice(b"null");
        } else {
            out.extend_from_slice(&element.bytes());
        }
    }
    out.push(b']');
    Bytes::from(out)
}
