//! Conversion of a value and everything under it into a [`Native`] tree.
//!
//! The decoded structure of a node is a cache: materialization builds a fresh native
//! tree from it and applies the overlay to that copy, never to the cache itself. That is
//! what keeps repeated calls idempotent while overlays are pending.

use super::errors::invariant_violated;
use super::node::{Overlay, State, Structure};
use super::{Native, Value};

impl Value {
    /// Materializes this value with all overlays applied.
    ///
    /// Decodes the raw bytes on first use and caches the result. Returns `None` for
    /// NotJson values. Inside containers, NotJson members are left out of objects and
    /// become `null` in arrays so that positions are preserved.
    ///
    /// ```
    /// # use lazyjson::{Native, Value};
    /// let value = Value::from_slice(br#"["marty",{"type":"contact"}]"#);
    /// value.set_index(0, "gerald");
    ///
    /// let native = value.value().unwrap();
    /// assert_eq!(native.as_array().unwrap()[0], "gerald");
    /// assert_eq!(value.value(), Some(native)); // idempotent
    /// ```
    pub fn value(&self) -> Option<Native> {
        self.node.borrow_mut().ensure_parsed();

        let node = self.node.borrow();
        let mut native = match &node.state {
            State::Raw(_) => return None,
            State::Parsed { structure, .. } => materialize(structure),
        };
        if let Some(overlay) = &node.overlay {
            apply_overlay(&mut native, overlay);
        }
        Some(native)
    }
}

fn materialize(structure: &Structure) -> Native {
    match structure {
        Structure::Array(elements) => Native::Array(
            elements
                .iter()
                .map(|element| element.value().unwrap_or(Native::Null))
                .collect(),
        ),
        Structure::Object(members) => Native::Object(
            members
                .iter()
                .filter_map(|(key, member)| Some((key.clone(), member.value()?)))
                .collect(),
        ),
        scalar => scalar
            .scalar()
            .unwrap_or_else(|| invariant_violated("container reached scalar conversion")),
    }
}

/// Merges overlay entries into a freshly built native container.
///
/// NotJson entries are skipped, as are array indexes past the end.
fn apply_overlay(native: &mut Native, overlay: &Overlay) {
    match native {
        Native::Object(members) => {
            for (key, replacement) in overlay {
                if let Some(replacement) = replacement.value() {
                    members.insert(key.clone(), replacement);
                }
            }
        }
        Native::Array(elements) => {
            for (key, replacement) in overlay {
                let Ok(index) = key.parse::<usize>() else {
                    invariant_violated(format!("array overlay key '{key}' is not an index"));
                };
                let Some(slot) = elements.get_mut(index) else {
                    continue;
                };
                if let Some(replacement) = replacement.value() {
                    *slot = replacement;
                }
            }
        }
        _ => {}
    }
}
