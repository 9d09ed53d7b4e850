//! Non-destructive writes.
//!
//! A write on an unparsed node is recorded in the overlay and never touches the raw
//! bytes. Once a node is parsed, writes go straight into its structure instead.

use super::node::{Overlay, State, Structure};
use super::{Kind, Literal, Value};

impl Value {
    /// Replaces the member `name` of an Object. No-op on every other kind.
    ///
    /// `val` is adopted by reference if it is already a [`Value`].
    pub fn set_path(&self, name: &str, val: impl Into<Literal>) {
        if self.kind() != Kind::Object {
            tracing::trace!(kind = %self.kind(), name, "Ignoring set_path on non-object");
            return;
        }
        let val = Value::new(val);

        let mut node = self.node.borrow_mut();
        let node = &mut *node;
        match &mut node.state {
            State::Parsed {
                structure: Structure::Object(members),
                ..
            } => {
                tracing::debug!(name, "Writing member into parsed object");
                members.insert(name.to_string(), val);
                // The structure now holds the newest write; a stale overlay would shadow it
                if let Some(overlay) = &mut node.overlay {
                    overlay.remove(name);
                }
            }
            _ => {
                tracing::debug!(name, "Recording member in overlay");
                node.overlay
                    .get_or_insert_with(Overlay::new)
                    .insert(name.to_string(), val);
            }
        }
    }

    /// Replaces the element at `index` of an Array. No-op on every other kind.
    ///
    /// On a parsed array, writes past the end are dropped; the array never grows.
    pub fn set_index(&self, index: usize, val: impl Into<Literal>) {
        if self.kind() != Kind::Array {
            tracing::trace!(kind = %self.kind(), index, "Ignoring set_index on non-array");
            return;
        }
        let val = Value::new(val);

        let mut node = self.node.borrow_mut();
        let node = &mut *node;
        match &mut node.state {
            State::Parsed {
                structure: Structure::Array(elements),
                ..
            } => {
                let len = elements.len();
                let Some(slot) = elements.get_mut(index) else {
                    tracing::debug!(index, len, "Dropping write past end of array");
                    return;
                };
                tracing::debug!(index, "Writing element into parsed array");
                *slot = val;
                if let Some(overlay) = &mut node.overlay {
                    overlay.remove(&index.to_string());
                }
            }
            _ => {
                tracing::debug!(index, "Recording element in overlay");
                node.overlay
                    .get_or_insert_with(Overlay::new)
                    .insert(index.to_string(), val);
            }
        }
    }
}
