//! Child lookup by key or index.

use super::node::{State, Structure};
use super::{Value, ValueError};
use crate::pointer;

impl Value {
    /// Resolves the member `name`.
    ///
    /// Looks in the overlay, then the parsed structure, then the raw bytes. On a parsed
    /// array, `name` is read as a decimal index. Children found in raw bytes are new
    /// bytes-backed values over a slice of this node's buffer.
    ///
    /// # Errors
    /// [`ValueError::Undefined`] carrying `name` if nothing matches, or
    /// [`ValueError::Locate`] if the locator fails on the raw bytes.
    pub fn path(&self, name: &str) -> Result<Value, ValueError> {
        let node = self.node.borrow();
        if let Some(found) = node.overlay.as_ref().and_then(|overlay| overlay.get(name)) {
            return Ok(found.clone());
        }

        match &node.state {
            State::Parsed {
                structure: Structure::Object(members),
                ..
            } => {
                if let Some(found) = members.get(name) {
                    return Ok(found.clone());
                }
            }
            State::Parsed {
                structure: Structure::Array(elements),
                ..
            } => {
                if let Some(found) = pointer::parse_index(name).and_then(|i| elements.get(i)) {
                    return Ok(found.clone());
                }
            }
            State::Raw(raw) if node.kind.is_json() => {
                if let Some(sub) = pointer::find(raw, &pointer::for_key(name))? {
                    return Ok(Value::from_trusted(sub));
                }
            }
            _ => {}
        }

        Err(ValueError::undefined(name))
    }

    /// Resolves the element at `index`.
    ///
    /// Same resolution order as [`Value::path`]. An index past the end is reported the
    /// same way as a missing key.
    ///
    /// # Errors
    /// [`ValueError::Undefined`] with no path if nothing matches, or
    /// [`ValueError::Locate`] if the locator fails on the raw bytes.
    pub fn index(&self, index: usize) -> Result<Value, ValueError> {
        let node = self.node.borrow();
        if let Some(found) = node
            .overlay
            .as_ref()
            .and_then(|overlay| overlay.get(&index.to_string()))
        {
            return Ok(found.clone());
        }

        match &node.state {
            State::Parsed {
                structure: Structure::Array(elements),
                ..
            } => {
                return elements
                    .get(index)
                    .cloned()
                    .ok_or_else(ValueError::undefined_unnamed);
            }
            State::Parsed {
                structure: Structure::Object(members),
                ..
            } => {
                // Same key the locator would match on the raw bytes
                if let Some(found) = members.get(&index.to_string()) {
                    return Ok(found.clone());
                }
            }
            State::Raw(raw) if node.kind.is_json() => {
                if let Some(sub) = pointer::find(raw, &pointer::for_index(index))? {
                    return Ok(Value::from_trusted(sub));
                }
            }
            _ => {}
        }

        Err(ValueError::undefined_unnamed())
    }
}
