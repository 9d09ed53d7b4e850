//! Dotted paths for multi-level navigation.
//!
//! A dotted path such as `address.street` or `contacts.0.name` is a sequence of
//! single-level steps. Each step on an Array kind that reads as a decimal index becomes
//! [`Value::index`]; every other step becomes [`Value::path`].
//!
//! # Usage
//!
//! ```rust
//! use lazyjson::Value;
//!
//! let doc = Value::from_slice(br#"{"contacts":[{"name":"marty"}]}"#);
//! assert_eq!(doc.lookup("contacts.0.name")?.value().unwrap(), "marty");
//!
//! doc.assign("contacts.0.name", "gerald")?;
//! assert_eq!(doc.lookup("contacts.0.name")?.value().unwrap(), "gerald");
//! # Ok::<(), lazyjson::value::ValueError>(())
//! ```

use crate::pointer::parse_index;
use crate::value::{Kind, Literal, Value, ValueError};

/// Normalizes a path string by cleaning up dots and empty components.
///
/// - Empty string "" → empty string (refers to the value itself)
/// - Leading dots ".user" → "user"
/// - Trailing dots "user." → "user"
/// - Consecutive dots "user..profile" → "user.profile"
///
/// # Examples
///
/// ```rust
/// # use lazyjson::path::normalize_path;
/// assert_eq!(normalize_path(""), "");
/// assert_eq!(normalize_path(".user"), "user");
/// assert_eq!(normalize_path("user."), "user");
/// assert_eq!(normalize_path("user..profile"), "user.profile");
/// assert_eq!(normalize_path("..."), "");
/// ```
pub fn normalize_path(input: &str) -> String {
    components(input).collect::<Vec<_>>().join(".")
}

/// Iterates the non-empty components of a dotted path.
pub fn components(path: &str) -> impl Iterator<Item = &str> {
    path.split('.').filter(|component| !component.is_empty())
}

impl Value {
    /// Follows a dotted path from this value.
    ///
    /// An empty path returns this same value.
    ///
    /// # Errors
    /// The first failing step's error, unchanged.
    pub fn lookup(&self, path: &str) -> Result<Value, ValueError> {
        let mut current = self.clone();
        for component in components(path) {
            current = current.step(component)?;
        }
        Ok(current)
    }

    /// Writes `val` at a dotted path as an overlay.
    ///
    /// Every intermediate value is re-attached to its parent by reference, so the write
    /// stays reachable from this value even when the parent has not been parsed yet.
    /// An empty path writes nothing.
    ///
    /// # Errors
    /// The error of the first intermediate step that cannot be resolved.
    pub fn assign(&self, path: &str, val: impl Into<Literal>) -> Result<(), ValueError> {
        let steps: Vec<&str> = components(path).collect();
        let Some((last, parents)) = steps.split_last() else {
            return Ok(());
        };

        let mut current = self.clone();
        for component in parents {
            let child = current.step(component)?;
            current.put(component, &child);
            current = child;
        }
        current.put(last, val);
        Ok(())
    }

    fn step(&self, component: &str) -> Result<Value, ValueError> {
        match parse_index(component) {
            Some(index) if self.kind() == Kind::Array => self.index(index),
            _ => self.path(component),
        }
    }

    fn put(&self, component: &str, val: impl Into<Literal>) {
        match self.kind() {
            Kind::Array => {
                if let Some(index) = parse_index(component) {
                    self.set_index(index, val);
                }
            }
            _ => self.set_path(component, val),
        }
    }
}
