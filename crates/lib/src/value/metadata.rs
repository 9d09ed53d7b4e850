//! Side-channel annotations attached to a value.
//!
//! Metadata lives in its own Object value. It is never consulted by navigation,
//! overlays or encoding of the value it annotates.

use std::collections::BTreeMap;

use super::{Literal, Value};

impl Value {
    /// Sets `key` on this value's metadata object, creating it on first use.
    ///
    /// ```
    /// # use lazyjson::Value;
    /// let doc = Value::from_slice(br#"{"name":"marty"}"#);
    /// doc.add_metadata("id", "doc1");
    ///
    /// let id = doc.metadata().unwrap().path("id")?;
    /// assert_eq!(id.value().unwrap(), "doc1");
    /// # Ok::<(), lazyjson::value::ValueError>(())
    /// ```
    pub fn add_metadata(&self, key: &str, val: impl Into<Literal>) {
        let metadata = self
            .node
            .borrow_mut()
            .metadata
            .get_or_insert_with(|| Value::new(Literal::Object(BTreeMap::new())))
            .clone();
        metadata.set_path(key, val);
    }

    /// The metadata object, or `None` if nothing was ever added.
    pub fn metadata(&self) -> Option<Value> {
        self.node.borrow().metadata.clone()
    }
}
