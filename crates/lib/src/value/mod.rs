//! The lazy value model.
//!
//! A [`Value`] is a cheap, cloneable handle to one JSON node. Nodes come from raw bytes,
//! which are validated and classified but not decoded, or from native literals. Children
//! are decoded one level at a time, only when something asks for them.
//!
//! # Resolution order
//!
//! Every read consults three layers, first match wins:
//!
//! 1. the overlay written by [`Value::set_path`] / [`Value::set_index`],
//! 2. the parsed structure, if the node has been decoded,
//! 3. the raw bytes, via the [`pointer`](crate::pointer) locator.
//!
//! # Sharing
//!
//! Cloning a `Value` clones the handle, not the node. Placing a value into another
//! value's structure or overlay shares it the same way, so a change made through one
//! parent is visible through every other parent holding the same node:
//!
//! ```
//! use lazyjson::{Literal, Value};
//!
//! let doc = Value::from_slice(br#"{"name":"marty"}"#);
//! let top = Value::new(Literal::object([("bucket", &doc)]));
//!
//! doc.set_path("name", "steve");
//! assert_eq!(top.path("bucket")?.path("name")?.value().unwrap(), "steve");
//! # Ok::<(), lazyjson::value::ValueError>(())
//! ```
//!
//! Values are single-threaded (`!Send`). Nothing here guards against reference cycles;
//! a value placed inside itself will recurse without bound when materialized.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use bytes::Bytes;

mod encode;
pub mod errors;
pub mod kind;
mod materialize;
mod metadata;
pub mod native;
mod navigate;
mod node;
mod overlay;

pub use errors::ValueError;
pub use kind::Kind;
pub use native::{Literal, Native};

use errors::invariant_violated;
use node::{Node, State, Structure};

/// A shared handle to a lazily decoded JSON node.
///
/// # Examples
///
/// ```
/// # use lazyjson::{Kind, Value};
/// let value = Value::from_slice(br#"{"name":"marty","address":{"street":"sutton oaks"}}"#);
/// assert_eq!(value.kind(), Kind::Object);
///
/// let street = value.path("address")?.path("street")?;
/// assert_eq!(street.value().unwrap(), "sutton oaks");
///
/// let missing = value.path("dne").unwrap_err();
/// assert_eq!(missing.to_string(), "dne is not defined");
/// # Ok::<(), lazyjson::value::ValueError>(())
/// ```
#[derive(Clone)]
pub struct Value {
    node: Rc<RefCell<Node>>,
}

impl Value {
    /// Builds a value from a native literal.
    ///
    /// Scalars are stored as already parsed. Containers wrap each element with this same
    /// rule, and any [`Literal::Value`] met along the way is adopted as-is. Passing an
    /// existing value returns that same handle.
    pub fn new(literal: impl Into<Literal>) -> Self {
        match literal.into() {
            Literal::Value(value) => value,
            Literal::Null => Self::from_node(Node::parsed(Kind::Null, Structure::Null)),
            Literal::Bool(b) => Self::from_node(Node::parsed(Kind::Boolean, Structure::Bool(b))),
            Literal::Number(n) => {
                if !n.is_finite() {
                    invariant_violated(format!("number {n} has no JSON encoding"));
                }
                Self::from_node(Node::parsed(Kind::Number, Structure::Number(n)))
            }
            Literal::String(s) => {
                Self::from_node(Node::parsed(Kind::String, Structure::String(s)))
            }
            Literal::Array(items) => Self::from_node(Node::parsed(
                Kind::Array,
                Structure::Array(items.into_iter().map(Value::new).collect()),
            )),
            Literal::Object(members) => Self::from_node(Node::parsed(
                Kind::Object,
                Structure::Object(
                    members
                        .into_iter()
                        .map(|(key, member)| (key, Value::new(member)))
                        .collect(),
                ),
            )),
        }
    }

    /// Builds a value over raw bytes, which need not be valid JSON.
    ///
    /// The bytes are validated and classified immediately and stored untouched.
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        let raw = bytes.into();
        let kind = kind::classify(&raw);
        Self::from_node(Node::raw(kind, raw))
    }

    /// Builds a value over a copy of `bytes`.
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self::from_bytes(Bytes::copy_from_slice(bytes))
    }

    /// Reads a whole document from `reader` and wraps it without decoding.
    pub fn from_reader(mut reader: impl std::io::Read) -> crate::Result<Self> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(Self::from_bytes(buf))
    }

    /// Wraps a sub-slice of bytes that were already validated as part of a parent.
    pub(crate) fn from_trusted(raw: Bytes) -> Self {
        let kind = kind::identify(&raw);
        Self::from_node(Node::raw(kind, raw))
    }

    fn from_node(node: Node) -> Self {
        Self {
            node: Rc::new(RefCell::new(node)),
        }
    }

    /// The kind decided at construction time.
    pub fn kind(&self) -> Kind {
        self.node.borrow().kind
    }

    /// Returns true if both handles point at the same node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }

    /// Returns true once the node has a decoded structure.
    pub fn is_parsed(&self) -> bool {
        self.node.borrow().is_parsed()
    }

    /// Returns true if any overlay entries are pending on this node.
    pub fn has_overlay(&self) -> bool {
        self.node.borrow().has_overlay()
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Ok(node) = self.node.try_borrow() else {
            return f.write_str("Value(<borrowed>)");
        };
        let mut out = f.debug_struct("Value");
        out.field("kind", &node.kind);
        match &node.state {
            State::Raw(raw) => out.field("raw", &String::from_utf8_lossy(raw)),
            State::Parsed { structure, .. } => match structure {
                Structure::Array(items) => out.field("items", items),
                Structure::Object(members) => out.field("members", members),
                scalar => out.field("parsed", &scalar.scalar()),
            },
        };
        if let Some(overlay) = &node.overlay {
            out.field("overlay", overlay);
        }
        out.finish()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.bytes()))
    }
}

impl From<Native> for Value {
    fn from(native: Native) -> Self {
        Value::new(native)
    }
}
