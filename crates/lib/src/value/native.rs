//! Native representations that enter and leave the lazy value model.
//!
//! [`Native`] is what materialization produces: a plain, fully owned JSON tree in which
//! every number is an `f64`. [`Literal`] is what construction consumes: the same shapes,
//! plus [`Literal::Value`] for adopting an existing [`Value`] by reference.
//!
//! Both are closed types, so there is no way to hand construction an unsupported shape.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Serialize, Serializer};

use super::{Kind, Value};

/// A plain JSON value produced by [`Value::value`].
///
/// # Direct Comparisons
///
/// `Native` implements `PartialEq` with primitive types:
///
/// ```
/// # use lazyjson::Native;
/// assert!(Native::String("marty".into()) == "marty");
/// assert!(Native::Number(3.0) == 3.0);
/// assert!(Native::Bool(true) == true);
/// assert!(!(Native::Null == "null"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Native {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Native>),
    Object(BTreeMap<String, Native>),
}

impl Native {
    /// Returns the [`Kind`] this native value would classify as
    pub fn kind(&self) -> Kind {
        match self {
            Native::Null => Kind::Null,
            Native::Bool(_) => Kind::Boolean,
            Native::Number(_) => Kind::Number,
            Native::String(_) => Kind::String,
            Native::Array(_) => Kind::Array,
            Native::Object(_) => Kind::Object,
        }
    }

    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Native::Null)
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Native::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to a number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Native::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Native::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to view as an array
    pub fn as_array(&self) -> Option<&[Native]> {
        match self {
            Native::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Attempts to view as an object
    pub fn as_object(&self) -> Option<&BTreeMap<String, Native>> {
        match self {
            Native::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Looks up a member of an object
    pub fn get(&self, key: &str) -> Option<&Native> {
        self.as_object()?.get(key)
    }

    /// Renders compact JSON text.
    pub fn to_json_string(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Renders indented JSON text.
    pub fn to_json_string_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Native {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

/// Integral numbers up to 2^53 in magnitude are exactly representable.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

fn is_negative_zero(n: f64) -> bool {
    n == 0.0 && n.is_sign_negative()
}

impl Serialize for Native {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Native::Null => serializer.serialize_unit(),
            Native::Bool(b) => serializer.serialize_bool(*b),
            // Whole numbers are written without a fractional part
            Native::Number(n)
                if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER && !is_negative_zero(*n) =>
            {
                serializer.serialize_i64(*n as i64)
            }
            Native::Number(n) => serializer.serialize_f64(*n),
            Native::String(s) => serializer.serialize_str(s),
            Native::Array(items) => serializer.collect_seq(items),
            Native::Object(members) => serializer.collect_map(members),
        }
    }
}

impl<'de> Deserialize<'de> for Native {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NativeVisitor)
    }
}

/// Decodes any JSON value, widening every number to `f64`.
struct NativeVisitor;

impl<'de> Visitor<'de> for NativeVisitor {
    type Value = Native;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "any JSON value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Native, E> {
        Ok(Native::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Native, E> {
        Ok(Native::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Native, E> {
        Ok(Native::Number(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Native, E> {
        Ok(Native::Number(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Native, E> {
        Ok(Native::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Native, E> {
        Ok(Native::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Native, E> {
        Ok(Native::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Native, E> {
        Ok(Native::Null)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Native, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Native::Array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Native, A::Error> {
        let mut members = BTreeMap::new();
        while let Some((key, value)) = map.next_entry::<String, Native>()? {
            members.insert(key, value);
        }
        Ok(Native::Object(members))
    }
}

// PartialEq implementations for comparing Native with primitives
impl PartialEq<str> for Native {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Native {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<f64> for Native {
    fn eq(&self, other: &f64) -> bool {
        self.as_f64() == Some(*other)
    }
}

impl PartialEq<bool> for Native {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

/// Input accepted by [`Value::new`] and the overlay writers.
///
/// Containers may mix plain literals with existing [`Value`]s; the latter are adopted by
/// reference rather than copied, so later changes to them show through every parent.
///
/// ```
/// # use lazyjson::{Literal, Value};
/// let street = Value::new("sutton oaks");
/// let address = Value::new(Literal::object([("street", Literal::from(&street))]));
/// assert_eq!(address.path("street")?.value().unwrap(), "sutton oaks");
/// # Ok::<(), lazyjson::value::ValueError>(())
/// ```
#[derive(Debug, Clone)]
pub enum Literal {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Literal>),
    Object(BTreeMap<String, Literal>),
    /// An existing value, adopted without copying
    Value(Value),
}

impl Literal {
    /// Builds an object literal from key/value pairs.
    pub fn object<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Literal>,
    {
        Literal::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Builds an array literal from items.
    pub fn array<V: Into<Literal>>(items: impl IntoIterator<Item = V>) -> Self {
        Literal::Array(items.into_iter().map(Into::into).collect())
    }
}

// Convenient From implementations for common types
impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Bool(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Number(value)
    }
}

impl From<f32> for Literal {
    fn from(value: f32) -> Self {
        Literal::Number(value as f64)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Number(value as f64)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Number(value as f64)
    }
}

impl From<u64> for Literal {
    fn from(value: u64) -> Self {
        Literal::Number(value as f64)
    }
}

impl From<u32> for Literal {
    fn from(value: u32) -> Self {
        Literal::Number(value as f64)
    }
}

impl From<usize> for Literal {
    fn from(value: usize) -> Self {
        Literal::Number(value as f64)
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.to_string())
    }
}

impl From<()> for Literal {
    fn from(_: ()) -> Self {
        Literal::Null
    }
}

impl<T: Into<Literal>> From<Option<T>> for Literal {
    fn from(value: Option<T>) -> Self {
        value.map_or(Literal::Null, Into::into)
    }
}

impl<T: Into<Literal>> From<Vec<T>> for Literal {
    fn from(value: Vec<T>) -> Self {
        Literal::array(value)
    }
}

impl<T: Into<Literal>> From<BTreeMap<String, T>> for Literal {
    fn from(value: BTreeMap<String, T>) -> Self {
        Literal::object(value)
    }
}

impl<T: Into<Literal>> From<HashMap<String, T>> for Literal {
    fn from(value: HashMap<String, T>) -> Self {
        Literal::object(value)
    }
}

impl From<Value> for Literal {
    fn from(value: Value) -> Self {
        Literal::Value(value)
    }
}

impl From<&Value> for Literal {
    fn from(value: &Value) -> Self {
        Literal::Value(value.clone())
    }
}

impl From<Native> for Literal {
    fn from(value: Native) -> Self {
        match value {
            Native::Null => Literal::Null,
            Native::Bool(b) => Literal::Bool(b),
            Native::Number(n) => Literal::Number(n),
            Native::String(s) => Literal::String(s),
            Native::Array(items) => Literal::array(items),
            Native::Object(members) => Literal::object(members),
        }
    }
}
