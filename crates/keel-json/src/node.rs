//! The recursive document tree.

use core::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::error::JsonError;

/// Shape tag for a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Null,
    Boolean,
    Integer,
    Float,
    Text,
    Array,
    Object,
}

impl NodeKind {
    /// Lowercase shape name, as used in diagnostics.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Text => "text",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A JSON document tree: object, array, or scalar.
///
/// Object keys are unique and kept in insertion order; the order is never
/// semantically significant. Trees are plain owned values; the editing
/// operations in [`crate::ops`] are persistent and return fresh trees.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    /// The null marker.
    #[default]
    Null,
    /// Boolean scalar.
    Boolean(bool),
    /// Integer scalar (i64).
    Integer(i64),
    /// Floating-point scalar (f64).
    Float(f64),
    /// Text scalar.
    Text(String),
    /// Ordered sequence of nodes.
    Array(Vec<Node>),
    /// Key-to-node mapping, insertion-ordered.
    Object(IndexMap<String, Node>),
}

impl Node {
    // ==================== Constructors ====================

    /// The null marker.
    pub const fn null() -> Self {
        Self::Null
    }

    /// A boolean scalar.
    pub const fn boolean(v: bool) -> Self {
        Self::Boolean(v)
    }

    /// An integer scalar.
    pub const fn integer(v: i64) -> Self {
        Self::Integer(v)
    }

    /// A float scalar.
    pub const fn float(v: f64) -> Self {
        Self::Float(v)
    }

    /// A text scalar.
    pub fn text(v: impl Into<String>) -> Self {
        Self::Text(v.into())
    }

    /// An array node.
    pub fn array(items: impl IntoIterator<Item = Node>) -> Self {
        Self::Array(items.into_iter().collect())
    }

    /// An empty array node.
    pub fn array_empty() -> Self {
        Self::Array(Vec::new())
    }

    /// An object node.
    pub fn object(entries: impl IntoIterator<Item = (String, Node)>) -> Self {
        Self::Object(entries.into_iter().collect())
    }

    /// An empty object node.
    pub fn object_empty() -> Self {
        Self::Object(IndexMap::new())
    }

    // ==================== Type queries ====================

    /// The shape of this node.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Null => NodeKind::Null,
            Self::Boolean(_) => NodeKind::Boolean,
            Self::Integer(_) => NodeKind::Integer,
            Self::Float(_) => NodeKind::Float,
            Self::Text(_) => NodeKind::Text,
            Self::Array(_) => NodeKind::Array,
            Self::Object(_) => NodeKind::Object,
        }
    }

    /// `true` for the null marker.
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// `true` for an array node.
    #[inline]
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// `true` for an object node.
    #[inline]
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// `true` for any non-container, non-null scalar.
    #[inline]
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::Boolean(_) | Self::Integer(_) | Self::Float(_) | Self::Text(_)
        )
    }

    // ==================== Accessors ====================

    /// The boolean value, if this is a boolean scalar.
    #[inline]
    #[must_use]
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer value, if this is an integer scalar.
    #[inline]
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// The float value, if this is a float scalar.
    #[inline]
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// The text value, if this is a text scalar.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t),
            _ => None,
        }
    }

    /// The element list, if this is an array.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&[Node]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The entry map, if this is an object.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&IndexMap<String, Node>> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Child by object key; `None` for non-objects and missing keys.
    #[must_use]
    pub fn get_key(&self, key: &str) -> Option<&Node> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// Child by array index; `None` for non-arrays and out-of-bounds.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Node> {
        self.as_array().and_then(|items| items.get(index))
    }

    /// Text rendering of a non-null scalar; `None` otherwise.
    #[must_use]
    pub fn scalar_text(&self) -> Option<String> {
        match self {
            Self::Boolean(b) => Some(b.to_string()),
            Self::Integer(i) => Some(i.to_string()),
            Self::Float(f) => Some(f.to_string()),
            Self::Text(t) => Some(t.clone()),
            Self::Null | Self::Array(_) | Self::Object(_) => None,
        }
    }

    // ==================== JSON interchange ====================

    /// Convert to the serde_json interchange value.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Boolean(b) => serde_json::Value::Bool(*b),
            Self::Integer(i) => serde_json::Value::Number((*i).into()),
            // Non-finite floats have no JSON representation; they collapse
            // to null, matching serde_json's own policy.
            Self::Float(f) => serde_json::Number::from_f64(*f)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Self::Text(t) => serde_json::Value::String(t.clone()),
            Self::Array(items) => {
                serde_json::Value::Array(items.iter().map(Node::to_json).collect())
            }
            Self::Object(map) => {
                let mut out = serde_json::Map::with_capacity(map.len());
                out.extend(map.iter().map(|(k, v)| (k.clone(), v.to_json())));
                serde_json::Value::Object(out)
            }
        }
    }
}

// ==================== From implementations ====================

impl From<serde_json::Value> for Node {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map_or_else(|| Self::Float(n.as_f64().unwrap_or(f64::NAN)), Self::Integer),
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Node::from).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Node::from(v))).collect())
            }
        }
    }
}

impl From<bool> for Node {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i64> for Node {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for Node {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<f64> for Node {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for Node {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Node {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl<T: Into<Node>> From<Vec<T>> for Node {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

// ==================== Serde ====================

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Boolean(b) => serializer.serialize_bool(*b),
            Self::Integer(i) => serializer.serialize_i64(*i),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::Text(t) => serializer.serialize_str(t),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Node::from)
    }
}

// ==================== Display / FromStr ====================

impl fmt::Display for Node {
    /// Compact JSON rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl FromStr for Node {
    type Err = JsonError;

    /// Parse a tree through the active backend.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::engine::parse(s).into_result()
    }
}
