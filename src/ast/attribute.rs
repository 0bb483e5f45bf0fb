//! # Node Attributes
//!
//! Every node type declares a closed attribute schema: a fixed list of
//! attribute names and the [`AttributeKind`] each one holds. Built-in node
//! types store their attributes as typed fields, and the generic accessors on
//! [`Node`](super::Node) translate to and from [`AttributeValue`] against the
//! schema. Custom node types keep a runtime map checked the same way.

use std::{collections::BTreeMap, fmt};

use strum_macros::{AsRefStr, Display, EnumString};

/// Value kinds an attribute schema can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum AttributeKind {
    Integer,
    String,
    Boolean,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Integer(i64),
    String(String),
    Boolean(bool),
}

impl AttributeValue {
    pub fn kind(&self) -> AttributeKind {
        match self {
            AttributeValue::Integer(_) => AttributeKind::Integer,
            AttributeValue::String(_) => AttributeKind::String,
            AttributeValue::Boolean(_) => AttributeKind::Boolean,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            AttributeValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Boolean(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Integer(value) => write!(f, "{value}"),
            AttributeValue::String(value) => f.write_str(value),
            AttributeValue::Boolean(value) => write!(f, "{value}"),
        }
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Integer(value)
    }
}

impl From<u32> for AttributeValue {
    fn from(value: u32) -> Self {
        AttributeValue::Integer(i64::from(value))
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Boolean(value)
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::String(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_string())
    }
}

/// One entry of a node type's attribute schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSpec {
    pub name: &'static str,
    pub kind: AttributeKind,
}

impl AttributeSpec {
    pub const fn new(name: &'static str, kind: AttributeKind) -> Self {
        Self { name, kind }
    }
}

/// Attribute storage for custom nodes, ordered by name.
pub type Attributes = BTreeMap<String, AttributeValue>;

pub const EMPTY_SCHEMA: &[AttributeSpec] = &[];

pub const HEADING_SCHEMA: &[AttributeSpec] =
    &[AttributeSpec::new("level", AttributeKind::Integer)];

pub const TEXT_SCHEMA: &[AttributeSpec] = &[AttributeSpec::new("content", AttributeKind::String)];

/// Looks up `name` in `schema`.
pub fn lookup(schema: &[AttributeSpec], name: &str) -> Option<AttributeSpec> {
    schema.iter().copied().find(|spec| spec.name == name)
}
