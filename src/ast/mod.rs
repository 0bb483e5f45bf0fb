//! # Markup Abstract Syntax Tree
//!
//! The AST produced by the [`Parser`](crate::analyzer::Parser). Every tree is
//! rooted at a [`NodeType::Document`] node that owns the top-level constructs
//! in source order.
//!
//! ## Node Model
//!
//! A [`Node`] is a [`NodeKind`] plus an ordered list of owned children. The
//! kind carries the node's attributes as typed fields:
//!
//! | Type        | Attributes          | HTML                                   |
//! |-------------|---------------------|----------------------------------------|
//! | `document`  | none                | children only                          |
//! | `heading`   | `level: integer`    | `<h{level}>…</h{level}>\n`             |
//! | `bold`      | none                | `<strong>…</strong>`                   |
//! | `list`      | none                | `<ul>\n…</ul>\n`                       |
//! | `list_item` | none                | `<li>…</li>\n`                         |
//! | `text`      | `content: string`   | escaped content                        |
//!
//! The generic [`Node::attribute`] and [`Node::set_attribute`] accessors work
//! against each type's schema; writing an attribute the schema does not declare,
//! or a value of the wrong kind, fails with [`NodeError::SchemaViolation`].
//!
//! Extensions add node types through [`custom::NodeSpec`].

pub mod attribute;
pub mod custom;
pub mod html;

use std::sync::Arc;

use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;

pub use attribute::{AttributeKind, AttributeSpec, AttributeValue, Attributes};
pub use custom::{CustomNode, NodeSpec};
pub use html::escape_html;

use attribute::{lookup, EMPTY_SCHEMA, HEADING_SCHEMA, TEXT_SCHEMA};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NodeError {
    #[error("Schema violation on {node_type} attribute '{attribute}': {reason}")]
    SchemaViolation {
        node_type: String,
        attribute: String,
        reason: String,
    },
    #[error("A {child} node cannot be a child of {parent}")]
    InvalidChild { parent: String, child: String },
}

impl NodeError {
    pub fn schema_violation(
        node_type: &str,
        attribute: &str,
        reason: impl Into<String>,
    ) -> Self {
        NodeError::SchemaViolation {
            node_type: node_type.to_string(),
            attribute: attribute.to_string(),
            reason: reason.into(),
        }
    }
}

pub type NodeResult<T> = Result<T, NodeError>;

/// Built-in node types.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum NodeType {
    Document,
    Heading,
    Bold,
    List,
    ListItem,
    Text,
}

impl NodeType {
    pub fn name(self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Document,
    Heading { level: u32 },
    Bold,
    List,
    ListItem,
    Text { content: String },
    Custom(CustomNode),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    children: Vec<Node>,
}

impl Node {
    /// Creates an empty node of a built-in type.
    ///
    /// Headings start at level 1 and text nodes with empty content.
    pub fn new(node_type: NodeType) -> Self {
        let kind = match node_type {
            NodeType::Document => NodeKind::Document,
            NodeType::Heading => NodeKind::Heading { level: 1 },
            NodeType::Bold => NodeKind::Bold,
            NodeType::List => NodeKind::List,
            NodeType::ListItem => NodeKind::ListItem,
            NodeType::Text => NodeKind::Text {
                content: String::new(),
            },
        };
        Self::from_kind(kind)
    }

    pub fn from_kind(kind: NodeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    pub fn document() -> Self {
        Self::from_kind(NodeKind::Document)
    }

    pub fn heading(level: u32) -> Self {
        Self::from_kind(NodeKind::Heading { level })
    }

    pub fn bold() -> Self {
        Self::from_kind(NodeKind::Bold)
    }

    pub fn list() -> Self {
        Self::from_kind(NodeKind::List)
    }

    pub fn list_item() -> Self {
        Self::from_kind(NodeKind::ListItem)
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::from_kind(NodeKind::Text {
            content: content.into(),
        })
    }

    pub fn custom(spec: Arc<dyn NodeSpec>) -> Self {
        Self::from_kind(NodeKind::Custom(CustomNode::new(spec)))
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// The built-in type of this node, or `None` for custom nodes.
    pub fn builtin_type(&self) -> Option<NodeType> {
        match &self.kind {
            NodeKind::Document => Some(NodeType::Document),
            NodeKind::Heading { .. } => Some(NodeType::Heading),
            NodeKind::Bold => Some(NodeType::Bold),
            NodeKind::List => Some(NodeType::List),
            NodeKind::ListItem => Some(NodeType::ListItem),
            NodeKind::Text { .. } => Some(NodeType::Text),
            NodeKind::Custom(_) => None,
        }
    }

    /// Type name, e.g. `"heading"` or `"list_item"`.
    pub fn node_type(&self) -> &str {
        match &self.kind {
            NodeKind::Custom(custom) => custom.node_type(),
            _ => self.builtin_type().map_or("", NodeType::name),
        }
    }

    pub fn is(&self, node_type: NodeType) -> bool {
        self.builtin_type() == Some(node_type)
    }

    pub fn schema(&self) -> &[AttributeSpec] {
        match &self.kind {
            NodeKind::Heading { .. } => HEADING_SCHEMA,
            NodeKind::Text { .. } => TEXT_SCHEMA,
            NodeKind::Custom(custom) => custom.spec().schema(),
            NodeKind::Document | NodeKind::Bold | NodeKind::List | NodeKind::ListItem => {
                EMPTY_SCHEMA
            }
        }
    }

    /// Reads an attribute; unknown or unset names yield `None`.
    pub fn attribute(&self, name: &str) -> Option<AttributeValue> {
        match (&self.kind, name) {
            (NodeKind::Heading { level }, "level") => Some(AttributeValue::from(*level)),
            (NodeKind::Text { content }, "content") => {
                Some(AttributeValue::String(content.clone()))
            }
            (NodeKind::Custom(custom), _) => custom.get(name).cloned(),
            _ => None,
        }
    }

    /// Writes an attribute after checking it against the node's schema.
    pub fn set_attribute(
        &mut self,
        name: &str,
        value: impl Into<AttributeValue>,
    ) -> NodeResult<()> {
        let value = value.into();
        if let NodeKind::Custom(custom) = &mut self.kind {
            return custom.set(name, value);
        }

        let node_type = self.node_type().to_string();
        let spec = lookup(self.schema(), name).ok_or_else(|| {
            NodeError::schema_violation(&node_type, name, "attribute is not in the schema")
        })?;
        if spec.kind != value.kind() {
            return Err(NodeError::schema_violation(
                &node_type,
                name,
                format!("expected {}, got {}", spec.kind, value.kind()),
            ));
        }

        match (&mut self.kind, value) {
            (NodeKind::Heading { level }, AttributeValue::Integer(value)) => {
                *level = u32::try_from(value).map_err(|_| {
                    NodeError::schema_violation(
                        &node_type,
                        name,
                        format!("{value} is not a valid heading level"),
                    )
                })?;
            }
            (NodeKind::Text { content }, AttributeValue::String(value)) => *content = value,
            _ => {
                return Err(NodeError::schema_violation(
                    &node_type,
                    name,
                    "attribute has no backing field",
                ))
            }
        }
        Ok(())
    }

    /// Appends a child. Document nodes are only ever roots.
    pub fn add_child(&mut self, child: Node) -> NodeResult<()> {
        if child.is(NodeType::Document) {
            return Err(NodeError::InvalidChild {
                parent: self.node_type().to_string(),
                child: child.node_type().to_string(),
            });
        }
        self.children.push(child);
        Ok(())
    }

    pub fn extend_children<I>(&mut self, children: I) -> NodeResult<()>
    where
        I: IntoIterator<Item = Node>,
    {
        for child in children {
            self.add_child(child)?;
        }
        Ok(())
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn into_children(self) -> Vec<Node> {
        self.children
    }

    /// Heading level, for heading nodes.
    pub fn level(&self) -> Option<u32> {
        match self.kind {
            NodeKind::Heading { level } => Some(level),
            _ => None,
        }
    }

    /// Text content, for text nodes.
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text { content } => Some(content),
            _ => None,
        }
    }
}
