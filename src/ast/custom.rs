//! Caller-defined node types.
//!
//! The built-in node types are a closed set with typed fields. Extensions that
//! bring their own syntax also bring their own node type by implementing
//! [`NodeSpec`]: a type name, an attribute schema and a render function. A
//! [`CustomNode`] stores its attributes in a runtime map that is checked
//! against that schema on every write.

use std::{fmt, sync::Arc};

use super::{
    attribute::{lookup, AttributeSpec, AttributeValue, Attributes},
    NodeError, NodeResult,
};

/// Describes a caller-defined node type.
pub trait NodeSpec: fmt::Debug + Send + Sync {
    /// Type name reported by [`Node::node_type`](super::Node::node_type).
    fn node_type(&self) -> &'static str;

    fn schema(&self) -> &[AttributeSpec];

    /// Renders the node given its attributes and its already rendered children.
    fn render(&self, attributes: &Attributes, children_html: &str) -> String;
}

#[derive(Debug, Clone)]
pub struct CustomNode {
    spec: Arc<dyn NodeSpec>,
    attributes: Attributes,
}

impl CustomNode {
    pub fn new(spec: Arc<dyn NodeSpec>) -> Self {
        Self {
            spec,
            attributes: Attributes::new(),
        }
    }

    pub fn spec(&self) -> &Arc<dyn NodeSpec> {
        &self.spec
    }

    pub fn node_type(&self) -> &'static str {
        self.spec.node_type()
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    pub fn set(&mut self, name: &str, value: AttributeValue) -> NodeResult<()> {
        let spec = lookup(self.spec.schema(), name).ok_or_else(|| {
            NodeError::schema_violation(self.node_type(), name, "attribute is not in the schema")
        })?;
        if spec.kind != value.kind() {
            return Err(NodeError::schema_violation(
                self.node_type(),
                name,
                format!("expected {}, got {}", spec.kind, value.kind()),
            ));
        }
        self.attributes.insert(name.to_string(), value);
        Ok(())
    }

    pub(crate) fn render(&self, children_html: &str) -> String {
        self.spec.render(&self.attributes, children_html)
    }
}

impl PartialEq for CustomNode {
    fn eq(&self, other: &Self) -> bool {
        self.node_type() == other.node_type() && self.attributes == other.attributes
    }
}
