//! Simple in-memory provider implementing the `xmlq-core` traits, used by
//! tests, doctests and quick prototypes.
//!
//! Trees are built top-down with the builder and are immutable afterwards,
//! matching the read-only discipline the query layer assumes.
//!
//! ```
//! use xmlq_query::simple_node::{attr, elem, text};
//! use xmlq_query::{NodeList, XmlNode};
//!
//! // <root id="r"><child>Hello</child><child world="yes"/></root>
//! let root = elem("root")
//!     .attr(attr("id", "r"))
//!     .child(elem("child").child(text("Hello")))
//!     .child(elem("child").attr(attr("world", "yes")))
//!     .build();
//!
//! assert_eq!(root.name().unwrap().local, "root");
//! assert_eq!(root.children().len(), 2);
//! assert_eq!(root.attribute("id").unwrap().value().as_deref(), Some("r"));
//! ```

use std::fmt;
use std::sync::Arc;

use xmlq_core::{NodeKind, NodeList, QName, XmlDocument, XmlNode};

#[derive(Debug)]
struct Inner {
    kind: NodeKind,
    name: Option<QName>,
    value: Option<String>,
    attributes: Vec<SimpleNode>,
    children: Vec<SimpleNode>,
}

/// An Arc-backed node; clones are views of the same underlying node and
/// compare by identity.
#[derive(Clone)]
pub struct SimpleNode(Arc<Inner>);

impl PartialEq for SimpleNode {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for SimpleNode {}

impl fmt::Debug for SimpleNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleNode")
            .field("kind", &self.0.kind)
            .field("name", &self.0.name)
            .field("value", &self.0.value)
            .finish()
    }
}

impl SimpleNode {
    fn new(kind: NodeKind, name: Option<QName>, value: Option<String>) -> Self {
        SimpleNode(Arc::new(Inner {
            kind,
            name,
            value,
            attributes: Vec::new(),
            children: Vec::new(),
        }))
    }
}

/// Vector-backed [`NodeList`]. Public so tests can assemble mixed
/// collections (attributes interleaved with other entry kinds) directly.
pub struct SimpleNodeList {
    nodes: Vec<SimpleNode>,
}

impl SimpleNodeList {
    pub fn new(nodes: Vec<SimpleNode>) -> Self {
        Self { nodes }
    }
}

impl NodeList for SimpleNodeList {
    type Node = SimpleNode;

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn item(&self, index: usize) -> Option<SimpleNode> {
        self.nodes.get(index).cloned()
    }
}

impl XmlNode for SimpleNode {
    type List = SimpleNodeList;

    fn kind(&self) -> NodeKind {
        self.0.kind
    }

    fn name(&self) -> Option<QName> {
        self.0.name.clone()
    }

    fn value(&self) -> Option<String> {
        self.0.value.clone()
    }

    fn children(&self) -> SimpleNodeList {
        SimpleNodeList::new(self.0.children.clone())
    }

    fn attributes(&self) -> SimpleNodeList {
        SimpleNodeList::new(self.0.attributes.clone())
    }
}

impl XmlDocument for SimpleNode {
    type Node = SimpleNode;

    /// Pre-order walk over the subtree rooted here, elements only.
    fn all_elements(&self) -> SimpleNodeList {
        fn walk(node: &SimpleNode, out: &mut Vec<SimpleNode>) {
            if node.kind() == NodeKind::Element {
                out.push(node.clone());
            }
            for child in &node.0.children {
                walk(child, out);
            }
        }
        let mut out = Vec::new();
        walk(self, &mut out);
        SimpleNodeList::new(out)
    }
}

pub struct SimpleNodeBuilder {
    kind: NodeKind,
    name: Option<QName>,
    value: Option<String>,
    attributes: Vec<SimpleNode>,
    children: Vec<SimpleNode>,
}

impl SimpleNodeBuilder {
    fn new(kind: NodeKind, name: Option<QName>) -> Self {
        Self { kind, name, value: None, attributes: Vec::new(), children: Vec::new() }
    }

    pub fn attr(mut self, attr: SimpleNode) -> Self {
        debug_assert!(attr.kind() == NodeKind::Attribute);
        self.attributes.push(attr);
        self
    }

    pub fn child(mut self, child: impl Into<SimpleNodeOrBuilder>) -> Self {
        self.children.push(match child.into() {
            SimpleNodeOrBuilder::Built(node) => node,
            SimpleNodeOrBuilder::Builder(builder) => builder.build(),
        });
        self
    }

    pub fn build(self) -> SimpleNode {
        SimpleNode(Arc::new(Inner {
            kind: self.kind,
            name: self.name,
            value: self.value,
            attributes: self.attributes,
            children: self.children,
        }))
    }
}

pub enum SimpleNodeOrBuilder {
    Built(SimpleNode),
    Builder(SimpleNodeBuilder),
}

impl From<SimpleNode> for SimpleNodeOrBuilder {
    fn from(node: SimpleNode) -> Self {
        SimpleNodeOrBuilder::Built(node)
    }
}

impl From<SimpleNodeBuilder> for SimpleNodeOrBuilder {
    fn from(builder: SimpleNodeBuilder) -> Self {
        SimpleNodeOrBuilder::Builder(builder)
    }
}

/// Document node builder; its element children form the tree roots.
pub fn doc() -> SimpleNodeBuilder {
    SimpleNodeBuilder::new(NodeKind::Document, None)
}

pub fn elem(name: &str) -> SimpleNodeBuilder {
    SimpleNodeBuilder::new(NodeKind::Element, Some(QName::local(name)))
}

pub fn attr(name: &str, value: &str) -> SimpleNode {
    SimpleNode::new(NodeKind::Attribute, Some(QName::local(name)), Some(value.to_owned()))
}

/// Namespace-qualified attribute; unqualified lookups will not see it.
pub fn attr_ns(ns_uri: &str, local: &str, value: &str) -> SimpleNode {
    SimpleNode::new(
        NodeKind::Attribute,
        Some(QName::qualified(ns_uri, local)),
        Some(value.to_owned()),
    )
}

pub fn text(value: &str) -> SimpleNode {
    SimpleNode::new(NodeKind::Text, None, Some(value.to_owned()))
}

pub fn comment(value: &str) -> SimpleNode {
    SimpleNode::new(NodeKind::Comment, None, Some(value.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn clones_compare_by_identity() {
        let a = elem("a").build();
        let b = elem("a").build();
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[rstest]
    fn namespace_qualified_attributes_are_invisible_to_unqualified_lookup() {
        let e = elem("e").attr(attr_ns("urn:demo", "id", "7")).build();
        assert!(e.attribute("id").is_none());
        let found = e.attribute_ns("urn:demo", "id").unwrap();
        assert_eq!(found.value().as_deref(), Some("7"));
    }

    #[rstest]
    fn document_enumeration_is_preorder() {
        let document = doc()
            .child(
                elem("root")
                    .child(elem("a").child(elem("b")))
                    .child(elem("c")),
            )
            .build();
        let order: Vec<_> = (0..document.all_elements().len())
            .filter_map(|i| document.all_elements().item(i))
            .map(|e| e.name().unwrap().local)
            .collect();
        assert_eq!(order, ["root", "a", "b", "c"]);
    }
}
