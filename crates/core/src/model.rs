use core::fmt;

/// Kind tag of a provider node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Document,
    Element,
    Attribute,
    Text,
    Comment,
    ProcessingInstruction,
}

/// Possibly namespace-qualified name of an element or attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName {
    pub local: String,
    pub ns_uri: Option<String>,
}

impl QName {
    pub fn local(local: impl Into<String>) -> Self {
        Self { local: local.into(), ns_uri: None }
    }

    pub fn qualified(ns_uri: impl Into<String>, local: impl Into<String>) -> Self {
        Self { local: local.into(), ns_uri: Some(ns_uri.into()) }
    }
}

impl fmt::Display for QName {
    /// Clark notation: `{uri}local` for qualified names, bare `local`
    /// otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.ns_uri {
            Some(uri) => write!(f, "{{{uri}}}{}", self.local),
            None => f.write_str(&self.local),
        }
    }
}

/// An ordered, length-known, randomly indexable collection of nodes.
///
/// Child lists and attribute maps both come through this interface. Attribute
/// maps may carry non-attribute entries; callers filter by [`NodeKind`].
/// The collection must stay stable for the duration of a single traversal;
/// concurrent mutation during traversal is undefined behavior and is not
/// guarded against.
pub trait NodeList {
    type Node;

    fn len(&self) -> usize;

    /// Entry at `index`, or `None` once `index >= len()`.
    fn item(&self, index: usize) -> Option<Self::Node>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read-only view of a single node in the provider's tree.
pub trait XmlNode: Clone + PartialEq + fmt::Debug {
    type List: NodeList<Node = Self>;

    fn kind(&self) -> NodeKind;

    /// Tag name for elements, attribute name for attributes, `None` for
    /// unnamed kinds.
    fn name(&self) -> Option<QName>;

    /// Raw text of attribute and text-like nodes, `None` otherwise.
    fn value(&self) -> Option<String>;

    fn children(&self) -> Self::List;

    fn attributes(&self) -> Self::List;

    /// Attribute with the given unqualified name. Absence is a first-class
    /// outcome, never an error. The default implementation scans
    /// [`attributes`](Self::attributes) and matches only unqualified entries.
    fn attribute(&self, name: &str) -> Option<Self> {
        let attrs = self.attributes();
        (0..attrs.len()).filter_map(|i| attrs.item(i)).find(|a| {
            a.kind() == NodeKind::Attribute
                && a.name().is_some_and(|q| q.ns_uri.is_none() && q.local == name)
        })
    }

    /// Namespace-qualified attribute lookup. On a tree built without
    /// namespace awareness the result is provider-defined; the default
    /// implementation only matches attributes whose name carries exactly the
    /// given URI.
    fn attribute_ns(&self, ns_uri: &str, local: &str) -> Option<Self> {
        let attrs = self.attributes();
        (0..attrs.len()).filter_map(|i| attrs.item(i)).find(|a| {
            a.kind() == NodeKind::Attribute
                && a.name()
                    .is_some_and(|q| q.ns_uri.as_deref() == Some(ns_uri) && q.local == local)
        })
    }
}

/// Read-only view of a whole document.
pub trait XmlDocument {
    type Node: XmlNode;

    /// Wildcard selection of every element in the tree, in document order
    /// (pre-order: an element precedes its descendants, siblings appear
    /// left-to-right).
    fn all_elements(&self) -> <Self::Node as XmlNode>::List;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // Minimal vector-backed node, just enough to exercise the default
    // attribute lookups.
    #[derive(Debug, Clone, PartialEq)]
    struct StubNode {
        kind: NodeKind,
        name: Option<QName>,
        attrs: Vec<StubNode>,
    }

    struct StubList(Vec<StubNode>);

    impl NodeList for StubList {
        type Node = StubNode;

        fn len(&self) -> usize {
            self.0.len()
        }

        fn item(&self, index: usize) -> Option<StubNode> {
            self.0.get(index).cloned()
        }
    }

    impl XmlNode for StubNode {
        type List = StubList;

        fn kind(&self) -> NodeKind {
            self.kind
        }

        fn name(&self) -> Option<QName> {
            self.name.clone()
        }

        fn value(&self) -> Option<String> {
            None
        }

        fn children(&self) -> StubList {
            StubList(Vec::new())
        }

        fn attributes(&self) -> StubList {
            StubList(self.attrs.clone())
        }
    }

    fn attr(name: QName) -> StubNode {
        StubNode { kind: NodeKind::Attribute, name: Some(name), attrs: Vec::new() }
    }

    fn element_with(attrs: Vec<StubNode>) -> StubNode {
        StubNode { kind: NodeKind::Element, name: Some(QName::local("e")), attrs }
    }

    #[rstest]
    fn unqualified_lookup_ignores_qualified_attributes() {
        let elem = element_with(vec![
            attr(QName::qualified("urn:x", "id")),
            attr(QName::local("id")),
        ]);
        let found = elem.attribute("id").unwrap();
        assert_eq!(found.name().unwrap(), QName::local("id"));
        assert!(elem.attribute("missing").is_none());
    }

    #[rstest]
    fn qualified_lookup_requires_matching_uri() {
        let elem = element_with(vec![attr(QName::qualified("urn:x", "id"))]);
        assert!(elem.attribute_ns("urn:x", "id").is_some());
        assert!(elem.attribute_ns("urn:y", "id").is_none());
        assert!(elem.attribute("id").is_none());
    }

    #[rstest]
    #[case(QName::local("a"), "a")]
    #[case(QName::qualified("urn:x", "a"), "{urn:x}a")]
    fn qname_display_uses_clark_notation(#[case] name: QName, #[case] expected: &str) {
        assert_eq!(name.to_string(), expected);
    }
}
