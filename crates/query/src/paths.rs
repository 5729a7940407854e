//! Tag-path narrowing through nested children.

use tracing::debug;
use xmlq_core::{NodeKind, XmlNode};

use crate::streams::{Nodes, nodes};

/// Direct children of `elem` that are elements with the given tag name, in
/// sibling order. Qualified children match on their local name.
pub fn children_by_tag<N: XmlNode>(elem: &N, tag: impl Into<String>) -> ChildrenByTag<N> {
    ChildrenByTag { inner: nodes(elem.children()), tag: tag.into() }
}

/// Narrow `root` through the tag path `[t1, t2, …, tn]`: seed with the
/// direct children of `root` matching `t1`, then for every further tag
/// flat-map "children matching ti" over the current sequence. The outer loop
/// runs in current-sequence order, the inner loop in sibling order, so each
/// narrowing step is a depth-first flat-map.
///
/// An empty intermediate step empties the final result; that is plain
/// emptiness, not a failure. An empty tag path yields nothing.
pub fn narrow<'a, N: XmlNode + 'a>(root: &N, tags: &[&str]) -> Box<dyn Iterator<Item = N> + 'a> {
    let Some((first, rest)) = tags.split_first() else {
        return Box::new(std::iter::empty());
    };
    debug!(depth = tags.len(), "narrowing tag path");
    let mut current: Box<dyn Iterator<Item = N> + 'a> = Box::new(children_by_tag(root, *first));
    for tag in rest {
        let tag = (*tag).to_owned();
        current = Box::new(current.flat_map(move |elem| children_by_tag(&elem, tag.clone())));
    }
    current
}

pub struct ChildrenByTag<N: XmlNode> {
    inner: Nodes<N::List>,
    tag: String,
}

impl<N: XmlNode> Iterator for ChildrenByTag<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        self.inner.find(|node| {
            node.kind() == NodeKind::Element && node.name().is_some_and(|q| q.local == self.tag)
        })
    }
}
