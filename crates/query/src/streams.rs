//! Lazy adapters from length-known node collections to iterators.
//!
//! Every adapter call produces an independent, restartable iterator over the
//! same underlying collection; the length is re-read as iteration proceeds
//! rather than snapshotted. Exhaustion is not an error, it just stops
//! yielding.

use std::iter::FusedIterator;

use xmlq_core::{NodeKind, NodeList, XmlDocument, XmlNode};

/// Every entry of `list`, unfiltered, in collection order.
pub fn nodes<L: NodeList>(list: L) -> Nodes<L> {
    Nodes { list, pos: 0 }
}

/// Attribute entries of `list` only. Attribute maps may carry other entry
/// kinds; those are skipped by advancing the position without yielding.
pub fn attributes<L>(list: L) -> Attributes<L>
where
    L: NodeList,
    L::Node: XmlNode,
{
    Attributes { inner: nodes(list) }
}

/// Element entries of `list` only. Child lists routinely interleave text
/// nodes with elements; this drops everything that is not an element.
pub fn elements<L>(list: L) -> Elements<L>
where
    L: NodeList,
    L::Node: XmlNode,
{
    Elements { inner: nodes(list) }
}

/// Every element of `doc` in document order (pre-order, siblings
/// left-to-right), by adapting the provider's wildcard selection.
pub fn all_elements<D: XmlDocument>(doc: &D) -> Nodes<<D::Node as XmlNode>::List> {
    nodes(doc.all_elements())
}

pub struct Nodes<L> {
    list: L,
    pos: usize,
}

impl<L: NodeList> Iterator for Nodes<L> {
    type Item = L::Node;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.list.len() {
            return None;
        }
        let item = self.list.item(self.pos);
        self.pos += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len().saturating_sub(self.pos);
        (remaining, Some(remaining))
    }
}

impl<L: NodeList> ExactSizeIterator for Nodes<L> {}

impl<L: NodeList> FusedIterator for Nodes<L> {}

pub struct Attributes<L> {
    inner: Nodes<L>,
}

impl<L> Iterator for Attributes<L>
where
    L: NodeList,
    L::Node: XmlNode,
{
    type Item = L::Node;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find(|node| node.kind() == NodeKind::Attribute)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<L> FusedIterator for Attributes<L>
where
    L: NodeList,
    L::Node: XmlNode,
{
}

pub struct Elements<L> {
    inner: Nodes<L>,
}

impl<L> Iterator for Elements<L>
where
    L: NodeList,
    L::Node: XmlNode,
{
    type Item = L::Node;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find(|node| node.kind() == NodeKind::Element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<L> FusedIterator for Elements<L>
where
    L: NodeList,
    L::Node: XmlNode,
{
}
