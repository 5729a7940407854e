//! Uniqueness-checked key → element lookup tables.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::Hash;

use tracing::debug;
use xmlq_core::{NodeKind, XmlNode};

use crate::error::IndexError;

/// Build a key → element map from `nodes` using the key rule `key`.
///
/// Non-element entries (text between siblings, comments) are dropped before
/// key extraction, so a raw child list can be indexed directly. Keys must be
/// pairwise distinct: a collision aborts construction, nothing is silently
/// overwritten or dropped. The map is a plain snapshot, not a live view, and
/// carries no iteration-order guarantee.
pub fn index_by<I, N, K, F>(nodes: I, key: F) -> Result<HashMap<K, N>, IndexError>
where
    I: IntoIterator<Item = N>,
    N: XmlNode,
    K: Eq + Hash + fmt::Debug,
    F: Fn(&N) -> K,
{
    build(nodes, |elem| Ok(key(elem)))
}

/// Shorthand: index by the text value of the named attribute.
///
/// Key extraction has no fallback here — an indexed element without the
/// attribute fails construction immediately, unlike the default-on-absence
/// coercion semantics.
pub fn index_by_attribute<I, N>(nodes: I, name: &str) -> Result<HashMap<String, N>, IndexError>
where
    I: IntoIterator<Item = N>,
    N: XmlNode,
{
    build(nodes, |elem| {
        elem.attribute(name)
            .and_then(|a| a.value())
            .ok_or_else(|| IndexError::MissingKey {
                tag: elem.name().map(|q| q.local).unwrap_or_default(),
                name: name.to_owned(),
            })
    })
}

fn build<I, N, K>(
    nodes: I,
    key: impl Fn(&N) -> Result<K, IndexError>,
) -> Result<HashMap<K, N>, IndexError>
where
    I: IntoIterator<Item = N>,
    N: XmlNode,
    K: Eq + Hash + fmt::Debug,
{
    let mut map = HashMap::new();
    for node in nodes {
        if node.kind() != NodeKind::Element {
            continue;
        }
        let key = key(&node)?;
        match map.entry(key) {
            Entry::Occupied(entry) => {
                return Err(IndexError::DuplicateKey { key: format!("{:?}", entry.key()) });
            }
            Entry::Vacant(entry) => {
                entry.insert(node);
            }
        }
    }
    debug!(entries = map.len(), "keyed index built");
    Ok(map)
}
