//! Contract between an XML document-model provider and the `xmlq` query
//! layer.
//!
//! The provider owns the tree: it parses, builds and lifetime-manages
//! documents, elements and attributes. This crate only defines the read-only
//! view the query layer traverses. Nothing here creates, destroys or mutates
//! provider nodes.

pub mod model;

pub use model::{NodeKind, NodeList, QName, XmlDocument, XmlNode};
