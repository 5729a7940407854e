//! Query layer over an externally supplied, immutable XML document model.
//!
//! The document tree is owned by a provider implementing the `xmlq-core`
//! traits; this crate derives lazy sequences and lookup tables from it:
//!
//! - [`streams`] adapts length-known node collections into iterators and
//!   enumerates whole documents in document order,
//! - [`values`] coerces attribute text into typed values with
//!   default-on-absence and fail-on-malformed semantics,
//! - [`paths`] narrows a root element through a sequence of tag names,
//! - [`index`] builds uniqueness-checked key → element maps.
//!
//! ```
//! use xmlq_query::simple_node::{attr, doc, elem};
//! use xmlq_query::{int_value, narrow, NodeList, XmlNode};
//!
//! // <root><item n='2'/><item n='4'/></root>
//! let document = doc()
//!     .child(
//!         elem("root")
//!             .child(elem("item").attr(attr("n", "2")))
//!             .child(elem("item").attr(attr("n", "4"))),
//!     )
//!     .build();
//! let root = document.children().item(0).unwrap();
//! let sum: i32 = narrow(&root, &["item"])
//!     .map(|item| int_value(item.attribute("n").as_ref(), 0).unwrap())
//!     .sum();
//! assert_eq!(sum, 6);
//! ```

pub mod error;
pub mod index;
pub mod paths;
pub mod simple_node;
pub mod streams;
pub mod values;

pub use error::{IndexError, ValueError};
pub use index::{index_by, index_by_attribute};
pub use paths::{children_by_tag, narrow};
pub use streams::{all_elements, attributes, elements, nodes};
pub use values::{
    AttrValue, ZeroValue, attribute, bool_value, date_time_value, date_value, decimal_value,
    double_value, int_value, long_value, string_value, value, value_or_default,
};
pub use xmlq_core::{NodeKind, NodeList, QName, XmlDocument, XmlNode};
