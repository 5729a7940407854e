//! Typed attribute-value accessors.
//!
//! All accessors are pure functions of (attribute presence, attribute text,
//! default): an absent attribute resolves to the supplied default without any
//! parsing, while present but malformed text propagates a [`ValueError`] and
//! is never papered over with the default.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use xmlq_core::XmlNode;

use crate::error::ValueError;

/// A value type with a canonical attribute-text grammar.
pub trait AttrValue: Sized {
    fn parse_attr(text: &str) -> Result<Self, ValueError>;
}

impl AttrValue for i32 {
    fn parse_attr(text: &str) -> Result<Self, ValueError> {
        text.parse().map_err(|source| ValueError::Int { text: text.to_owned(), source })
    }
}

impl AttrValue for i64 {
    fn parse_attr(text: &str) -> Result<Self, ValueError> {
        text.parse().map_err(|source| ValueError::Int { text: text.to_owned(), source })
    }
}

impl AttrValue for f64 {
    fn parse_attr(text: &str) -> Result<Self, ValueError> {
        text.parse().map_err(|source| ValueError::Float { text: text.to_owned(), source })
    }
}

impl AttrValue for Decimal {
    fn parse_attr(text: &str) -> Result<Self, ValueError> {
        text.parse().map_err(|source| ValueError::Decimal { text: text.to_owned(), source })
    }
}

/// Permissive boolean grammar: case-insensitive `"true"` is `true`, any
/// other text is `false`. Malformed input is not rejected; changing this
/// would silently alter the behavior of existing documents.
impl AttrValue for bool {
    fn parse_attr(text: &str) -> Result<Self, ValueError> {
        Ok(text.eq_ignore_ascii_case("true"))
    }
}

impl AttrValue for String {
    fn parse_attr(text: &str) -> Result<Self, ValueError> {
        Ok(text.to_owned())
    }
}

/// ISO-8601 calendar date, `YYYY-MM-DD`.
impl AttrValue for NaiveDate {
    fn parse_attr(text: &str) -> Result<Self, ValueError> {
        text.parse().map_err(|source| ValueError::Date { text: text.to_owned(), source })
    }
}

/// ISO-8601 local date-time, `YYYY-MM-DDThh:mm:ss` with optional fraction.
impl AttrValue for NaiveDateTime {
    fn parse_attr(text: &str) -> Result<Self, ValueError> {
        text.parse().map_err(|source| ValueError::DateTime { text: text.to_owned(), source })
    }
}

/// Coerce an optional attribute handle: absent yields `default` untouched,
/// present parses the raw text per `T`'s grammar.
pub fn value<N: XmlNode, T: AttrValue>(attr: Option<&N>, default: T) -> Result<T, ValueError> {
    match attr {
        None => Ok(default),
        Some(node) => T::parse_attr(&node.value().unwrap_or_default()),
    }
}

/// One-argument form with the type's fixed zero value as default. Date and
/// date-time define no zero value; for those the two-argument form is the
/// only one, enforced by the missing [`ZeroValue`] impl.
pub fn value_or_default<N, T>(attr: Option<&N>) -> Result<T, ValueError>
where
    N: XmlNode,
    T: ZeroValue,
{
    value(attr, T::zero())
}

/// Types whose one-argument accessor form has a fixed zero default
/// (0, 0.0, `Decimal::ZERO`, empty string, `false`).
pub trait ZeroValue: AttrValue {
    fn zero() -> Self;
}

impl ZeroValue for i32 {
    fn zero() -> Self {
        0
    }
}

impl ZeroValue for i64 {
    fn zero() -> Self {
        0
    }
}

impl ZeroValue for f64 {
    fn zero() -> Self {
        0.0
    }
}

impl ZeroValue for Decimal {
    fn zero() -> Self {
        Decimal::ZERO
    }
}

impl ZeroValue for bool {
    fn zero() -> Self {
        false
    }
}

impl ZeroValue for String {
    fn zero() -> Self {
        String::new()
    }
}

/// Composable extractor: `attribute(name)` applied to an element yields the
/// optional attribute handle, ready to chain into one of the coercions.
pub fn attribute<N: XmlNode>(name: impl Into<String>) -> impl Fn(&N) -> Option<N> {
    let name = name.into();
    move |node| node.attribute(&name)
}

pub fn int_value<N: XmlNode>(attr: Option<&N>, default: i32) -> Result<i32, ValueError> {
    value(attr, default)
}

pub fn long_value<N: XmlNode>(attr: Option<&N>, default: i64) -> Result<i64, ValueError> {
    value(attr, default)
}

pub fn double_value<N: XmlNode>(attr: Option<&N>, default: f64) -> Result<f64, ValueError> {
    value(attr, default)
}

pub fn decimal_value<N: XmlNode>(attr: Option<&N>, default: Decimal) -> Result<Decimal, ValueError> {
    value(attr, default)
}

pub fn string_value<N: XmlNode>(
    attr: Option<&N>,
    default: impl Into<String>,
) -> Result<String, ValueError> {
    value(attr, default.into())
}

pub fn bool_value<N: XmlNode>(attr: Option<&N>, default: bool) -> Result<bool, ValueError> {
    value(attr, default)
}

pub fn date_value<N: XmlNode>(
    attr: Option<&N>,
    default: NaiveDate,
) -> Result<NaiveDate, ValueError> {
    value(attr, default)
}

pub fn date_time_value<N: XmlNode>(
    attr: Option<&N>,
    default: NaiveDateTime,
) -> Result<NaiveDateTime, ValueError> {
    value(attr, default)
}
