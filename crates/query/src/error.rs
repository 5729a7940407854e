use thiserror::Error;

/// Failure to coerce present attribute text into a typed value.
///
/// Absence of an attribute is never a `ValueError`; it is resolved by the
/// caller-supplied default before any parsing happens. A present but
/// malformed value always surfaces here and is never silently replaced.
#[derive(Debug, Error)]
pub enum ValueError {
    #[error("invalid integer {text:?}")]
    Int {
        text: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("invalid floating-point number {text:?}")]
    Float {
        text: String,
        #[source]
        source: std::num::ParseFloatError,
    },
    #[error("invalid decimal {text:?}")]
    Decimal {
        text: String,
        #[source]
        source: rust_decimal::Error,
    },
    #[error("invalid date {text:?}, expected YYYY-MM-DD")]
    Date {
        text: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("invalid date-time {text:?}, expected YYYY-MM-DDThh:mm:ss")]
    DateTime {
        text: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Failure while building a keyed index. Construction aborts on the first
/// offending element; no partial map is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// Two elements produced the same key. The key is kept in its `Debug`
    /// rendering because key types are caller-chosen.
    #[error("duplicate index key {key}")]
    DuplicateKey { key: String },
    /// The attribute-name shorthand found an element without the named
    /// attribute. Unlike typed coercion, key extraction has no fallback.
    #[error("element <{tag}> lacks index attribute {name:?}")]
    MissingKey { tag: String, name: String },
}
