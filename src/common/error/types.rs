//! Unified error types for pptx-util.
//!
//! Every failure in this crate is local and synchronous: a lookup that found
//! no enumerant, a value that cannot be assigned, or a string that is not a
//! length. Nothing is retried or recovered internally.
use thiserror::Error;

/// Main error type for pptx-util operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No member of the enumeration has this numeric code
    #[error("{enumeration} has no member with value {value}")]
    UnknownValue {
        enumeration: &'static str,
        value: i32,
    },

    /// No member of the enumeration maps to this XML token
    #[error("{enumeration} has no XML mapping for '{value}'")]
    UnknownXmlValue {
        enumeration: &'static str,
        value: String,
    },

    /// No member of the enumeration has this symbolic name
    #[error("{enumeration} has no member named '{name}'")]
    UnknownName {
        enumeration: &'static str,
        name: String,
    },

    /// Member exists but has no token in the markup
    #[error("{enumeration}.{member} has no XML representation")]
    NoXmlRepresentation {
        enumeration: &'static str,
        member: &'static str,
    },

    /// Member may be observed as a result but never assigned
    #[error("{enumeration}.{member} is a return value only and cannot be assigned")]
    ReadOnlyValue {
        enumeration: &'static str,
        member: &'static str,
    },

    /// Assignment to a lazily computed property
    #[error("can't set attribute '{0}': lazy property is read-only")]
    ReadOnlyAttribute(&'static str),

    /// Parse error occurred
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Result type for pptx-util operations.
pub type Result<T> = std::result::Result<T, Error>;
