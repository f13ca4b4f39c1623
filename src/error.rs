//! Error types shared by the parsing and lookup code.

/// Errors produced while parsing, building or looking up HTTP message parts.
///
/// Every failure is reported to the immediate caller. No variant carries a
/// partially built object.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The start line is missing or does not split into three fields.
    #[error("malformed start line: {line:?}")]
    MalformedStartLine { line: String },

    /// The status token is not a three digit code in `100..=599`.
    #[error("invalid status code: {status:?}")]
    InvalidStatusCode { status: String },

    /// A non-blank header line lacks the `:` separator or a field name.
    #[error("malformed header line: {line:?}")]
    MalformedHeader { line: String },

    /// Two keys of a two-way mapping point at the same value.
    #[error("duplicate value in two-way mapping: {value}")]
    DuplicateValue { value: String },

    /// The same key was given twice to a two-way mapping.
    #[error("duplicate key in two-way mapping: {key}")]
    DuplicateKey { key: String },

    /// A lookup fell outside the known domain.
    #[error("key not found: {key}")]
    KeyNotFound { key: String },
}

pub type Result<T> = std::result::Result<T, Error>;
