//! Error type for encode/decode failures

use thiserror::Error;

/// Errors raised synchronously by the codec. No retry, no recovery, no
/// partial result: a failed decode returns nothing.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A record split into fewer fields than the format requires.
    #[error("record on line {line} has {found} fields, expected at least 5")]
    ShortRecord { line: usize, found: usize },

    /// A field without a tag/value separator.
    #[error("record on line {line}: field `{field}` is missing `:`")]
    MissingSeparator { line: usize, field: String },

    /// A reference value that is not a valid identifier.
    #[error("record on line {line}: `{value}` is not a node reference")]
    BadReference { line: usize, value: String },

    /// A link names an identifier with no record in the document.
    #[error("reference to unknown node id {id}")]
    UnknownId { id: u64 },

    /// A truncated or non-hex percent escape in a payload.
    #[error("malformed percent escape in `{token}`")]
    BadEscape { token: String },

    /// A payload that unescapes to bytes outside UTF-8.
    #[error("payload `{token}` does not unescape to valid UTF-8")]
    NotUtf8 { token: String },

    /// The prev/next links do not form a single terminating chain.
    #[error("prev/next links do not form a single chain")]
    BrokenChain,

    /// The caller-owned sink or source failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
