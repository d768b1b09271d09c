//! Public and internal error types.

use thiserror::Error;

/// Result of an internal streaming grammar/codec recognition.
///
/// This never crosses the public API: every setter collapses `NeedMore`
/// into [`UrlError::InvalidPart`] since the buffers this crate works with
/// are never streamed in chunks, only handed over whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParseError {
    /// Input is consistent with the grammar so far but ended mid-token,
    /// e.g. a `%` with fewer than two trailing hex digits.
    NeedMore,
    /// Input does not conform to the expected grammar production.
    Invalid,
}

impl From<ParseError> for UrlError {
    fn from(_: ParseError) -> Self {
        UrlError::InvalidPart
    }
}

/// Errors reported by the public API of [`crate::Url`] and
/// [`crate::UrlBuffer`].
///
/// Every failing setter reports one of these with the buffer left
/// unchanged (strong exception safety).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UrlError {
    /// The input byte sequence does not conform to the grammar of the
    /// component being parsed or set, contains a malformed percent-escape,
    /// or contains a byte outside the allowed character set.
    #[error("input does not conform to the expected URI grammar")]
    InvalidPart,

    /// The requested resize would exceed the buffer's maximum capacity, as
    /// declared by its [`crate::alloc::Allocator`].
    #[error("resize would exceed the buffer's maximum capacity")]
    TooLarge,
}
