//! RFC 3986 grammar recognizers (§4.3).
//!
//! Each production is a small function `(bytes, cursor) -> Result<(new_cursor,
//! descriptor), ParseError>`, composed from the combinators below rather
//! than hand-written per production. Grammars never mutate their input.

pub(crate) mod authority;
pub(crate) mod host;
pub(crate) mod path;
pub(crate) mod query;
pub(crate) mod scheme;

use crate::charset::CharSet;
use crate::error::ParseError;
use crate::pct;

/// Recognizes the maximal run of `set`-member bytes and `%HH` escapes
/// starting at `i`. Equivalent to `*( set / pct-encoded )`. Never fails:
/// zero repetitions is a valid match.
pub(crate) fn many0(set: &CharSet, bytes: &[u8], i: usize) -> Result<usize, ParseError> {
    pct::parse(set, bytes, i).map(|(consumed, _)| i + consumed)
}

/// Like [`many0`] but requires at least one repetition.
pub(crate) fn many1(set: &CharSet, bytes: &[u8], i: usize) -> Result<usize, ParseError> {
    let end = many0(set, bytes, i)?;
    if end > i {
        Ok(end)
    } else {
        Err(ParseError::Invalid)
    }
}

/// Recognizes a single literal byte.
pub(crate) fn token(expected: u8, bytes: &[u8], i: usize) -> Option<usize> {
    if bytes.get(i) == Some(&expected) {
        Some(i + 1)
    } else {
        None
    }
}
