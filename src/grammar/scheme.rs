//! `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`

use crate::charset::{ALPHA, CharSet, DIGIT};
use crate::error::ParseError;

const SCHEME_TAIL: CharSet = ALPHA.union(&DIGIT).union(&CharSet::from_bytes(b"+-."));

/// Recognizes `scheme` starting at `i`. Returns the end offset (exclusive)
/// of the scheme name, not including the trailing `:`.
pub(crate) fn scheme(bytes: &[u8], i: usize) -> Result<usize, ParseError> {
    match bytes.get(i) {
        Some(&b) if ALPHA.contains(b) => {}
        _ => return Err(ParseError::Invalid),
    }
    let mut j = i + 1;
    while let Some(&b) = bytes.get(j) {
        if SCHEME_TAIL.contains(b) {
            j += 1;
        } else {
            break;
        }
    }
    Ok(j)
}
