//! `query = *( pchar / "/" / "?" )` and `fragment`, which shares the exact
//! same grammar (RFC 3986 §3.4, §3.5).

use crate::charset::QUERY;
use crate::error::ParseError;

/// Recognizes `query` (equivalently `fragment`) starting at `i`. Returns
/// the end offset (exclusive) of the match; zero-length is valid.
pub(crate) fn query(bytes: &[u8], i: usize) -> Result<usize, ParseError> {
    super::many0(&QUERY, bytes, i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumes_reserved_query_punctuation() {
        assert_eq!(query(b"a=1&b=2#frag", 0), Ok(7));
    }

    #[test]
    fn empty_query_is_valid() {
        assert_eq!(query(b"#frag", 0), Ok(0));
    }

    #[test]
    fn consumes_pct_encoded_bytes() {
        assert_eq!(query(b"a%20b#frag", 0), Ok(5));
    }
}
