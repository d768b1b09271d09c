//! `path` and its five shapes (RFC 3986 §3.3):
//!
//! ```text
//! path          = path-abempty    ; begins with "/" or is empty
//!               / path-absolute   ; begins with "/" but not "//"
//!               / path-noscheme   ; begins with a non-colon segment
//!               / path-rootless   ; begins with a segment
//!               / path-empty      ; zero characters
//! segment       = *pchar
//! segment-nz    = 1*pchar
//! segment-nz-nc = 1*( unreserved / pct-encoded / sub-delims / "@" )
//! ```
//!
//! The shape a `Url` accepts for its path depends on what surrounds it
//! (an authority, a scheme, neither); callers pick the right production.

use crate::charset::{PCHAR, SEGMENT_NZ_NC};
use crate::error::ParseError;

/// `segment = *pchar`
pub(crate) fn segment(bytes: &[u8], i: usize) -> Result<usize, ParseError> {
    super::many0(&PCHAR, bytes, i)
}

/// `segment-nz = 1*pchar`
fn segment_nz(bytes: &[u8], i: usize) -> Result<usize, ParseError> {
    super::many1(&PCHAR, bytes, i)
}

/// `segment-nz-nc = 1*( unreserved / pct-encoded / sub-delims / "@" )`
fn segment_nz_nc(bytes: &[u8], i: usize) -> Result<usize, ParseError> {
    super::many1(&SEGMENT_NZ_NC, bytes, i)
}

/// `path-abempty = *( "/" segment )`
pub(crate) fn path_abempty(bytes: &[u8], i: usize) -> Result<usize, ParseError> {
    let mut j = i;
    while let Some(slash) = super::token(b'/', bytes, j) {
        j = segment(bytes, slash)?;
    }
    Ok(j)
}

/// `path-absolute = "/" [ segment-nz *( "/" segment ) ]`
pub(crate) fn path_absolute(bytes: &[u8], i: usize) -> Result<usize, ParseError> {
    let Some(after_slash) = super::token(b'/', bytes, i) else {
        return Err(ParseError::Invalid);
    };
    if bytes.get(after_slash) == Some(&b'/') {
        // "//..." would be read back as an authority marker; reject here
        // and let the caller fall back to path-rootless framing if needed.
        return Err(ParseError::Invalid);
    }
    let mut j = match segment_nz(bytes, after_slash) {
        Ok(end) => end,
        Err(_) => after_slash,
    };
    while let Some(slash) = super::token(b'/', bytes, j) {
        j = segment(bytes, slash)?;
    }
    Ok(j)
}

/// `path-noscheme = segment-nz-nc *( "/" segment )`
pub(crate) fn path_noscheme(bytes: &[u8], i: usize) -> Result<usize, ParseError> {
    let mut j = segment_nz_nc(bytes, i)?;
    while let Some(slash) = super::token(b'/', bytes, j) {
        j = segment(bytes, slash)?;
    }
    Ok(j)
}

/// `path-rootless = segment-nz *( "/" segment )`
pub(crate) fn path_rootless(bytes: &[u8], i: usize) -> Result<usize, ParseError> {
    let mut j = segment_nz(bytes, i)?;
    while let Some(slash) = super::token(b'/', bytes, j) {
        j = segment(bytes, slash)?;
    }
    Ok(j)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abempty_accepts_empty_and_rooted() {
        assert_eq!(path_abempty(b"", 0), Ok(0));
        assert_eq!(path_abempty(b"/a/b/c?x", 0), Ok(6));
    }

    #[test]
    fn absolute_rejects_double_slash() {
        assert_eq!(path_absolute(b"//host/a", 0), Err(ParseError::Invalid));
        assert_eq!(path_absolute(b"/a/b", 0), Ok(4));
        assert_eq!(path_absolute(b"/", 0), Ok(1));
    }

    #[test]
    fn noscheme_rejects_leading_colon_segment() {
        // "a:b" as the first segment would be mistaken for a scheme by a
        // reference resolver; segment-nz-nc excludes ":" for that reason.
        assert_eq!(path_noscheme(b"a:b/c", 0), Ok(1));
    }

    #[test]
    fn rootless_accepts_colon_in_first_segment() {
        assert_eq!(path_rootless(b"a:b/c?x", 0), Ok(5));
    }
}
