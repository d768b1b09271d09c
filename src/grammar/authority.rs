//! `authority = [ userinfo "@" ] host [ ":" port ]` (RFC 3986 §3.2).
//!
//! Parsed as a unit, rather than componentwise, because `userinfo` and
//! `host` share enough of their charset (both allow `sub-delims` and
//! `pct-encoded`) that the only reliable way to split them is to scan for
//! the rightmost unescaped `@` before handing the rest to [`host::host`].

use super::host::{self, HostMatch};
use crate::charset::USERINFO;
use crate::error::ParseError;
use crate::pct;

/// Result of recognizing an `authority` production starting just past its
/// leading `//`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AuthorityMatch {
    /// Byte range of `userinfo`, excluding the `@`. Empty (zero-length at
    /// `userinfo_end`) when no userinfo was present.
    pub(crate) userinfo: (usize, usize),
    pub(crate) has_userinfo: bool,
    pub(crate) host: HostMatch,
    pub(crate) host_range: (usize, usize),
    /// Byte range of `port`'s digits, excluding the `:`. May be empty.
    pub(crate) port: (usize, usize),
    pub(crate) has_port: bool,
}

/// `userinfo = *( unreserved / pct-encoded / sub-delims / ":" )`
fn userinfo(bytes: &[u8], i: usize) -> Result<usize, ParseError> {
    super::many0(&USERINFO, bytes, i)
}

/// Recognizes `authority` at `i` (which must point just past the `//`
/// marker). Returns the match and the offset just past the authority.
pub(crate) fn authority(bytes: &[u8], i: usize) -> Result<(AuthorityMatch, usize), ParseError> {
    // authority ends at the next "/", "?", "#", or end of input.
    let authority_end = {
        let mut j = i;
        while let Some(&b) = bytes.get(j) {
            match b {
                b'/' | b'?' | b'#' => break,
                b'%' => {
                    // Skip a (possibly malformed) escape verbatim; it is
                    // re-validated componentwise below.
                    j += 2;
                }
                _ => {}
            }
            j += 1;
        }
        j
    };

    // Find the rightmost unescaped '@' within [i, authority_end): that
    // splits userinfo from host[:port]. pct-encoded "%40" never decodes
    // to a raw '@' boundary because we scan the raw bytes, so an escaped
    // '@' inside a username can never be mistaken for the delimiter.
    let mut at_pos = None;
    let mut j = i;
    while j < authority_end {
        match bytes[j] {
            b'@' => at_pos = Some(j),
            b'%' => {
                j += 2;
            }
            _ => {}
        }
        j += 1;
    }

    let (has_userinfo, userinfo_start, rest_start) = match at_pos {
        Some(at) => {
            let end = userinfo(bytes, i)?;
            if end != at {
                return Err(ParseError::Invalid);
            }
            (true, i, at + 1)
        }
        None => (false, i, i),
    };
    let userinfo_end = if has_userinfo { at_pos.unwrap() } else { userinfo_start };

    let (host_match, host_len) = host::host(bytes, rest_start)?;
    let host_start = rest_start;
    let host_end = host_start + host_len;

    let (has_port, port_start, port_end) = if bytes.get(host_end) == Some(&b':') {
        let digits_start = host_end + 1;
        let mut k = digits_start;
        while bytes.get(k).is_some_and(|b| b.is_ascii_digit()) {
            k += 1;
        }
        (true, digits_start, k)
    } else {
        (false, host_end, host_end)
    };

    if port_end != authority_end {
        return Err(ParseError::Invalid);
    }

    Ok((
        AuthorityMatch {
            userinfo: (userinfo_start, userinfo_end),
            has_userinfo,
            host: host_match,
            host_range: (host_start, host_end),
            port: (port_start, port_end),
            has_port,
        },
        authority_end,
    ))
}

/// Splits a recognized `userinfo` range at its first unescaped `:`, giving
/// `(user, password)`. `password` is `None` when no `:` was present.
pub(crate) fn split_userinfo(bytes: &[u8], start: usize, end: usize) -> (usize, usize, Option<(usize, usize)>) {
    let mut j = start;
    while j < end {
        match bytes[j] {
            b':' => return (start, j, Some((j + 1, end))),
            b'%' => j += 3,
            _ => j += 1,
        }
    }
    (start, end, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_host_only() {
        let (m, end) = authority(b"example.com/a", 0).unwrap();
        assert!(!m.has_userinfo);
        assert!(!m.has_port);
        assert_eq!(m.host_range, (0, 11));
        assert_eq!(end, 11);
    }

    #[test]
    fn parses_userinfo_and_port() {
        let (m, end) = authority(b"alice:secret@example.com:8080/x", 0).unwrap();
        assert!(m.has_userinfo);
        assert_eq!(m.userinfo, (0, 12));
        assert!(m.has_port);
        assert_eq!(m.port, (25, 29));
        assert_eq!(end, 29);

        let (user, _, pass) = split_userinfo(b"alice:secret@example.com:8080/x", 0, 12);
        assert_eq!(pass, Some((6, 12)));
        let _ = user;
    }

    #[test]
    fn escaped_at_in_username_is_not_the_delimiter() {
        // "user%40name@host" - the literal '@' is percent-escaped, so the
        // real delimiter is the unescaped one before "host".
        let (m, _end) = authority(b"user%40name@host/x", 0).unwrap();
        assert!(m.has_userinfo);
        assert_eq!(m.userinfo, (0, 11));
    }

    #[test]
    fn rejects_non_digit_port() {
        assert_eq!(authority(b"host:abc/x", 0), Err(ParseError::Invalid));
    }
}
