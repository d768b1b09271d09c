//! The `Url` API: component getters and setters built atop
//! [`crate::buffer::UrlBuffer`], the grammars in [`crate::grammar`], and
//! the codec in [`crate::pct`].

use crate::alloc::{Allocator, StdAllocator};
use crate::buffer::UrlBuffer;
use crate::charset::{FRAGMENT, QUERY, USERINFO, USERINFO_NC};
use crate::error::UrlError;
use crate::grammar::authority::{self, AuthorityMatch};
use crate::grammar::host::HostMatch;
use crate::grammar::{path, query as query_grammar, scheme as scheme_grammar};
use crate::host::{describe, Host};
use crate::params::ParamsView;
use crate::parts::{count_params, count_segments, ComponentId, HostType, Parts};
use crate::pct;
use crate::segments::SegmentsView;

/// A mutable RFC 3986 URI: a single percent-encoded byte buffer plus the
/// component offsets that slice it.
#[derive(Debug, Clone)]
pub struct Url<A: Allocator = StdAllocator> {
    buf: UrlBuffer<A>,
}

impl Url<StdAllocator> {
    pub fn new() -> Self {
        Url { buf: UrlBuffer::new() }
    }

    /// Parses `input` as a full URI (or relative reference) and returns
    /// the resulting `Url`, equivalent to `Url::new()` followed by
    /// [`Url::set_encoded_url`].
    pub fn parse(input: &str) -> Result<Self, UrlError> {
        let mut url = Self::new();
        url.set_encoded_url(input)?;
        Ok(url)
    }
}

impl Default for Url<StdAllocator> {
    fn default() -> Self {
        Self::new()
    }
}

fn as_str(bytes: &[u8]) -> &str {
    // Every byte that reaches the buffer already passed a CharSet or
    // percent-encoding check restricting it to ASCII, so this can never
    // see invalid UTF-8.
    std::str::from_utf8(bytes).expect("url buffer contents are always ASCII")
}

impl<A: Allocator> Url<A> {
    pub fn with_allocator(alloc: A) -> Self {
        Url {
            buf: UrlBuffer::with_allocator(alloc),
        }
    }

    pub(crate) fn buffer(&self) -> &UrlBuffer<A> {
        &self.buf
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut UrlBuffer<A> {
        &mut self.buf
    }

    /// The whole URI, percent-encoded, as it currently stands.
    pub fn encoded_url(&self) -> &str {
        as_str(self.buf.as_bytes())
    }

    pub fn nseg(&self) -> usize {
        self.buf.parts().nseg()
    }

    pub fn nparam(&self) -> usize {
        self.buf.parts().nparam()
    }

    /// Replaces the entire URI. Strong exception safety: on failure the
    /// buffer is left exactly as it was.
    pub fn set_encoded_url(&mut self, input: &str) -> Result<(), UrlError> {
        let (bytes, parts) = parse_uri_reference(input.as_bytes())?;
        self.buf.replace_all(bytes, parts)
    }

    // -- scheme ----------------------------------------------------------

    /// The scheme name, without its trailing `:`. Empty if absent.
    pub fn scheme(&self) -> &str {
        let raw = self.buf.component(ComponentId::Scheme);
        if raw.is_empty() {
            ""
        } else {
            as_str(&raw[..raw.len() - 1])
        }
    }

    pub fn set_scheme(&mut self, scheme: &str) -> Result<(), UrlError> {
        if scheme.is_empty() {
            self.buf.resize_one(ComponentId::Scheme, 0)?;
            return Ok(());
        }
        let end = scheme_grammar::scheme(scheme.as_bytes(), 0).map_err(UrlError::from)?;
        if end != scheme.len() {
            return Err(UrlError::InvalidPart);
        }
        let mut content = Vec::with_capacity(scheme.len() + 1);
        content.extend_from_slice(scheme.as_bytes());
        content.push(b':');
        self.buf.set_component(ComponentId::Scheme, &content)
    }

    /// Lower-cases the ASCII letters of the scheme in place. The only
    /// normalization this crate performs on its own.
    pub fn normalize_scheme(&mut self) {
        for b in self.buf.component_mut(ComponentId::Scheme) {
            b.make_ascii_lowercase();
        }
    }

    // -- user / password ---------------------------------------------------

    fn ensure_authority(&mut self) -> Result<(), UrlError> {
        if !self.buf.parts().has_authority() {
            self.buf.set_component(ComponentId::User, b"//")?;
        }
        Ok(())
    }

    /// The decoded username, or an empty vector if absent. Percent-decoding
    /// a `userinfo-nc` value can yield arbitrary bytes (e.g. `%FF`), not
    /// necessarily valid UTF-8, so this returns raw bytes rather than a
    /// `String`.
    pub fn user(&self) -> Vec<u8> {
        let raw = self.encoded_user();
        pct::decode(raw.as_bytes()).expect("stored user is always valid")
    }

    /// The raw (still percent-encoded) username, without the leading `//`.
    pub fn encoded_user(&self) -> &str {
        let raw = self.buf.component(ComponentId::User);
        if raw.len() > 2 {
            as_str(&raw[2..])
        } else {
            ""
        }
    }

    pub fn set_user(&mut self, user: &str) -> Result<(), UrlError> {
        let encoded = pct::encode_to_vec(&USERINFO_NC, user.as_bytes());
        self.set_encoded_user(as_str(&encoded))
    }

    pub fn set_encoded_user(&mut self, user: &str) -> Result<(), UrlError> {
        pct::validate(&USERINFO_NC, user.as_bytes())?;
        if user.is_empty() {
            let parts = self.buf.parts();
            if parts.has_password() {
                // A real password remains: keep "//" and the password's
                // own ":...@", drop only the username bytes.
                self.buf.set_component(ComponentId::User, b"//")?;
                return Ok(());
            }
            // No real password either, just (at most) the bare "@" a
            // username placeholder leaves behind in `Password`: the whole
            // userinfo disappears, so rewrite `User` and `Password`
            // together rather than leaving that lone "@" dangling. Keep a
            // bare "//" marker only if host/port still anchor an authority.
            let keep_marker = parts.has_port() || !self.buf.component(ComponentId::Host).is_empty();
            let content: &[u8] = if keep_marker { b"//" } else { b"" };
            let region_start = self.buf.parts().start(ComponentId::User);
            self.buf.set_components(ComponentId::User, ComponentId::Password, content)?;
            self.buf.parts_mut().set_end(ComponentId::User, region_start + content.len());
            return Ok(());
        }
        self.ensure_authority()?;
        let mut content = Vec::with_capacity(2 + user.len());
        content.extend_from_slice(b"//");
        content.extend_from_slice(user.as_bytes());
        self.buf.set_component(ComponentId::User, &content)
    }

    /// The decoded password, or `None` if no password (even empty) is set.
    /// Raw bytes for the same reason as [`Url::user`]: decoding is not
    /// guaranteed to produce valid UTF-8.
    pub fn password(&self) -> Option<Vec<u8>> {
        self.encoded_password()
            .map(|raw| pct::decode(raw.as_bytes()).expect("stored password is always valid"))
    }

    /// The raw (still percent-encoded) password, without `:`/`@`, or
    /// `None` if absent.
    pub fn encoded_password(&self) -> Option<&str> {
        let raw = self.buf.component(ComponentId::Password);
        if raw.is_empty() || raw == b"@" {
            None
        } else {
            // raw is ":" password "@"
            Some(as_str(&raw[1..raw.len() - 1]))
        }
    }

    pub fn set_password(&mut self, password: Option<&str>) -> Result<(), UrlError> {
        match password {
            None => self.set_encoded_password_inner(None),
            Some(p) => {
                let encoded = pct::encode_to_vec(&USERINFO, p.as_bytes());
                self.set_encoded_password_inner(Some(as_str(&encoded).to_owned()))
            }
        }
    }

    pub fn set_encoded_password(&mut self, password: &str) -> Result<(), UrlError> {
        if password.starts_with(':') || password.starts_with('@') {
            return Err(UrlError::InvalidPart);
        }
        pct::validate(&USERINFO, password.as_bytes())?;
        self.set_encoded_password_inner(Some(password.to_owned()))
    }

    pub fn clear_password(&mut self) -> Result<(), UrlError> {
        self.set_encoded_password_inner(None)
    }

    fn set_encoded_password_inner(&mut self, password: Option<String>) -> Result<(), UrlError> {
        match password {
            None => self.buf.set_component(ComponentId::Password, b""),
            Some(p) => {
                self.ensure_authority()?;
                let mut content = Vec::with_capacity(2 + p.len());
                content.push(b':');
                content.extend_from_slice(p.as_bytes());
                content.push(b'@');
                self.buf.set_component(ComponentId::Password, &content)
            }
        }
    }

    // -- host ---------------------------------------------------------------

    /// A decoded view of the host, or `None` if no authority is present.
    pub fn host(&self) -> Option<Host<'_>> {
        let raw = self.buf.component(ComponentId::Host);
        if !self.buf.parts().has_authority() {
            return None;
        }
        Some(describe(self.buf.parts().host_type(), raw, as_str(raw)))
    }

    /// The raw host text exactly as stored (percent-encoded `reg-name`,
    /// or the literal/bracketed address forms).
    pub fn encoded_host(&self) -> &str {
        as_str(self.buf.component(ComponentId::Host))
    }

    pub fn set_host(&mut self, host: &str) -> Result<(), UrlError> {
        let (m, end) = crate::grammar::host::host(host.as_bytes(), 0).map_err(UrlError::from)?;
        if end != host.len() {
            return Err(UrlError::InvalidPart);
        }
        if host.is_empty() {
            let parts = self.buf.parts();
            if !parts.has_port() && !parts.has_userinfo() {
                self.buf.set_component(ComponentId::User, b"")?;
                self.buf.set_component(ComponentId::Host, b"")?;
                return Ok(());
            }
            self.buf.set_component(ComponentId::Host, b"")?;
            self.buf.parts_mut().set_host_type(HostType::Name);
            return Ok(());
        }
        self.ensure_authority()?;
        self.buf.set_component(ComponentId::Host, host.as_bytes())?;
        self.buf.parts_mut().set_host_type(m.host_type());
        Ok(())
    }

    // -- port -----------------------------------------------------------

    /// The port as a `u16`, or `None` if absent *or* if its digits (valid
    /// per `port = *DIGIT`) don't fit a `u16` - RFC 3986 places no upper
    /// bound on the number of port digits, so a caller wanting the raw
    /// text regardless of magnitude should use [`Url::port_str`] instead.
    pub fn port(&self) -> Option<u16> {
        self.port_str().and_then(|s| s.parse().ok())
    }

    /// The raw decimal digits of the port, without the leading `:`.
    pub fn port_str(&self) -> Option<&str> {
        let raw = self.buf.component(ComponentId::Port);
        if raw.is_empty() {
            None
        } else {
            Some(as_str(&raw[1..]))
        }
    }

    pub fn set_port(&mut self, port: Option<u16>) -> Result<(), UrlError> {
        match port {
            None => self.buf.set_component(ComponentId::Port, b""),
            Some(p) => {
                self.ensure_authority()?;
                let digits = p.to_string();
                let mut content = Vec::with_capacity(1 + digits.len());
                content.push(b':');
                content.extend_from_slice(digits.as_bytes());
                self.buf.set_component(ComponentId::Port, &content)
            }
        }
    }

    // -- path ---------------------------------------------------------------

    /// The raw (percent-encoded) path, including any leading `/`.
    pub fn encoded_path(&self) -> &str {
        as_str(self.buf.component(ComponentId::Path))
    }

    pub fn set_encoded_path(&mut self, path_text: &str) -> Result<(), UrlError> {
        let bytes = path_text.as_bytes();
        let has_authority = self.buf.parts().has_authority();
        let has_scheme = self.buf.parts().has_scheme();

        let end = if has_authority {
            if !(bytes.is_empty() || bytes[0] == b'/') {
                return Err(UrlError::InvalidPart);
            }
            path::path_abempty(bytes, 0).map_err(UrlError::from)?
        } else if bytes.first() == Some(&b'/') {
            path::path_absolute(bytes, 0).map_err(UrlError::from)?
        } else if has_scheme {
            if bytes.is_empty() {
                0
            } else {
                path::path_rootless(bytes, 0).map_err(UrlError::from)?
            }
        } else if bytes.is_empty() {
            0
        } else {
            path::path_noscheme(bytes, 0).map_err(UrlError::from)?
        };
        if end != bytes.len() {
            return Err(UrlError::InvalidPart);
        }

        self.buf.set_component(ComponentId::Path, bytes)?;
        self.buf.parts_mut().set_nseg(count_segments(bytes));
        Ok(())
    }

    // -- query ----------------------------------------------------------

    /// The raw query, without the leading `?`, or `None` if absent.
    pub fn encoded_query(&self) -> Option<&str> {
        let raw = self.buf.component(ComponentId::Query);
        if raw.is_empty() {
            None
        } else {
            Some(as_str(&raw[1..]))
        }
    }

    pub fn set_query(&mut self, query: Option<&str>) -> Result<(), UrlError> {
        match query {
            None => self.clear_query(),
            Some(q) => {
                let encoded = pct::encode_to_vec(&QUERY, q.as_bytes());
                self.set_encoded_query(as_str(&encoded))
            }
        }
    }

    pub fn set_encoded_query(&mut self, query: &str) -> Result<(), UrlError> {
        let bytes = query.as_bytes();
        let end = query_grammar::query(bytes, 0).map_err(UrlError::from)?;
        if end != bytes.len() {
            return Err(UrlError::InvalidPart);
        }
        let mut content = Vec::with_capacity(1 + bytes.len());
        content.push(b'?');
        content.extend_from_slice(bytes);
        self.buf.set_component(ComponentId::Query, &content)?;
        self.buf.parts_mut().set_nparam(count_params(self.buf.component(ComponentId::Query)));
        Ok(())
    }

    pub fn clear_query(&mut self) -> Result<(), UrlError> {
        self.buf.set_component(ComponentId::Query, b"")?;
        self.buf.parts_mut().set_nparam(0);
        Ok(())
    }

    // -- fragment -------------------------------------------------------

    pub fn encoded_fragment(&self) -> Option<&str> {
        let raw = self.buf.component(ComponentId::Fragment);
        if raw.is_empty() {
            None
        } else {
            Some(as_str(&raw[1..]))
        }
    }

    pub fn set_fragment(&mut self, fragment: Option<&str>) -> Result<(), UrlError> {
        match fragment {
            None => self.buf.set_component(ComponentId::Fragment, b""),
            Some(f) => {
                let encoded = pct::encode_to_vec(&FRAGMENT, f.as_bytes());
                self.set_encoded_fragment(as_str(&encoded))
            }
        }
    }

    pub fn set_encoded_fragment(&mut self, fragment: &str) -> Result<(), UrlError> {
        let bytes = fragment.as_bytes();
        let end = query_grammar::query(bytes, 0).map_err(UrlError::from)?;
        if end != bytes.len() {
            return Err(UrlError::InvalidPart);
        }
        let mut content = Vec::with_capacity(1 + bytes.len());
        content.push(b'#');
        content.extend_from_slice(bytes);
        self.buf.set_component(ComponentId::Fragment, &content)
    }

    // -- views ------------------------------------------------------------

    pub fn segments(&mut self) -> SegmentsView<'_, A> {
        SegmentsView::new(self)
    }

    pub fn params(&mut self) -> ParamsView<'_, A> {
        ParamsView::new(self)
    }
}

/// Parses a full `URI` / `relative-ref` into a fresh byte buffer and
/// `Parts` table, from scratch (used by `set_encoded_url`, which replaces
/// the whole buffer rather than resizing one component at a time).
fn parse_uri_reference(bytes: &[u8]) -> Result<(Vec<u8>, Parts), UrlError> {
    let mut parts = Parts::empty();
    let mut cursor = 0usize;

    // scheme
    if let Ok(end) = scheme_grammar::scheme(bytes, 0) {
        if bytes.get(end) == Some(&b':') {
            parts.set_end(ComponentId::Scheme, end + 1);
            cursor = end + 1;
        }
    }

    // authority
    if bytes.get(cursor) == Some(&b'/') && bytes.get(cursor + 1) == Some(&b'/') {
        let (m, authority_end): (AuthorityMatch, usize) =
            authority::authority(bytes, cursor + 2).map_err(UrlError::from)?;

        let (user_end, password_end) = if m.has_userinfo {
            let (_u_start, u_end, pw) = authority::split_userinfo(bytes, m.userinfo.0, m.userinfo.1);
            match pw {
                Some(_) => (u_end, m.userinfo.1 + 1),
                None => (u_end, u_end + 1),
            }
        } else {
            (cursor + 2, cursor + 2)
        };
        parts.set_end(ComponentId::User, user_end);
        parts.set_end(ComponentId::Password, password_end);
        parts.set_end(ComponentId::Host, m.host_range.1);
        parts.set_host_type(match m.host {
            HostMatch::Name => crate::parts::HostType::Name,
            HostMatch::Ipv4(_) => crate::parts::HostType::Ipv4,
            HostMatch::Ipv6(_) => crate::parts::HostType::Ipv6,
            HostMatch::IpvFuture => crate::parts::HostType::IpvFuture,
        });
        let port_end = if m.has_port { m.port.1 } else { m.host_range.1 };
        parts.set_end(ComponentId::Port, port_end);
        cursor = authority_end;
    } else {
        parts.set_end(ComponentId::User, cursor);
        parts.set_end(ComponentId::Password, cursor);
        parts.set_end(ComponentId::Host, cursor);
        parts.set_end(ComponentId::Port, cursor);
    }

    // path
    let has_authority = parts.has_authority();
    let has_scheme = parts.has_scheme();
    let path_start = cursor;
    let path_end = if has_authority {
        path::path_abempty(bytes, cursor).map_err(UrlError::from)?
    } else if bytes.get(cursor) == Some(&b'/') {
        path::path_absolute(bytes, cursor).map_err(UrlError::from)?
    } else if has_scheme {
        if bytes.get(cursor).is_none() || matches!(bytes.get(cursor), Some(b'?') | Some(b'#')) {
            cursor
        } else {
            path::path_rootless(bytes, cursor).map_err(UrlError::from)?
        }
    } else if bytes.get(cursor).is_none() || matches!(bytes.get(cursor), Some(b'?') | Some(b'#')) {
        cursor
    } else {
        path::path_noscheme(bytes, cursor).map_err(UrlError::from)?
    };
    parts.set_end(ComponentId::Path, path_end);
    parts.set_nseg(count_segments(&bytes[path_start..path_end]));
    cursor = path_end;

    // query
    let query_end = if bytes.get(cursor) == Some(&b'?') {
        let end = query_grammar::query(bytes, cursor + 1).map_err(UrlError::from)?;
        end
    } else {
        cursor
    };
    parts.set_end(ComponentId::Query, query_end);
    parts.set_nparam(count_params(&bytes[cursor..query_end]));
    cursor = query_end;

    // fragment
    let fragment_end = if bytes.get(cursor) == Some(&b'#') {
        query_grammar::query(bytes, cursor + 1).map_err(UrlError::from)?
    } else {
        cursor
    };
    parts.set_end(ComponentId::Fragment, fragment_end);
    cursor = fragment_end;

    if cursor != bytes.len() {
        return Err(UrlError::InvalidPart);
    }

    parts.set_end(ComponentId::End, bytes.len());

    let mut owned = bytes.to_vec();
    owned.shrink_to_fit();
    Ok((owned, parts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_1_parses_every_component() {
        let url = Url::parse("https://user:pw@example.com:8080/a/b?x=1#f").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.encoded_user(), "user");
        assert_eq!(url.encoded_password(), Some("pw"));
        assert_eq!(url.encoded_host(), "example.com");
        assert_eq!(url.port(), Some(8080));
        assert_eq!(url.encoded_path(), "/a/b");
        assert_eq!(url.encoded_query(), Some("x=1"));
        assert_eq!(url.encoded_fragment(), Some("f"));
        assert_eq!(url.nseg(), 2);
        assert_eq!(url.nparam(), 1);
        assert!(matches!(url.host(), Some(Host::Name("example.com"))));
    }

    #[test]
    fn scenario_3_set_user_empty_keeps_password_and_slashes() {
        let mut url = Url::parse("https://user:pw@example.com:8080/a/b?x=1#f").unwrap();
        url.set_user("").unwrap();
        assert_eq!(url.encoded_url(), "https://:pw@example.com:8080/a/b?x=1#f");
    }

    #[test]
    fn scenario_5_rootless_path_with_colon_segment() {
        let url = Url::parse("urn:isbn:0451450523").unwrap();
        assert_eq!(url.scheme(), "urn");
        assert_eq!(url.encoded_path(), "isbn:0451450523");
        assert!(url.host().is_none());
        assert_eq!(url.nseg(), 1);
    }

    #[test]
    fn scenario_6_set_host_synthesizes_authority() {
        let mut url = Url::new();
        url.set_host("[2001:db8::1]").unwrap();
        assert_eq!(url.encoded_url(), "//[2001:db8::1]");
        assert!(matches!(url.host(), Some(Host::Ipv6(_))));
    }

    #[test]
    fn scenario_7_leading_colon_in_encoded_password_is_rejected() {
        let mut url = Url::new();
        let before = url.encoded_url().to_owned();
        let err = url.set_encoded_password(":bad").unwrap_err();
        assert_eq!(err, UrlError::InvalidPart);
        assert_eq!(url.encoded_url(), before);
    }

    #[test]
    fn path_absolute_rejects_double_slash_without_authority() {
        let mut url = Url::new();
        assert_eq!(url.set_encoded_path("//not-an-authority"), Err(UrlError::InvalidPart));
    }

    #[test]
    fn segment_nc_rejects_colon_in_first_segment_without_scheme_or_authority() {
        let mut url = Url::new();
        assert_eq!(url.set_encoded_path("a:b/c"), Err(UrlError::InvalidPart));
    }

    #[test]
    fn short_percent_escape_is_rejected() {
        assert_eq!(Url::parse("http://host/a%2"), Err(UrlError::InvalidPart));
    }

    #[test]
    fn setting_port_on_authority_less_url_synthesizes_slashes() {
        let mut url = Url::new();
        url.set_port(Some(8080)).unwrap();
        assert_eq!(url.encoded_url(), "//:8080");
    }

    #[test]
    fn decoded_user_and_password_tolerate_non_utf8_bytes() {
        let url = Url::parse("http://%FF@h").unwrap();
        assert_eq!(url.user(), vec![0xFF]);

        let url = Url::parse("http://:%FF@h").unwrap();
        assert_eq!(url.password(), Some(vec![0xFF]));
    }

    #[test]
    fn port_out_of_u16_range_is_none_rather_than_panicking() {
        let url = Url::parse("http://h:99999").unwrap();
        assert_eq!(url.port(), None);
        assert_eq!(url.port_str(), Some("99999"));
    }

    #[test]
    fn clearing_bare_username_drops_the_dangling_at_delimiter() {
        let mut url = Url::parse("http://user@h").unwrap();
        url.set_user("").unwrap();
        assert_eq!(url.encoded_url(), "http://h");

        let mut url = Url::parse("//user@").unwrap();
        url.set_user("").unwrap();
        assert_eq!(url.encoded_url(), "");
    }
}
