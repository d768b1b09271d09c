//! The offset table that turns a flat percent-encoded byte buffer into a
//! URI: nine cursors marking the boundaries between [`ComponentId`]s,
//! walked by [`crate::buffer::UrlBuffer`] on every read and repaired by its
//! `resize` primitive on every write.
//!
//! No component ever stores its own delimiter *except* `User` and
//! `Password`, which is what lets four distinct userinfo shapes collapse
//! into two byte ranges instead of a cloud of presence flags:
//!
//! - no authority at all: `User` range is empty (no leading `//`).
//! - authority, no userinfo: `User` range is exactly `//`.
//! - authority, bare username: `User` range is `//user`, `Password` range
//!   is the trailing `@`.
//! - authority, username and (possibly empty) password: `Password` range
//!   is `:pass@` or `:@`.
//!
//! So `has_authority()` is just "the `User` range is at least 2 bytes
//! long", and "has a password component" is "the `Password` range is
//! non-empty", with no separate boolean to keep in sync.

use std::ops::Range;

/// Identifies one of the nine boundaries a [`Parts`] table tracks. Ids are
/// laid out in buffer order, `Scheme` first and `End` last, so `next()`
/// always means "the component immediately to the right".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum ComponentId {
    Scheme,
    User,
    Password,
    Host,
    Port,
    Path,
    Query,
    Fragment,
    End,
}

impl ComponentId {
    pub(crate) const COUNT: usize = 9;

    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// The component that immediately follows this one in the buffer, or
    /// `None` for `End`.
    pub(crate) const fn next(self) -> Option<ComponentId> {
        match self {
            ComponentId::Scheme => Some(ComponentId::User),
            ComponentId::User => Some(ComponentId::Password),
            ComponentId::Password => Some(ComponentId::Host),
            ComponentId::Host => Some(ComponentId::Port),
            ComponentId::Port => Some(ComponentId::Path),
            ComponentId::Path => Some(ComponentId::Query),
            ComponentId::Query => Some(ComponentId::Fragment),
            ComponentId::Fragment => Some(ComponentId::End),
            ComponentId::End => None,
        }
    }
}

/// Which grammar production the `Host` component's raw bytes satisfy. Kept
/// alongside the offsets so a host read-back never has to re-run the
/// `IP-literal` / `IPv4address` / `reg-name` dispatch just to answer "is
/// this an address".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HostType {
    Name,
    Ipv4,
    Ipv6,
    IpvFuture,
}

/// The offset table itself: one cumulative end-offset per [`ComponentId`],
/// plus the host's recognized shape.
///
/// `offsets[id]` is the exclusive end of that component's byte range; its
/// start is `offsets[id - 1]` (or `0` for `Scheme`). `offsets[End]` is
/// always the length of the live part of the buffer (the byte before the
/// NUL sentinel `crate::buffer::UrlBuffer` maintains).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Parts {
    offsets: [usize; ComponentId::COUNT],
    host_type: HostType,
    /// Number of path segments. Kept as a counter rather than recomputed
    /// on every read because `SegmentsView` mutators touch it directly as
    /// they insert/erase; see §4.6.
    nseg: usize,
    /// Number of query parameters (`?`-introduced key tokens). Same
    /// rationale as `nseg`.
    nparam: usize,
}

impl Parts {
    /// The empty-URI table: every component is a zero-length range at
    /// offset zero.
    pub(crate) fn empty() -> Self {
        Parts {
            offsets: [0; ComponentId::COUNT],
            host_type: HostType::Name,
            nseg: 0,
            nparam: 0,
        }
    }

    pub(crate) fn host_type(&self) -> HostType {
        self.host_type
    }

    pub(crate) fn set_host_type(&mut self, host_type: HostType) {
        self.host_type = host_type;
    }

    pub(crate) fn nseg(&self) -> usize {
        self.nseg
    }

    pub(crate) fn set_nseg(&mut self, nseg: usize) {
        self.nseg = nseg;
    }

    pub(crate) fn nparam(&self) -> usize {
        self.nparam
    }

    pub(crate) fn set_nparam(&mut self, nparam: usize) {
        self.nparam = nparam;
    }

    /// Exclusive end offset of `id`.
    pub(crate) fn end(&self, id: ComponentId) -> usize {
        self.offsets[id.index()]
    }

    pub(crate) fn set_end(&mut self, id: ComponentId, offset: usize) {
        self.offsets[id.index()] = offset;
    }

    /// Inclusive start offset of `id`: the previous component's end, or
    /// zero for `Scheme`.
    pub(crate) fn start(&self, id: ComponentId) -> usize {
        match id.index() {
            0 => 0,
            k => self.offsets[k - 1],
        }
    }

    pub(crate) fn len(&self, id: ComponentId) -> usize {
        self.end(id) - self.start(id)
    }

    pub(crate) fn range(&self, id: ComponentId) -> Range<usize> {
        self.start(id)..self.end(id)
    }

    /// Total length of the live (non-sentinel) buffer contents.
    pub(crate) fn total_len(&self) -> usize {
        self.end(ComponentId::End)
    }

    /// Shifts every boundary at or after `from` by `delta` (which may be
    /// negative, encoded as `i64`). Called by `UrlBuffer::resize` once the
    /// underlying bytes have already been moved; this only repairs the
    /// index.
    pub(crate) fn shift_from(&mut self, from: ComponentId, delta: i64) {
        for k in from.index()..ComponentId::COUNT {
            let cur = self.offsets[k] as i64;
            self.offsets[k] = (cur + delta) as usize;
        }
    }

    /// `true` iff the buffer carries an authority (its `User` range
    /// starts with the `//` marker). A host can be present with an empty
    /// name (`file:///tmp`) while still carrying an authority, which is
    /// exactly what this captures and a `Host`-length check would not.
    pub(crate) fn has_authority(&self) -> bool {
        self.len(ComponentId::User) >= 2
    }

    /// `true` iff a `:password` (possibly empty) segment is present,
    /// i.e. the `Password` range holds more than the bare `@` delimiter.
    pub(crate) fn has_password(&self) -> bool {
        self.len(ComponentId::Password) >= 2
    }

    /// `true` iff any userinfo at all - bare username or username with
    /// password - is present. A bare username still needs somewhere to
    /// hold the `@` delimiter, so it shows up as `Password` length 1, not
    /// as a longer `User` range alone.
    pub(crate) fn has_userinfo(&self) -> bool {
        self.len(ComponentId::User) > 2 || self.len(ComponentId::Password) >= 1
    }

    pub(crate) fn has_port(&self) -> bool {
        self.len(ComponentId::Port) > 0
    }

    pub(crate) fn has_scheme(&self) -> bool {
        self.len(ComponentId::Scheme) > 0
    }

    pub(crate) fn has_query(&self) -> bool {
        self.len(ComponentId::Query) > 0
    }

    pub(crate) fn has_fragment(&self) -> bool {
        self.len(ComponentId::Fragment) > 0
    }
}

/// Segment count for a path region given whether it begins with `/`
/// (`path-abempty` / `path-absolute`, each segment introduced by a `/`)
/// or not (`path-rootless` / `path-noscheme`, one implicit leading
/// segment plus one per later `/`). P4 of the design's testable
/// properties.
pub(crate) fn count_segments(path: &[u8]) -> usize {
    if path.is_empty() {
        return 0;
    }
    let slash_count = path.iter().filter(|&&b| b == b'/').count();
    if path[0] == b'/' {
        slash_count
    } else {
        slash_count + 1
    }
}

/// Parameter count for a query region that includes its leading `?` (or
/// is empty). P5 of the design's testable properties.
pub(crate) fn count_params(query: &[u8]) -> usize {
    if query.is_empty() {
        return 0;
    }
    1 + query.iter().filter(|&&b| b == b'&').count()
}

#[cfg(test)]
mod counting_tests {
    use super::*;

    #[test]
    fn segment_counts() {
        assert_eq!(count_segments(b""), 0);
        assert_eq!(count_segments(b"/a/b"), 2);
        assert_eq!(count_segments(b"a/b/c"), 3);
        assert_eq!(count_segments(b"isbn:0451450523"), 1);
    }

    #[test]
    fn param_counts() {
        assert_eq!(count_params(b""), 0);
        assert_eq!(count_params(b"?x=1"), 1);
        assert_eq!(count_params(b"?x=1&y=2"), 2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_of_scheme_is_always_zero() {
        let parts = Parts::empty();
        assert_eq!(parts.start(ComponentId::Scheme), 0);
    }

    #[test]
    fn shift_from_moves_only_later_boundaries() {
        let mut parts = Parts::empty();
        parts.set_end(ComponentId::Scheme, 5);
        parts.set_end(ComponentId::User, 5);
        parts.set_end(ComponentId::Password, 5);
        parts.set_end(ComponentId::Host, 10);
        parts.set_end(ComponentId::Port, 10);
        parts.set_end(ComponentId::Path, 10);
        parts.set_end(ComponentId::Query, 10);
        parts.set_end(ComponentId::Fragment, 10);
        parts.set_end(ComponentId::End, 10);

        parts.shift_from(ComponentId::Host, 3);
        assert_eq!(parts.end(ComponentId::Scheme), 5);
        assert_eq!(parts.end(ComponentId::Host), 13);
        assert_eq!(parts.end(ComponentId::End), 13);
    }

    #[test]
    fn authority_presence_tracks_user_range_length() {
        let mut parts = Parts::empty();
        assert!(!parts.has_authority());
        parts.set_end(ComponentId::User, 2);
        assert!(parts.has_authority());
        assert!(!parts.has_userinfo());
    }
}
