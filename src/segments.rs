//! Path-segment facade over a [`Url`]'s path region (§4.6).
//!
//! The design notes call for cursors that store "indices, not pointers
//! into the buffer" since Rust's borrow checker already forbids holding a
//! view across a mutation of its owner. Taken to its conclusion, a bare
//! `usize` segment index *is* that cursor - there is no separate pointer
//! to keep in sync, so `SegmentsView` addresses segments by position
//! rather than replaying the source's bidirectional byte-offset cursor.
//! Every mutator funnels through [`Url::set_encoded_path`] so the path
//! shape (abempty / absolute / rootless / noscheme) is re-derived from
//! context exactly once, in one place.

use crate::alloc::Allocator;
use crate::charset::PCHAR;
use crate::error::UrlError;
use crate::pct;
use crate::url::Url;

/// Splits an encoded path into its segments, stripping the leading `/` of
/// a rooted path (`path-abempty` / `path-absolute`) without producing a
/// spurious leading empty segment. A path with no leading `/`
/// (`path-rootless` / `path-noscheme`) splits directly on `/`. An empty
/// path has zero segments, matching `nseg == 0` rather than `[""]`.
pub(crate) fn split(path: &str) -> Vec<&str> {
    if path.is_empty() {
        return Vec::new();
    }
    match path.strip_prefix('/') {
        Some(rest) => rest.split('/').collect(),
        None => path.split('/').collect(),
    }
}

/// A mutable view over the segments of a [`Url`]'s path, addressed by
/// position (`0..len()`) rather than by a standalone cursor type.
pub struct SegmentsView<'a, A: Allocator> {
    url: &'a mut Url<A>,
}

impl<'a, A: Allocator> SegmentsView<'a, A> {
    pub(crate) fn new(url: &'a mut Url<A>) -> Self {
        SegmentsView { url }
    }

    /// Number of segments (`nseg`).
    pub fn len(&self) -> usize {
        self.url.nseg()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The segment at `index`, still percent-encoded, or `None` if out of
    /// range.
    pub fn get(&self, index: usize) -> Option<&str> {
        split(self.url.encoded_path()).get(index).copied()
    }

    /// Iterates every segment in order, still percent-encoded.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> {
        split(self.url.encoded_path()).into_iter()
    }

    /// Appends `segment` (raw bytes, to be percent-encoded) at the end.
    pub fn push(&mut self, segment: &str) -> Result<(), UrlError> {
        let index = self.len();
        self.insert(index, segment)
    }

    /// Appends a pre-encoded segment at the end.
    pub fn push_encoded(&mut self, segment: &str) -> Result<(), UrlError> {
        let index = self.len();
        self.insert_encoded(index, segment)
    }

    /// Removes the last segment, if any. Returns `false` if the path had
    /// no segments to remove.
    pub fn pop(&mut self) -> bool {
        let n = self.len();
        if n == 0 {
            false
        } else {
            self.erase(n - 1).expect("erasing the last in-range segment cannot fail");
            true
        }
    }

    /// Inserts `segment` (raw bytes, percent-encoded by this call) before
    /// the segment currently at `index` (`index == len()` appends).
    pub fn insert(&mut self, index: usize, segment: &str) -> Result<(), UrlError> {
        let encoded = pct::encode_to_vec(&PCHAR, segment.as_bytes());
        let encoded = std::str::from_utf8(&encoded).expect("percent-encoding output is always ASCII");
        self.insert_encoded(index, encoded)
    }

    /// Inserts an already percent-encoded `segment` before `index`.
    pub fn insert_encoded(&mut self, index: usize, segment: &str) -> Result<(), UrlError> {
        pct::validate(&PCHAR, segment.as_bytes())?;
        let mut segs: Vec<&str> = split(self.url.encoded_path());
        if index > segs.len() {
            return Err(UrlError::InvalidPart);
        }
        segs.insert(index, segment);
        self.rebuild(&segs)
    }

    /// Removes the segment at `index`.
    pub fn erase(&mut self, index: usize) -> Result<(), UrlError> {
        self.erase_range(index..index + 1)
    }

    /// Removes every segment in `range`.
    pub fn erase_range(&mut self, range: std::ops::Range<usize>) -> Result<(), UrlError> {
        let mut segs: Vec<&str> = split(self.url.encoded_path());
        if range.start > range.end || range.end > segs.len() {
            return Err(UrlError::InvalidPart);
        }
        segs.drain(range);
        self.rebuild(&segs)
    }

    /// Replaces the segment at `index` with `segment` (raw bytes,
    /// percent-encoded by this call).
    pub fn replace(&mut self, index: usize, segment: &str) -> Result<(), UrlError> {
        let encoded = pct::encode_to_vec(&PCHAR, segment.as_bytes());
        let encoded = std::str::from_utf8(&encoded).expect("percent-encoding output is always ASCII");
        self.replace_encoded(index, encoded)
    }

    /// Replaces the segment at `index` with an already percent-encoded
    /// `segment`.
    pub fn replace_encoded(&mut self, index: usize, segment: &str) -> Result<(), UrlError> {
        pct::validate(&PCHAR, segment.as_bytes())?;
        let mut segs: Vec<&str> = split(self.url.encoded_path());
        if index >= segs.len() {
            return Err(UrlError::InvalidPart);
        }
        segs[index] = segment;
        self.rebuild(&segs)
    }

    /// Reassembles `segs` into a path string honoring the current shape
    /// (rooted iff the path already has an authority or already started
    /// with `/`) and hands it to [`Url::set_encoded_path`], which picks
    /// the exact ABNF production and recomputes `nseg`.
    fn rebuild(&mut self, segs: &[&str]) -> Result<(), UrlError> {
        let rooted = self.url.buffer().parts().has_authority() || self.url.encoded_path().starts_with('/');
        let mut new_path = String::new();
        if !segs.is_empty() {
            if rooted {
                new_path.push('/');
            }
            new_path.push_str(&segs.join("/"));
        }
        self.url.set_encoded_path(&new_path)
    }
}
