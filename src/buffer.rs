//! The owned byte buffer backing a [`crate::Url`]: a contiguous
//! percent-encoded byte sequence plus the [`Parts`] offset table that
//! slices it into components, with a single `O(total length)` primitive,
//! [`UrlBuffer::resize`], that every setter in `crate::url` funnels
//! through to replace one component's bytes without disturbing any other
//! component's content.
//!
//! Shifts the tail of the buffer to open or close a gap, then lets the
//! caller write the new bytes into the gap, checking an [`Allocator`]
//! capacity ceiling before mutating and repairing a [`Parts`] table
//! rather than a single `Range`.

use crate::alloc::{Allocator, StdAllocator};
use crate::error::UrlError;
use crate::parts::{ComponentId, Parts};
use std::ops::Range;

/// A resizable, percent-encoded URI buffer: `Vec<u8>` contents plus the
/// [`Parts`] index describing where each component lives within them.
///
/// Always kept NUL-terminated one byte past its logical end, purely so
/// [`UrlBuffer::as_bytes_with_nul`]-style FFI interop never needs to
/// allocate; the sentinel plays no role in parsing or resizing.
#[derive(Debug, Clone)]
pub struct UrlBuffer<A: Allocator = StdAllocator> {
    bytes: Vec<u8>,
    parts: Parts,
    alloc: A,
}

impl UrlBuffer<StdAllocator> {
    pub fn new() -> Self {
        Self::with_allocator(StdAllocator)
    }
}

impl Default for UrlBuffer<StdAllocator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Allocator> UrlBuffer<A> {
    pub fn with_allocator(alloc: A) -> Self {
        UrlBuffer {
            bytes: vec![0u8],
            parts: Parts::empty(),
            alloc,
        }
    }

    pub(crate) fn parts(&self) -> &Parts {
        &self.parts
    }

    pub(crate) fn parts_mut(&mut self) -> &mut Parts {
        &mut self.parts
    }

    /// The live (non-sentinel) bytes of the buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.parts.total_len()]
    }

    /// The live bytes followed by the trailing NUL sentinel, for FFI
    /// interop that expects a C string.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.bytes[..=self.parts.total_len()]
    }

    pub(crate) fn component(&self, id: ComponentId) -> &[u8] {
        &self.bytes[self.parts.range(id)]
    }

    pub(crate) fn component_mut(&mut self, id: ComponentId) -> &mut [u8] {
        let range = self.parts.range(id);
        &mut self.bytes[range]
    }

    /// Replaces the byte range spanning `[first, last]` (inclusive of both
    /// endpoints - pass the same id twice to replace a single component)
    /// with `new_len` freshly-allocated bytes, shifting every later
    /// component's offsets to match, and returns the byte range the
    /// caller should now write its new content into.
    ///
    /// This is the one place the buffer ever grows or shrinks. It does
    /// not validate that what gets written into the returned range is
    /// well-formed; callers in `crate::url` write first, then adjust
    /// `first`/`last`'s internal boundary if they spanned more than one
    /// component (e.g. splitting `Password` out of a `User` write).
    pub(crate) fn resize(
        &mut self,
        first: ComponentId,
        last: ComponentId,
        new_len: usize,
    ) -> Result<Range<usize>, UrlError> {
        let range = self.parts.start(first)..self.parts.end(last);
        let old_len = range.end - range.start;

        if new_len != old_len {
            let required_total = self.bytes.len() - old_len + new_len;
            if required_total - 1 > self.alloc.max_capacity() {
                return Err(UrlError::TooLarge);
            }

            let tail_len = self.bytes.len() - range.end;
            let new_end = range.start + new_len;

            if old_len > new_len {
                for i in 0..tail_len {
                    self.bytes[new_end + i] = self.bytes[range.end + i];
                }
                self.bytes.truncate(new_end + tail_len);
            } else {
                let needed = new_end + tail_len;
                if needed > self.bytes.capacity() {
                    let grown = self.alloc.grown_capacity(self.bytes.capacity(), needed);
                    self.bytes.reserve(grown.saturating_sub(self.bytes.len()));
                }
                self.bytes.resize(needed, 0);
                for i in 0..tail_len {
                    self.bytes[new_end + tail_len - i - 1] = self.bytes[range.end + tail_len - i - 1];
                }
            }

            let delta = new_len as i64 - old_len as i64;
            self.parts.shift_from(first, delta);
        }

        Ok(range.start..range.start + new_len)
    }

    /// Shorthand for [`UrlBuffer::resize`] with `first == last == id`.
    pub(crate) fn resize_one(&mut self, id: ComponentId, new_len: usize) -> Result<Range<usize>, UrlError> {
        self.resize(id, id, new_len)
    }

    /// Writes `content` into the buffer at `id`, growing or shrinking the
    /// component's range to fit.
    pub(crate) fn set_component(&mut self, id: ComponentId, content: &[u8]) -> Result<(), UrlError> {
        let range = self.resize_one(id, content.len())?;
        self.bytes[range].copy_from_slice(content);
        Ok(())
    }

    /// Writes `content` spanning `[first, last]` in one pass, used when a
    /// setter needs to redraw a delimiter shared between two components
    /// (e.g. rewriting both `User` and `Password` together to move where
    /// the `@` falls).
    pub(crate) fn set_components(
        &mut self,
        first: ComponentId,
        last: ComponentId,
        content: &[u8],
    ) -> Result<(), UrlError> {
        let range = self.resize(first, last, content.len())?;
        self.bytes[range].copy_from_slice(content);
        Ok(())
    }

    /// Wholesale replacement used by `Url::set_encoded_url`: the caller
    /// has already parsed a brand new `Parts` table against `bytes` and
    /// just needs it installed, capacity permitting.
    pub(crate) fn replace_all(&mut self, bytes: Vec<u8>, parts: Parts) -> Result<(), UrlError> {
        if bytes.len() > self.alloc.max_capacity() {
            return Err(UrlError::TooLarge);
        }
        self.bytes = bytes;
        self.bytes.push(0);
        self.parts = parts;
        Ok(())
    }
}
