//! A mutable, in-place implementation of
//! [RFC 3986](https://tools.ietf.org/html/rfc3986) Uniform Resource
//! Identifiers: a single percent-encoded byte buffer plus a small offset
//! table that slices it into components, so that every component
//! (scheme, userinfo, host, port, path, query, fragment, and the
//! individual path segments and query parameters within them) can be
//! read as a borrowed view and overwritten in place.
//!
//! ```text
//!     foo://user:pw@example.com:8042/over/there?name=ferret#nose
//!     \_/   \_____________________/\_________/ \_________/ \__/
//!      |              |                |            |        |
//!   scheme         authority          path         query   fragment
//! ```
//!
//! The core type is [`Url`]: a resizable buffer plus its component
//! offsets (the [`buffer::UrlBuffer`] and [`parts::Parts`] this crate
//! builds on). Unlike a string-returning parser, setting a component on a
//! `Url` resizes and re-delimits the underlying buffer in place, shifting
//! every later component's bytes to make room, so the whole URI is
//! rebuilt with one allocation at most per call.
//!
//! ## Basic usage
//!
//! ```rust
//! use urlbuf::Url;
//!
//! # fn main() -> Result<(), urlbuf::UrlError> {
//! let mut url = Url::parse("https://user:pw@example.com:8080/a/b?x=1#f")?;
//!
//! assert_eq!(url.scheme(), "https");
//! assert_eq!(url.encoded_host(), "example.com");
//! assert_eq!(url.port(), Some(8080));
//! assert_eq!(url.encoded_path(), "/a/b");
//!
//! url.set_user("")?;
//! assert_eq!(url.encoded_url(), "https://:pw@example.com:8080/a/b?x=1#f");
//! # Ok(())
//! # }
//! ```
//!
//! ## Segments and parameters
//!
//! The path and query each expose a mutable, position-addressed view:
//!
//! ```rust
//! # use urlbuf::Url;
//! # fn main() -> Result<(), urlbuf::UrlError> {
//! let mut url = Url::parse("/path/file.txt")?;
//! let last = url.segments().len() - 1;
//! url.segments().insert(last, "to")?;
//! assert_eq!(url.encoded_path(), "/path/to/file.txt");
//!
//! let mut url = Url::parse("http://h/?a=1")?;
//! url.params().push("b", "2")?;
//! assert_eq!(url.encoded_query(), Some("a=1&b=2"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Reference resolution
//!
//! [RFC 3986 §5](https://tools.ietf.org/html/rfc3986#section-5) reference
//! resolution is provided as a thin, self-contained addition on top of the
//! public `Url` API (see [`resolve`]):
//!
//! ```rust
//! use urlbuf::{resolve, Url};
//!
//! # fn main() -> Result<(), urlbuf::UrlError> {
//! let base = Url::parse("http://a/b/c/d;p?q")?;
//! let mut reference = Url::parse("g;x=1/../y")?;
//! resolve::resolve(&mut reference, &base)?;
//! assert_eq!(reference.encoded_url(), "http://a/b/c/y");
//! # Ok(())
//! # }
//! ```
//!
//! ## What this crate does not do
//!
//! No normalization beyond scheme lower-casing ([`Url::normalize_scheme`])
//! and the structural constraints the setters themselves enforce; no
//! Unicode/IDNA processing; no scheme-specific interpretation. Networking,
//! DNS resolution, and HTTP are entirely out of scope - this crate only
//! ever manipulates the URI text.

pub mod alloc;
pub mod buffer;
pub(crate) mod charset;
mod error;
pub(crate) mod grammar;
mod host;
pub mod params;
pub(crate) mod parts;
pub(crate) mod pct;
pub mod resolve;
#[cfg(feature = "serde")]
mod serde;
pub mod segments;
mod url;

pub use alloc::{Allocator, StdAllocator};
pub use buffer::UrlBuffer;
pub use error::UrlError;
pub use host::Host;
pub use params::ParamsView;
pub use segments::SegmentsView;
pub use url::Url;
