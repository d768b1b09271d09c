//! Query-parameter facade over a [`Url`]'s query region (§4.7): splits on
//! `&` and, within each parameter, on the first `=`.
//!
//! Like [`crate::segments`], mutation is addressed by position rather than
//! by a standalone cursor, and every mutator reassembles the whole query
//! and replays it through [`Url::set_encoded_query`] so `nparam` is always
//! derived fresh rather than tracked by hand in two places.

use crate::alloc::Allocator;
use crate::charset::{QKEY, QVAL};
use crate::error::UrlError;
use crate::pct;
use crate::url::Url;

/// Splits an encoded query (without its leading `?`) into `(key, value)`
/// pairs. A parameter with no `=` has an empty value slice and is
/// distinguished from "key=" only by [`ParamsView::get`] returning the
/// value half either way - this crate does not track presence of the
/// bare `=` once split, since lookups only ever need exact-byte key
/// equality, never that distinction.
///
/// A present-but-empty query (`Some("")`, i.e. a lone `?`) still yields a
/// single `("", "")` pair, matching `nparam == 1` for that same region
/// (§4.7/P5: a query region counts as `1 + #'&'` as soon as it is
/// present at all, even if its text is empty) - only `None` (no `?` at
/// all) yields zero parameters.
pub(crate) fn split(query: Option<&str>) -> Vec<(&str, &str)> {
    match query {
        None => Vec::new(),
        Some(q) => q
            .split('&')
            .map(|token| match token.split_once('=') {
                Some((k, v)) => (k, v),
                None => (token, ""),
            })
            .collect(),
    }
}

/// A mutable view over the `key=value` parameters of a [`Url`]'s query.
pub struct ParamsView<'a, A: Allocator> {
    url: &'a mut Url<A>,
}

impl<'a, A: Allocator> ParamsView<'a, A> {
    pub(crate) fn new(url: &'a mut Url<A>) -> Self {
        ParamsView { url }
    }

    /// Number of parameters (`nparam`).
    pub fn len(&self) -> usize {
        self.url.nparam()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates every `(encoded_key, encoded_value)` pair in order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&str, &str)> {
        split(self.url.encoded_query()).into_iter()
    }

    /// The `(key, value)` pair at `index`, or `None` if out of range.
    pub fn get_index(&self, index: usize) -> Option<(&str, &str)> {
        split(self.url.encoded_query()).get(index).copied()
    }

    /// `true` iff some parameter's encoded key equals `key` exactly (no
    /// decoding - lookups compare the encoded form).
    pub fn contains(&self, key: &str) -> bool {
        split(self.url.encoded_query()).iter().any(|&(k, _)| k == key)
    }

    /// Number of parameters whose encoded key equals `key` exactly.
    pub fn count(&self, key: &str) -> usize {
        split(self.url.encoded_query()).iter().filter(|&&(k, _)| k == key).count()
    }

    /// The value of the first parameter whose encoded key equals `key`
    /// exactly, or `None` if absent. "Absent" and "present but empty" are
    /// observably different states once a query is mutated in place (see
    /// DESIGN.md), so this returns `Option<&str>` rather than defaulting
    /// an absent key to an empty string.
    pub fn get(&self, key: &str) -> Option<&str> {
        split(self.url.encoded_query()).into_iter().find(|&(k, _)| k == key).map(|(_, v)| v)
    }

    /// Index of the first parameter whose encoded key equals `key`
    /// exactly.
    pub fn find(&self, key: &str) -> Option<usize> {
        split(self.url.encoded_query()).iter().position(|&(k, _)| k == key)
    }

    /// Appends a `(key, value)` pair (raw bytes, percent-encoded by this
    /// call).
    pub fn push(&mut self, key: &str, value: &str) -> Result<(), UrlError> {
        let key = pct::encode_to_vec(&QKEY, key.as_bytes());
        let value = pct::encode_to_vec(&QVAL, value.as_bytes());
        self.push_encoded(
            std::str::from_utf8(&key).expect("percent-encoding output is always ASCII"),
            std::str::from_utf8(&value).expect("percent-encoding output is always ASCII"),
        )
    }

    /// Appends an already percent-encoded `(key, value)` pair.
    pub fn push_encoded(&mut self, key: &str, value: &str) -> Result<(), UrlError> {
        let index = self.len();
        self.insert_encoded(index, key, value)
    }

    /// Inserts a `(key, value)` pair (raw bytes, percent-encoded by this
    /// call) before position `index` (`index == len()` appends).
    pub fn insert(&mut self, index: usize, key: &str, value: &str) -> Result<(), UrlError> {
        let key = pct::encode_to_vec(&QKEY, key.as_bytes());
        let value = pct::encode_to_vec(&QVAL, value.as_bytes());
        self.insert_encoded(
            index,
            std::str::from_utf8(&key).expect("percent-encoding output is always ASCII"),
            std::str::from_utf8(&value).expect("percent-encoding output is always ASCII"),
        )
    }

    /// Inserts an already percent-encoded `(key, value)` pair before
    /// `index`.
    pub fn insert_encoded(&mut self, index: usize, key: &str, value: &str) -> Result<(), UrlError> {
        pct::validate(&QKEY, key.as_bytes())?;
        pct::validate(&QVAL, value.as_bytes())?;
        let mut params = split(self.url.encoded_query());
        if index > params.len() {
            return Err(UrlError::InvalidPart);
        }
        params.insert(index, (key, value));
        self.rebuild(&params)
    }

    /// Removes the parameter at `index`.
    pub fn erase(&mut self, index: usize) -> Result<(), UrlError> {
        let mut params = split(self.url.encoded_query());
        if index >= params.len() {
            return Err(UrlError::InvalidPart);
        }
        params.remove(index);
        self.rebuild(&params)
    }

    /// Removes every parameter whose encoded key equals `key` exactly.
    /// Returns the number removed.
    pub fn remove(&mut self, key: &str) -> Result<usize, UrlError> {
        let mut params = split(self.url.encoded_query());
        let before = params.len();
        params.retain(|&(k, _)| k != key);
        let removed = before - params.len();
        if removed > 0 {
            self.rebuild(&params)?;
        }
        Ok(removed)
    }

    /// Replaces the value of the parameter at `index`, keeping its key.
    pub fn replace(&mut self, index: usize, value: &str) -> Result<(), UrlError> {
        let value = pct::encode_to_vec(&QVAL, value.as_bytes());
        self.replace_encoded(index, std::str::from_utf8(&value).expect("percent-encoding output is always ASCII"))
    }

    /// Replaces the value of the parameter at `index` with an already
    /// percent-encoded value, keeping its key.
    pub fn replace_encoded(&mut self, index: usize, value: &str) -> Result<(), UrlError> {
        pct::validate(&QVAL, value.as_bytes())?;
        let mut params = split(self.url.encoded_query());
        if index >= params.len() {
            return Err(UrlError::InvalidPart);
        }
        params[index].1 = value;
        self.rebuild(&params)
    }

    fn rebuild(&mut self, params: &[(&str, &str)]) -> Result<(), UrlError> {
        if params.is_empty() {
            return self.url.clear_query();
        }
        let mut new_query = String::new();
        for (i, (k, v)) in params.iter().enumerate() {
            if i > 0 {
                new_query.push('&');
            }
            new_query.push_str(k);
            if !v.is_empty() {
                new_query.push('=');
                new_query.push_str(v);
            }
        }
        self.url.set_encoded_query(&new_query)
    }
}

#[cfg(test)]
mod tests {
    use crate::url::Url;

    #[test]
    fn split_handles_valueless_and_multi_params() {
        assert_eq!(super::split(Some("a=1&b=2")), vec![("a", "1"), ("b", "2")]);
        assert_eq!(super::split(Some("flag")), vec![("flag", "")]);
        assert_eq!(super::split(None), Vec::<(&str, &str)>::new());
    }

    #[test]
    fn present_but_empty_query_is_one_param_matching_nparam() {
        let mut url = Url::parse("http://h/?").unwrap();
        assert_eq!(url.nparam(), 1);
        assert_eq!(super::split(url.encoded_query()), vec![("", "")]);
        assert_eq!(url.params().len(), 1);
        assert_eq!(url.params().get_index(0), Some(("", "")));
    }

    #[test]
    fn lookup_compares_encoded_key_exactly() {
        let url = Url::parse("http://h/?a=1&b=2&a=3").unwrap();
        assert!(url.params().contains("a"));
        assert_eq!(url.params().count("a"), 2);
        assert_eq!(url.params().get("a"), Some("1"));
        assert_eq!(url.params().get("missing"), None);
        assert_eq!(url.params().find("b"), Some(1));
    }

    #[test]
    fn push_then_remove_round_trip() {
        let mut url = Url::parse("http://h").unwrap();
        url.params().push("x", "1").unwrap();
        url.params().push("y", "2").unwrap();
        assert_eq!(url.encoded_query(), Some("x=1&y=2"));
        assert_eq!(url.params().remove("x").unwrap(), 1);
        assert_eq!(url.encoded_query(), Some("y=2"));
    }

    #[test]
    fn erasing_every_param_clears_the_query() {
        let mut url = Url::parse("http://h/?x=1").unwrap();
        url.params().erase(0).unwrap();
        assert_eq!(url.encoded_query(), None);
        assert_eq!(url.nparam(), 0);
    }
}
