//! `serde` support, gated behind the `serde` feature.
//!
//! A plain string in both directions, with a `Visitor` on the
//! deserializing side so owned and borrowed input are handled without an
//! extra allocation when the format hands back a `&str` directly. `Url`
//! always owns its buffer (it has to, to stay mutable), so this
//! deserializes into an owned `Url` rather than a reference.

use std::fmt;

use serde::de::{Error, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::alloc::StdAllocator;
use crate::url::Url;

impl Serialize for Url<StdAllocator> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.encoded_url())
    }
}

struct UrlVisitor;

impl<'de> Visitor<'de> for UrlVisitor {
    type Value = Url<StdAllocator>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a string containing a valid RFC 3986 URI reference")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Url::parse(v).map_err(E::custom)
    }

    fn visit_borrowed_str<E>(self, v: &'de str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        self.visit_str(v)
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: Error,
    {
        self.visit_str(&v)
    }
}

impl<'de> Deserialize<'de> for Url<StdAllocator> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(UrlVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_json() {
        let url = Url::parse("https://user:pw@example.com:8080/a/b?x=1#f").unwrap();
        let json = serde_json::to_string(&url).unwrap();
        assert_eq!(json, "\"https://user:pw@example.com:8080/a/b?x=1#f\"");
        let back: Url<StdAllocator> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.encoded_url(), url.encoded_url());
    }

    #[test]
    fn rejects_invalid_uri_text() {
        let err = serde_json::from_str::<Url<StdAllocator>>("\"%\"").unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}
