//! RFC 3986 §5 reference resolution.
//!
//! Explicitly out of scope for the core buffer-and-index engine (see
//! `lib.rs`), but it is a thin, generically useful consumer of the public
//! `Url` API - it reads whole components off a reference and a base,
//! reassembles a resolved URI as text per §5.3, and parses the result
//! back through [`Url::parse`]. No new offset-table or grammar machinery
//! is needed, which is why it lives in its own module rather than as
//! methods on `Url` itself.
//!
//! Walks the scheme/authority/path/query decision tree against `Url`'s
//! already-public encoded-component accessors rather than raw byte
//! splicing. Does not implement Errata 4547's abnormal dot-segment
//! handling for scheme-relative paths with no authority; tracked as an
//! open question in DESIGN.md.

use crate::alloc::Allocator;
use crate::error::UrlError;
use crate::url::Url;

/// Reassembles the `[ userinfo "@" ] host [ ":" port ]` text of a `Url`'s
/// authority, or `None` if it has none.
fn authority_text<A: Allocator>(url: &Url<A>) -> Option<String> {
    let parts = url.buffer().parts();
    if !parts.has_authority() {
        return None;
    }
    let mut s = String::new();
    if parts.has_userinfo() {
        s.push_str(url.encoded_user());
        if let Some(password) = url.encoded_password() {
            s.push(':');
            s.push_str(password);
        }
        s.push('@');
    }
    s.push_str(url.encoded_host());
    if let Some(port) = url.port_str() {
        s.push(':');
        s.push_str(port);
    }
    Some(s)
}

/// Removes `.` and `..` dot-segments from `path`, per RFC 3986 §5.2.4.
pub(crate) fn remove_dot_segments(path: &str) -> String {
    let mut input = path;
    let mut output = String::new();

    while !input.is_empty() {
        if let Some(rest) = input.strip_prefix("../") {
            input = rest;
        } else if let Some(rest) = input.strip_prefix("./") {
            input = rest;
        } else if input.starts_with("/./") {
            input = &input[2..];
        } else if input == "/." {
            input = "/";
        } else if input.starts_with("/../") {
            input = &input[3..];
            pop_segment(&mut output);
        } else if input == "/.." {
            input = "/";
            pop_segment(&mut output);
        } else if input == "." || input == ".." {
            input = "";
        } else {
            take_segment(&mut input, &mut output);
        }
    }

    output
}

fn pop_segment(output: &mut String) {
    match output.rfind('/') {
        Some(idx) => output.truncate(idx),
        None => output.clear(),
    }
}

fn take_segment<'a>(input: &mut &'a str, output: &mut String) {
    let rest = input.strip_prefix('/').unwrap_or(input);
    let seg_len = rest.find('/').unwrap_or(rest.len());
    let consumed = (input.len() - rest.len()) + seg_len;
    output.push_str(&input[..consumed]);
    *input = &input[consumed..];
}

/// RFC 3986 §5.3 path merge: combines a base path with a relative
/// reference path when the reference carries no authority of its own.
fn merge(base_has_authority: bool, base_path: &str, ref_path: &str) -> String {
    if base_has_authority && base_path.is_empty() {
        format!("/{ref_path}")
    } else {
        match base_path.rfind('/') {
            Some(idx) => format!("{}{}", &base_path[..=idx], ref_path),
            None => ref_path.to_string(),
        }
    }
}

/// Resolves `reference` against `base` per RFC 3986 §5.3, returning the
/// resolved URI as a fresh [`Url`]. `base` must itself be an absolute URI
/// (it must carry a scheme); this is not re-validated here.
pub fn resolved<A: Allocator, B: Allocator>(reference: &Url<A>, base: &Url<B>) -> Result<Url, UrlError> {
    let ref_has_scheme = !reference.scheme().is_empty();
    let ref_authority = authority_text(reference);
    let base_authority = authority_text(base);
    let base_has_authority = base.buffer().parts().has_authority();

    let scheme: String;
    let authority: Option<String>;
    let path: String;
    let query: Option<String>;

    if ref_has_scheme {
        scheme = reference.scheme().to_string();
        authority = ref_authority;
        path = remove_dot_segments(reference.encoded_path());
        query = reference.encoded_query().map(str::to_string);
    } else if ref_authority.is_some() {
        scheme = base.scheme().to_string();
        authority = ref_authority;
        path = remove_dot_segments(reference.encoded_path());
        query = reference.encoded_query().map(str::to_string);
    } else if reference.encoded_path().is_empty() {
        scheme = base.scheme().to_string();
        authority = base_authority;
        path = base.encoded_path().to_string();
        query = reference
            .encoded_query()
            .map(str::to_string)
            .or_else(|| base.encoded_query().map(str::to_string));
    } else {
        scheme = base.scheme().to_string();
        authority = base_authority;
        path = if reference.encoded_path().starts_with('/') {
            remove_dot_segments(reference.encoded_path())
        } else {
            remove_dot_segments(&merge(base_has_authority, base.encoded_path(), reference.encoded_path()))
        };
        query = reference.encoded_query().map(str::to_string);
    }

    let mut out = String::new();
    out.push_str(&scheme);
    out.push(':');
    if let Some(authority) = &authority {
        out.push_str("//");
        out.push_str(authority);
    }
    out.push_str(&path);
    if let Some(query) = &query {
        out.push('?');
        out.push_str(query);
    }
    if let Some(fragment) = reference.encoded_fragment() {
        out.push('#');
        out.push_str(fragment);
    }

    Url::parse(&out)
}

/// In-place variant of [`resolved`]: replaces `reference` with its
/// resolution against `base`.
pub fn resolve<A: Allocator>(reference: &mut Url<A>, base: &Url<impl Allocator>) -> Result<(), UrlError> {
    let result = resolved(reference, base)?;
    reference.set_encoded_url(result.encoded_url())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_examples_from_rfc_3986_section_5_4_1() {
        let base = Url::parse("http://a/b/c/d;p?q").unwrap();
        let cases = [
            ("g:h", "g:h"),
            ("g", "http://a/b/c/g"),
            ("./g", "http://a/b/c/g"),
            ("g/", "http://a/b/c/g/"),
            ("/g", "http://a/g"),
            ("//g", "http://g"),
            ("?y", "http://a/b/c/d;p?y"),
            ("g?y", "http://a/b/c/g?y"),
            ("#s", "http://a/b/c/d;p?q#s"),
            ("g#s", "http://a/b/c/g#s"),
            ("g?y#s", "http://a/b/c/g?y#s"),
            (";x", "http://a/b/c/;x"),
            ("g;x", "http://a/b/c/g;x"),
            ("g;x?y#s", "http://a/b/c/g;x?y#s"),
            ("", "http://a/b/c/d;p?q"),
            (".", "http://a/b/c/"),
            ("./", "http://a/b/c/"),
            ("..", "http://a/b/"),
            ("../", "http://a/b/"),
            ("../g", "http://a/b/g"),
            ("../..", "http://a/"),
            ("../../", "http://a/"),
            ("../../g", "http://a/g"),
        ];
        for (reference, expected) in cases {
            let r = Url::parse(reference).unwrap();
            let resolved = resolved(&r, &base).unwrap();
            assert_eq!(resolved.encoded_url(), expected, "resolving {reference:?}");
        }
    }

    #[test]
    fn resolves_a_trailing_dot_dot_segment() {
        let base = Url::parse("http://a/b/c/d;p?q").unwrap();
        let mut reference = Url::parse("g;x=1/../y").unwrap();
        resolve(&mut reference, &base).unwrap();
        assert_eq!(reference.encoded_url(), "http://a/b/c/y");
    }

    #[test]
    fn remove_dot_segments_matches_rfc_example() {
        assert_eq!(remove_dot_segments("/a/b/c/./../../g"), "/a/g");
        assert_eq!(remove_dot_segments("mid/content=5/../6"), "mid/6");
    }
}
