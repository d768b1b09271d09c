use urlbuf::{resolve, Url, UrlError};

fn main() -> Result<(), UrlError> {
    let base = Url::parse("http://a/b/c/d;p?q")?;
    let reference = Url::parse("g;x=1/../y")?;

    // non-mutating resolution.
    let result = resolve::resolved(&reference, &base)?;
    assert_eq!(result.encoded_url(), "http://a/b/c/y");

    // in-place resolution.
    let mut reference = reference;
    resolve::resolve(&mut reference, &base)?;
    assert_eq!(reference.encoded_url(), "http://a/b/c/y");

    Ok(())
}
