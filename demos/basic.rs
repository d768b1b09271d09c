use urlbuf::{Url, UrlError};

fn main() -> Result<(), UrlError> {
    let mut url = Url::parse("https://user:pw@example.com:8080/a/b?x=1#f")?;

    println!("scheme: {}", url.scheme());
    println!("host: {}", url.encoded_host());
    println!("port: {:?}", url.port());
    println!("path: {}", url.encoded_path());
    println!("query: {:?}", url.encoded_query());
    println!("fragment: {:?}", url.encoded_fragment());

    url.segments().push("c")?;
    url.params().push("y", "2")?;
    println!("after mutation: {}", url.encoded_url());

    Ok(())
}
