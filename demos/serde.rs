use serde::{Deserialize, Serialize};
use urlbuf::Url;

#[derive(Debug, Serialize, Deserialize)]
struct Link {
    url: Url,
}

fn main() {
    let link: Link = serde_json::from_str("{ \"url\": \"https://example.org/foo\" }").unwrap();
    eprintln!("{:?}", link);

    let text = serde_json::to_string(&link).unwrap();
    eprintln!("{}", text);
}
