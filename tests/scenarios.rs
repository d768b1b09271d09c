use urlbuf::{resolve, Url};

#[test]
fn scenario_1_parses_every_component() {
    let url = Url::parse("https://user:pw@example.com:8080/a/b?x=1#f").unwrap();
    assert_eq!(url.scheme(), "https");
    assert_eq!(url.encoded_user(), "user");
    assert_eq!(url.encoded_password(), Some("pw"));
    assert_eq!(url.encoded_host(), "example.com");
    assert_eq!(url.port(), Some(8080));
    assert_eq!(url.encoded_path(), "/a/b");
    assert_eq!(url.encoded_query(), Some("x=1"));
    assert_eq!(url.encoded_fragment(), Some("f"));
    assert_eq!(url.nseg(), 2);
    assert_eq!(url.nparam(), 1);
    assert!(matches!(url.host(), Some(urlbuf::Host::Name("example.com"))));
}

#[test]
fn scenario_2_erase_first_segment() {
    let mut url = Url::parse("https://user:pw@example.com:8080/a/b?x=1#f").unwrap();
    url.segments().erase(0).unwrap();
    assert_eq!(url.encoded_url(), "https://user:pw@example.com:8080/b?x=1#f");
    assert_eq!(url.nseg(), 1);
}

#[test]
fn scenario_3_set_user_empty_keeps_password_and_slashes() {
    let mut url = Url::parse("https://user:pw@example.com:8080/a/b?x=1#f").unwrap();
    url.set_user("").unwrap();
    assert_eq!(url.encoded_url(), "https://:pw@example.com:8080/a/b?x=1#f");
}

#[test]
fn scenario_4_insert_before_last_segment_twice() {
    let mut url = Url::parse("/path/file.txt").unwrap();
    let last = url.segments().len() - 1;
    url.segments().insert(last, "to").unwrap();
    let last = url.segments().len() - 1;
    url.segments().insert(last, "the").unwrap();
    assert_eq!(url.encoded_url(), "/path/to/the/file.txt");
    assert_eq!(url.nseg(), 4);
}

#[test]
fn scenario_5_rootless_path_with_colon_segment() {
    let url = Url::parse("urn:isbn:0451450523").unwrap();
    assert_eq!(url.scheme(), "urn");
    assert_eq!(url.encoded_path(), "isbn:0451450523");
    assert_eq!(url.host(), None);
    assert_eq!(url.nseg(), 1);
}

#[test]
fn scenario_6_set_host_synthesizes_authority() {
    let mut url = Url::new();
    url.set_host("[2001:db8::1]").unwrap();
    assert_eq!(url.encoded_host(), "[2001:db8::1]");
    assert_eq!(url.encoded_url(), "//[2001:db8::1]");
}

#[test]
fn scenario_7_leading_colon_in_encoded_password_is_rejected() {
    let mut url = Url::parse("https://user@example.com").unwrap();
    let before = url.encoded_url().to_string();
    assert!(url.set_encoded_password(":bad").is_err());
    assert_eq!(url.encoded_url(), before);
}

#[test]
fn property_p6_encoded_url_round_trips_through_set_encoded_url() {
    let inputs = [
        "https://user:pw@example.com:8080/a/b?x=1#f",
        "urn:isbn:0451450523",
        "//[2001:db8::1]",
        "/path/to/file.txt",
        "g;x=1/../y",
        "http://a/b/c/d;p?q",
    ];
    for input in inputs {
        let url = Url::parse(input).unwrap();
        let text = url.encoded_url().to_string();
        let mut round_tripped = Url::new();
        round_tripped.set_encoded_url(&text).unwrap();
        assert_eq!(round_tripped.encoded_url(), text);
    }
}

#[test]
fn property_p8_normalize_scheme_is_idempotent() {
    let mut once = Url::parse("HTTPS://example.com").unwrap();
    once.normalize_scheme();
    let after_one = once.encoded_url().to_string();
    once.normalize_scheme();
    assert_eq!(once.encoded_url(), after_one);
}

#[test]
fn boundary_empty_setters_remove_components_and_repair_delimiters() {
    let mut url = Url::parse("https://user:pw@example.com:8080/a/b?x=1#f").unwrap();
    url.set_fragment(None).unwrap();
    assert_eq!(url.encoded_fragment(), None);
    url.clear_query().unwrap();
    assert_eq!(url.encoded_query(), None);
    url.clear_password().unwrap();
    assert_eq!(url.encoded_password(), None);
    assert_eq!(url.encoded_url(), "https://user@example.com:8080/a/b");
}

#[test]
fn boundary_setting_port_on_authority_less_url_synthesizes_slashes() {
    let mut url = Url::new();
    url.set_port(Some(80)).unwrap();
    assert_eq!(url.encoded_url(), "//:80");
}

#[test]
fn boundary_setting_host_empty_with_nonempty_port_keeps_slashes_and_port() {
    let mut url = Url::parse("http://example.com:80/a").unwrap();
    url.set_host("").unwrap();
    assert_eq!(url.encoded_url(), "http://:80/a");
}

#[test]
fn boundary_path_absolute_rejects_double_slash_without_authority() {
    let mut url = Url::new();
    assert!(url.set_encoded_path("//a/b").is_err());
}

#[test]
fn boundary_short_percent_escape_is_rejected() {
    let mut url = Url::new();
    assert!(url.set_encoded_path("/a%2").is_err());
}

#[test]
fn resolution_matches_rfc_3986_worked_example() {
    let base = Url::parse("http://a/b/c/d;p?q").unwrap();
    let mut reference = Url::parse("../../../g").unwrap();
    resolve::resolve(&mut reference, &base).unwrap();
    assert_eq!(reference.encoded_url(), "http://a/g");
}
