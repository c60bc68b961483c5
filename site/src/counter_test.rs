use super::*;

// =============================================================
// counter_url
// =============================================================

#[test]
fn counter_url_plain_key() {
    assert_eq!(counter_url("sticky-board"), "https://api.counterapi.dev/v1/imthebus/sticky-board/up");
}

#[test]
fn counter_url_encodes_like_encode_uri_component() {
    assert_eq!(
        counter_url("a b/c?d&e"),
        "https://api.counterapi.dev/v1/imthebus/a%20b%2Fc%3Fd%26e/up"
    );
}

#[test]
fn counter_url_keeps_unreserved_marks() {
    assert_eq!(counter_url("x_y.z~!*'()"), "https://api.counterapi.dev/v1/imthebus/x_y.z~!*'()/up");
}

#[test]
fn counter_url_encodes_utf8() {
    assert_eq!(counter_url("é"), "https://api.counterapi.dev/v1/imthebus/%C3%A9/up");
}

// =============================================================
// parse_count
// =============================================================

#[test]
fn parse_count_prefers_count_field() {
    let got = parse_count(r#"{"count": 42, "value": 7, "counter": 1}"#).expect("parse");
    assert_eq!(got.as_deref(), Some("42"));
}

#[test]
fn parse_count_falls_back_to_value_then_counter() {
    assert_eq!(parse_count(r#"{"value": 7}"#).expect("parse").as_deref(), Some("7"));
    assert_eq!(parse_count(r#"{"counter": 3}"#).expect("parse").as_deref(), Some("3"));
}

#[test]
fn parse_count_skips_null_fields() {
    let got = parse_count(r#"{"count": null, "value": 12}"#).expect("parse");
    assert_eq!(got.as_deref(), Some("12"));
}

#[test]
fn parse_count_renders_strings_without_quotes() {
    let got = parse_count(r#"{"count": "1,024"}"#).expect("parse");
    assert_eq!(got.as_deref(), Some("1,024"));
}

#[test]
fn parse_count_without_fields_is_none() {
    assert!(parse_count(r#"{"id": 9, "name": "x"}"#).expect("parse").is_none());
}

#[test]
fn parse_count_rejects_non_json() {
    assert!(matches!(parse_count("<html>busy</html>"), Err(SiteError::Json(_))));
}

#[test]
fn parse_count_ignores_array_bodies() {
    assert!(parse_count("[41, 7, 3]").expect("parse").is_none());
}

#[test]
fn parse_count_ignores_scalar_bodies() {
    assert!(parse_count("41").expect("parse").is_none());
    assert!(parse_count(r#""41""#).expect("parse").is_none());
    assert!(parse_count("null").expect("parse").is_none());
}

#[test]
fn parse_count_whole_float_prints_as_integer() {
    assert_eq!(parse_count(r#"{"count": 1.0}"#).expect("parse").as_deref(), Some("1"));
    assert_eq!(parse_count(r#"{"count": 1024.0}"#).expect("parse").as_deref(), Some("1024"));
}

#[test]
fn parse_count_keeps_real_fractions() {
    assert_eq!(parse_count(r#"{"value": 2.5}"#).expect("parse").as_deref(), Some("2.5"));
}

#[test]
fn parse_count_all_null_fields_is_none() {
    assert!(parse_count(r#"{"count": null, "value": null, "counter": null}"#).expect("parse").is_none());
}
