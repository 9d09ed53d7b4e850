//! Re-encoding tests for `Value::bytes`

use lazyjson::{Kind, Literal, Value};

use crate::helpers::*;

#[test]
fn test_untouched_bytes_are_verbatim() {
    let inputs: &[&[u8]] = &[
        br#"{ "name" : "marty",  "address": {"street":"sutton oaks"} }"#,
        b"[ 1,2 , 3 ]",
        b"  1.50  ",
        b"\"caf\xc3\xa9\"",
        b"true",
    ];

    for input in inputs {
        let value = raw_value(input);
        assert_eq!(&value.bytes()[..], *input);
    }
}

#[test]
fn test_bytes_after_parse_keeps_scalar_text() {
    let value = raw_value(b"{\"price\": 1.50, \"name\": \"caf\xc3\xa9\"}");
    materialize(&value);

    // The container is re-assembled, but each scalar keeps its original spelling
    assert_eq!(&value.bytes()[..], b"{\"name\":\"caf\xc3\xa9\",\"price\":1.50}");
}

#[test]
fn test_bytes_with_overlay() {
    let value = raw_value(PERSON);
    value.set_path("name", "steve");

    assert_eq!(
        &value.bytes()[..],
        br#"{"address":{"street":"sutton oaks"},"name":"steve"}"#
    );
}

#[test]
fn test_overlay_is_non_destructive() {
    let value = raw_value(PERSON);
    value.set_path("name", "steve");
    assert_same_json(
        &value.bytes(),
        r#"{"name":"steve","address":{"street":"sutton oaks"}}"#,
    );

    // A second value over the same input bytes never saw the write
    let other = raw_value(PERSON);
    assert_eq!(&other.bytes()[..], PERSON);
    assert_eq!(materialize(&other.path("name").unwrap()), "marty");
}

#[test]
fn test_nested_untouched_member_is_copied_verbatim() {
    let value = raw_value(br#"{"keep":{ "spaced" : [ 1 , 2 ] },"change":1}"#);
    value.set_path("change", 2);

    assert_eq!(
        &value.bytes()[..],
        br#"{"change":2,"keep":{ "spaced" : [ 1 , 2 ] }}"#
    );
}

#[test]
fn test_array_overlay_encoding() {
    let value = raw_value(CONTACTS);
    value.set_index(0, "gerald");
    assert_eq!(&value.bytes()[..], br#"["gerald",{"type":"contact"}]"#);
}

#[test]
fn test_keys_are_escaped() {
    let value = Value::new(Literal::object([("quote\"d", 1), ("new\nline", 2)]));
    let encoded = value.bytes();
    assert_same_json(&encoded, r#"{"quote\"d":1,"new\nline":2}"#);
}

#[test]
fn test_literal_encoding() {
    let value = Value::new(Literal::object([
        ("name", Literal::from("marty")),
        ("tags", Literal::array(["a", "b"])),
        ("missing", Literal::Null),
        ("ok", Literal::from(true)),
    ]));
    assert_same_json(
        &value.bytes(),
        r#"{"name":"marty","tags":["a","b"],"missing":null,"ok":true}"#,
    );
}

#[test]
fn test_not_json_children_encoding() {
    let broken = raw_value(b"{oops");

    let object = Value::new(Literal::object([("a", Value::new(1)), ("b", broken.clone())]));
    assert_same_json(&object.bytes(), r#"{"a":1}"#);

    let array = Value::new(Literal::array([broken.clone(), Value::new("x")]));
    assert_same_json(&array.bytes(), r#"[null,"x"]"#);

    // On its own, a NotJson value hands its bytes back
    assert_eq!(&broken.bytes()[..], b"{oops");
}

#[test]
fn test_bytes_agree_with_value() {
    let value = raw_value(
        br#"{"title":"doc","list":[1,{"deep":[true,false]}],"empty":{},"none":[]}"#,
    );
    value.set_path("title", Literal::array([1, 2]));
    let list = value.path("list").unwrap();
    list.set_index(0, Literal::object([("x", "y")]));
    value.set_path("list", &list);

    let reparsed = Value::from_bytes(value.bytes());
    assert_eq!(reparsed.value(), value.value());
}

#[test]
fn test_display_uses_bytes() {
    let value = raw_value(CONTACTS);
    assert_eq!(value.to_string(), r#"["marty",{"type":"contact"}]"#);
}

#[test]
fn test_number_literals_encode_like_value() {
    let cases = [2.0, -0.0, 2.5, -7.0, 1e300];
    for n in cases {
        let value = Value::new(n);
        let reparsed = Value::from_bytes(value.bytes());
        assert_eq!(reparsed.kind(), Kind::Number);
        assert_eq!(reparsed.value(), value.value());
    }

    assert_eq!(&Value::new(2.0).bytes()[..], b"2");
    // Negative zero keeps its sign
    let negative_zero = Value::new(-0.0).bytes();
    assert_eq!(&negative_zero[..], b"-0.0");
    let reparsed = materialize(&Value::from_bytes(negative_zero));
    assert!(reparsed.as_f64().unwrap().is_sign_negative());
}
