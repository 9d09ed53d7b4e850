//! Metadata tests for `Value::add_metadata` and `Value::metadata`

use lazyjson::{Kind, Literal, Value};

use crate::helpers::*;

#[test]
fn test_metadata_absent_until_added() {
    let value = raw_value(PERSON);
    assert!(value.metadata().is_none());

    value.add_metadata("id", "doc1");
    let metadata = value.metadata().unwrap();
    assert_eq!(metadata.kind(), Kind::Object);
    assert_eq!(materialize(&metadata.path("id").unwrap()), "doc1");
}

#[test]
fn test_metadata_accumulates_keys() {
    let value = raw_value(CONTACTS);
    value.add_metadata("id", "doc1");
    value.add_metadata("rev", 3);
    value.add_metadata("id", "doc2");

    let metadata = value.metadata().unwrap();
    assert_eq!(materialize(&metadata), native(r#"{"id":"doc2","rev":3}"#));
    // The same metadata object is returned every time
    assert!(metadata.ptr_eq(&value.metadata().unwrap()));
}

#[test]
fn test_metadata_is_invisible_to_the_value() {
    let value = raw_value(PERSON);
    value.add_metadata("id", "doc1");

    assert!(!value.has_overlay());
    assert_eq!(&value.bytes()[..], PERSON);
    assert_eq!(
        materialize(&value),
        native(r#"{"name":"marty","address":{"street":"sutton oaks"}}"#)
    );
    assert!(value.path("id").unwrap_err().is_undefined());
}

#[test]
fn test_metadata_on_any_kind() {
    let cases = vec![
        Value::new("marty"),
        Value::new(Literal::Null),
        raw_value(b"not json"),
    ];

    for value in cases {
        value.add_metadata("source", "test");
        assert_eq!(
            materialize(&value.metadata().unwrap().path("source").unwrap()),
            "test"
        );
    }
}

#[test]
fn test_metadata_value_is_adopted() {
    let tag = Value::new("draft");
    let value = raw_value(PERSON);
    value.add_metadata("tag", &tag);

    assert!(value.metadata().unwrap().path("tag").unwrap().ptr_eq(&tag));
}
