//! Tests for sharing nodes across handles and parents

use lazyjson::{Literal, Value};

use crate::helpers::*;

#[test]
fn test_document_workflow() {
    // A document arrives as bytes and gets annotated
    let doc = raw_value(PERSON);
    doc.add_metadata("id", "doc1");

    let active = Value::new(true);
    doc.set_path("active", &active);
    assert_eq!(materialize(&doc.path("active").unwrap()), true);

    // Alias the document under a new top-level value
    let top = Value::new(Literal::object([
        ("bucket", Literal::from(&doc)),
        ("another", Literal::from("rad")),
    ]));
    assert!(top.path("bucket").unwrap().ptr_eq(&doc));
    assert_eq!(materialize(&top.path("another").unwrap()), "rad");

    // Project part of the document to a top-level alias
    let address = doc.path("address").unwrap();
    top.set_path("a", &address);
    let street = top.path("a").unwrap().path("street").unwrap();
    assert_eq!(materialize(&street), "sutton oaks");

    // Metadata travels with the shared node
    let id = top.path("bucket").unwrap().metadata().unwrap().path("id").unwrap();
    assert_eq!(materialize(&id), "doc1");

    assert_eq!(
        materialize(&top),
        native(
            r#"{
                "bucket": {"name":"marty","active":true,"address":{"street":"sutton oaks"}},
                "another": "rad",
                "a": {"street":"sutton oaks"}
            }"#
        )
    );
}

#[test]
fn test_mutation_visible_through_every_parent() {
    let shared = raw_value(br#"{"count":1}"#);
    let first = Value::new(Literal::object([("x", &shared)]));
    let second = Value::new(Literal::array([&shared]));

    shared.set_path("count", 2);

    assert_eq!(
        materialize(&first.path("x").unwrap().path("count").unwrap()),
        2.0
    );
    assert_eq!(
        materialize(&second.index(0).unwrap().path("count").unwrap()),
        2.0
    );
    assert_same_json(&first.bytes(), r#"{"x":{"count":2}}"#);
    assert_same_json(&second.bytes(), r#"[{"count":2}]"#);
}

#[test]
fn test_clone_aliases_the_node() {
    let value = raw_value(CONTACTS);
    let alias = value.clone();
    assert!(alias.ptr_eq(&value));

    alias.set_index(0, "gerald");
    assert_eq!(materialize(&value.index(0).unwrap()), "gerald");

    // Parsing through one handle is visible through the other
    materialize(&alias);
    assert!(value.is_parsed());
}

#[test]
fn test_independent_values_over_equal_bytes_do_not_share() {
    let a = raw_value(PERSON);
    let b = raw_value(PERSON);
    assert!(!a.ptr_eq(&b));

    a.set_path("name", "steve");
    assert_eq!(materialize(&b.path("name").unwrap()), "marty");
}

#[test]
fn test_raw_navigation_returns_fresh_handles() {
    // Children located in raw bytes are new nodes each time; only overlay and parsed
    // lookups hand back a stored handle
    let value = raw_value(PERSON);
    let first = value.path("address").unwrap();
    let second = value.path("address").unwrap();
    assert!(!first.ptr_eq(&second));

    first.set_path("street", "main");
    assert_eq!(materialize(&second.path("street").unwrap()), "sutton oaks");
}
