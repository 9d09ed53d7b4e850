//! Pointer locator tests against the public `pointer` API

use bytes::Bytes;
use lazyjson::pointer::{self, LocateError};

fn find(doc: &'static [u8], expr: &str) -> Result<Option<Bytes>, LocateError> {
    pointer::find(&Bytes::from_static(doc), expr)
}

fn found(doc: &'static [u8], expr: &str) -> Vec<u8> {
    find(doc, expr)
        .unwrap_or_else(|err| panic!("locate {expr}: {err}"))
        .unwrap_or_else(|| panic!("{expr} not found"))
        .to_vec()
}

#[test]
fn test_multi_level_pointers() {
    let doc = br#"{"a":{"b":[10,{"c":"deep"}]},"x":null}"#;
    assert_eq!(found(doc, ""), doc.to_vec());
    assert_eq!(found(doc, "/a/b/0"), b"10");
    assert_eq!(found(doc, "/a/b/1/c"), br#""deep""#);
    assert_eq!(found(doc, "/x"), b"null");
}

#[test]
fn test_missing_targets_are_none() {
    let doc = br#"{"a":{"b":[10]}}"#;
    let cases = ["/z", "/a/z", "/a/b/1", "/a/b/0/c", "/a/b/99999999999999999999999"];
    for expr in cases {
        assert!(find(doc, expr).unwrap().is_none(), "{expr} should be missing");
    }
}

#[test]
fn test_escaped_tokens() {
    let doc = br#"{"a/b":{"m~n":1}}"#;
    assert_eq!(found(doc, "/a~1b/m~0n"), b"1");
    assert_eq!(pointer::for_key("a/b"), "/a~1b");
    assert_eq!(pointer::unescape(&pointer::escape("~/~1")), "~/~1");
}

#[test]
fn test_invalid_expressions() {
    let err = find(b"{}", "a").unwrap_err();
    assert!(matches!(err, LocateError::InvalidPointer { .. }));
    assert_eq!(err.pointer(), "a");

    let err = find(b"[1,2]", "/-").unwrap_err();
    assert!(err.is_index_error());

    let err = find(b"[1,2]", "/01").unwrap_err();
    assert!(err.is_index_error());
}

#[test]
fn test_malformed_bytes_are_syntax_errors() {
    let err = find(br#"{"a":}"#, "/a").unwrap_err();
    assert!(err.is_syntax_error());
    assert_eq!(err.pointer(), "/a");

    let err = find(br#"{"a":1} trailing"#, "/a").unwrap_err();
    assert!(err.is_syntax_error());
}

#[test]
fn test_result_is_a_view_into_the_input() {
    let doc = Bytes::from_static(br#"{"list":[ "x" , "y" ]}"#);
    let list = pointer::find(&doc, "/list").unwrap().unwrap();
    let y = pointer::find(&list, "/1").unwrap().unwrap();
    assert_eq!(&y[..], br#""y""#);

    let start = doc.as_ptr() as usize;
    let y_start = y.as_ptr() as usize;
    assert!(y_start > start && y_start < start + doc.len());
}
