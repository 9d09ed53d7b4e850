use lazyjson::{Native, Value};

// ==========================
// SHARED FIXTURES
// ==========================

/// The person document used throughout the navigation and overlay tests.
pub const PERSON: &[u8] = br#"{"name":"marty","address":{"street":"sutton oaks"}}"#;

/// The contact list used throughout the array tests.
pub const CONTACTS: &[u8] = br#"["marty",{"type":"contact"}]"#;

/// Builds a bytes-backed value from a fixture.
pub fn raw_value(bytes: &[u8]) -> Value {
    Value::from_slice(bytes)
}

/// Decodes JSON text into the native form `Value::value` produces.
///
/// Used to state expectations as JSON literals instead of nested constructors.
pub fn native(json: &str) -> Native {
    serde_json::from_str(json).expect("Fixture JSON should be valid")
}

/// Asserts that two byte encodings decode to the same native value.
pub fn assert_same_json(actual: &[u8], expected: &str) {
    let actual: Native = serde_json::from_slice(actual).unwrap_or_else(|err| {
        panic!(
            "Encoded bytes are not JSON ({err}): {}",
            String::from_utf8_lossy(actual)
        )
    });
    assert_eq!(actual, native(expected));
}

/// Materializes `value`, failing the test for NotJson values.
pub fn materialize(value: &Value) -> Native {
    value
        .value()
        .unwrap_or_else(|| panic!("Expected JSON value, got {value:?}"))
}
