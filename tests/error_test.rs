//! Integration tests for the public error API.

use conform::{number, object, string, ValidationError, ValidatorLike, ValuePath, Violation};
use serde_json::json;
use stillwater::prelude::*;

#[test]
fn test_violation_display_includes_the_path() {
    let violation = Violation::new(ValuePath::root().push_field("age"), "should be a number");
    assert_eq!(violation.to_string(), "[root.age] should be a number");
}

#[test]
fn test_violation_codes() {
    let violation = Violation::new(ValuePath::root(), "nope");
    assert_eq!(violation.code, "validation_error");

    let violation = violation.with_code("invalid_type");
    assert_eq!(violation.code, "invalid_type");
}

#[test]
fn test_combine_preserves_order() {
    let first = ValidationError::single(Violation::new(ValuePath::root(), "first"));
    let second = ValidationError::single(Violation::new(ValuePath::root(), "second"));

    let combined = first.combine(second);
    assert_eq!(combined.len(), 2);
    assert_eq!(combined.first().message, "first");
    assert_eq!(combined.to_string(), "[root] first\n[root] second");
}

#[test]
fn test_filter_violations_by_path_and_code() {
    let validate = object().field("foo", number()).field("bar", string());
    let err = validate.conform(&json!({})).unwrap_err();

    let foo_path = ValuePath::root().push_field("foo");
    let at_foo = err.at_path(&foo_path);
    assert_eq!(at_foo.len(), 1);
    assert_eq!(at_foo[0].message, "should be a number");

    assert_eq!(err.with_code("invalid_type").len(), 2);
    assert_eq!(err.with_code("pattern").len(), 0);
}

#[test]
fn test_into_vec_yields_every_violation() {
    let validate = object().field("foo", number()).field("bar", string());
    let err = validate.conform(&json!({})).unwrap_err();

    let violations = err.into_vec();
    assert_eq!(violations.len(), 2);
    assert_eq!(violations[0].path.to_string(), "root.foo");
    assert_eq!(violations[1].path.to_string(), "root.bar");
}

#[test]
fn test_errors_implement_std_error() {
    fn assert_error<E: std::error::Error>() {}
    assert_error::<Violation>();
    assert_error::<ValidationError>();
}
