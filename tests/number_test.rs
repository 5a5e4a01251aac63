//! Integration tests for number validation.

use conform::{number, ValidatorLike, ValuePath};
use serde_json::json;

#[test]
fn test_valid_numbers() {
    let validate = number();

    assert_eq!(validate.conform(&json!(1)).unwrap(), 1.0);
    assert_eq!(validate.conform(&json!(0)).unwrap(), 0.0);
    assert_eq!(validate.conform(&json!(-1)).unwrap(), -1.0);
    assert_eq!(validate.conform(&json!(0.1)).unwrap(), 0.1);
}

#[test]
fn test_invalid_values() {
    let validate = number();

    for value in [json!(true), json!("test"), json!(null), json!([1])] {
        let err = validate.conform(&value).unwrap_err();
        assert_eq!(err.to_string(), "[root] should be a number");
    }
}

#[test]
fn test_undefined_is_not_a_number() {
    let validate = number();

    let err = validate.validate(None, &ValuePath::root()).unwrap_err();
    assert_eq!(err.to_string(), "[root] should be a number");
}

#[test]
fn test_allow_nan_does_not_relax_type_checks() {
    let validate = number().allow_nan(true);

    assert_eq!(validate.conform(&json!(2.5)).unwrap(), 2.5);
    assert!(validate.conform(&json!("NaN")).is_err());
}

#[test]
fn test_numeric_strings_are_rejected() {
    let validate = number();

    let err = validate.conform(&json!("1")).unwrap_err();
    assert_eq!(err.to_string(), "[root] should be a number");
}
