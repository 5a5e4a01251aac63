//! Integration tests for array and tuple validation.

use conform::{array, boxed, literal, number, string, tuple, ValidatorLike};
use serde_json::json;

#[test]
fn test_array_valid() {
    let validate = array(string());

    assert_eq!(
        validate.conform(&json!(["a", "b", "c"])).unwrap(),
        vec!["a", "b", "c"]
    );
    assert!(validate.conform(&json!([])).unwrap().is_empty());
}

#[test]
fn test_array_fails_fast_with_index_path() {
    let validate = array(string());

    let err = validate.conform(&json!(["a", "b", 3])).unwrap_err();
    assert_eq!(err.len(), 1);
    assert_eq!(err.to_string(), "[root[2]] should be a string");
}

#[test]
fn test_array_rejects_non_sequences() {
    let validate = array(string());

    for value in [json!("abc"), json!({"0": "a"}), json!(null)] {
        let err = validate.conform(&value).unwrap_err();
        assert_eq!(err.to_string(), "[root] should be an array");
    }
}

#[test]
fn test_array_of_numbers() {
    let validate = array(number());

    assert_eq!(validate.conform(&json!([1, 2.5, -3])).unwrap(), vec![1.0, 2.5, -3.0]);
}

#[test]
fn test_tuple_valid() {
    let validate = tuple(vec![
        boxed(string()),
        boxed(literal(vec![json!(1), json!(2), json!(3)])),
    ]);

    assert_eq!(
        validate.conform(&json!(["test", 1])).unwrap(),
        vec![json!("test"), json!(1)]
    );
    assert_eq!(
        validate.conform(&json!(["", 2])).unwrap(),
        vec![json!(""), json!(2)]
    );
}

#[test]
fn test_tuple_position_mismatch_fails_fast() {
    let validate = tuple(vec![
        boxed(string()),
        boxed(literal(vec![json!(1), json!(2), json!(3)])),
    ]);

    let err = validate.conform(&json!([1, "test"])).unwrap_err();
    assert_eq!(err.len(), 1);
    assert_eq!(err.to_string(), "[root[0]] should be a string");
}

#[test]
fn test_tuple_length_mismatch() {
    let validate = tuple(vec![
        boxed(string()),
        boxed(literal(vec![json!(1), json!(2), json!(3)])),
    ]);

    let err = validate.conform(&json!(["test"])).unwrap_err();
    assert_eq!(err.to_string(), "[root] should have a length of 2");

    let err = validate.conform(&json!(["test", 1, 1])).unwrap_err();
    assert_eq!(err.to_string(), "[root] should have a length of 2");
}

#[test]
fn test_nested_sequences_track_both_indices() {
    let validate = array(array(number()));

    let err = validate.conform(&json!([[1], [2, "x"]])).unwrap_err();
    assert_eq!(err.to_string(), "[root[1][1]] should be a number");
}
