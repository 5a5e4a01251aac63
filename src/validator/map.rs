//! Key-value collection validation.
//!
//! Two shapes of map input are supported: a sequence of `[key, value]` pairs
//! ([`MapValidator`]) and a plain keyed object ([`ObjectMapValidator`]). Both
//! conform into an `IndexMap` keeping insertion order.

use std::hash::Hash;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::{ValidationError, Violation};
use crate::path::ValuePath;
use crate::ValidationResult;

use super::traits::ValidatorLike;

/// A validator for key-value collections given as `[key, value]` pair arrays.
///
/// The input is validated with array-of-pair semantics: the whole input must
/// be an array (`should be an array`), each pair must be a two-element array
/// (`should have a length of 2` at the pair's index), and key/value validate
/// at `[index][0]` / `[index][1]`. Validation fails fast per pair.
///
/// Later duplicate keys overwrite earlier ones; the first insertion keeps its
/// position, matching standard associative insertion semantics.
///
/// Key outputs must be `Eq + Hash` (strings, booleans); use
/// [`ObjectMapValidator`] for plain keyed objects.
///
/// # Example
///
/// ```rust
/// use conform::{map, number, string, ValidatorLike};
/// use serde_json::json;
///
/// let validator = map(string(), number());
///
/// let scores = validator.conform(&json!([["a", 1], ["b", 2]])).unwrap();
/// assert_eq!(scores.get("a"), Some(&1.0));
/// ```
#[derive(Debug, Clone)]
pub struct MapValidator<K, V> {
    key: K,
    value: V,
}

impl<K, V> MapValidator<K, V>
where
    K: ValidatorLike,
    V: ValidatorLike,
{
    /// Creates a new map validator from key and value validators.
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Validates one `[key, value]` pair, yielding the raw key and value.
    fn pair<'a>(
        &self,
        pair: &'a Value,
        pair_path: &ValuePath,
    ) -> ValidationResult<(&'a Value, &'a Value)> {
        let entry = match pair {
            Value::Array(entry) => entry,
            _ => {
                return Err(ValidationError::single(
                    Violation::new(pair_path.clone(), "should be an array")
                        .with_code("invalid_type"),
                ))
            }
        };

        if entry.len() != 2 {
            return Err(ValidationError::single(
                Violation::new(pair_path.clone(), "should have a length of 2").with_code("length"),
            ));
        }

        Ok((&entry[0], &entry[1]))
    }
}

impl<K, V> ValidatorLike for MapValidator<K, V>
where
    K: ValidatorLike,
    V: ValidatorLike,
    K::Output: Eq + Hash,
{
    type Output = IndexMap<K::Output, V::Output>;

    fn validate(
        &self,
        value: Option<&Value>,
        path: &ValuePath,
    ) -> ValidationResult<IndexMap<K::Output, V::Output>> {
        let pairs = match value {
            Some(Value::Array(pairs)) => pairs,
            _ => {
                return Err(ValidationError::single(
                    Violation::new(path.clone(), "should be an array").with_code("invalid_type"),
                ))
            }
        };

        let mut conformed = IndexMap::with_capacity(pairs.len());
        for (index, pair) in pairs.iter().enumerate() {
            let pair_path = path.push_index(index);
            let (key, value) = self.pair(pair, &pair_path)?;
            let key = self.key.validate(Some(key), &pair_path.push_index(0))?;
            let value = self.value.validate(Some(value), &pair_path.push_index(1))?;
            conformed.insert(key, value);
        }
        Ok(conformed)
    }

    fn validate_to_value(
        &self,
        value: Option<&Value>,
        path: &ValuePath,
    ) -> ValidationResult<Option<Value>> {
        let pairs = match value {
            Some(Value::Array(pairs)) => pairs,
            _ => {
                return Err(ValidationError::single(
                    Violation::new(path.clone(), "should be an array").with_code("invalid_type"),
                ))
            }
        };

        // Erased form keeps the pair-array rendering; duplicates still
        // overwrite in place.
        let mut conformed: Vec<(Value, Value)> = Vec::with_capacity(pairs.len());
        for (index, pair) in pairs.iter().enumerate() {
            let pair_path = path.push_index(index);
            let (key, value) = self.pair(pair, &pair_path)?;
            let key = self
                .key
                .validate_to_value(Some(key), &pair_path.push_index(0))?
                .unwrap_or(Value::Null);
            let value = self
                .value
                .validate_to_value(Some(value), &pair_path.push_index(1))?
                .unwrap_or(Value::Null);

            match conformed.iter_mut().find(|(k, _)| k == &key) {
                Some(entry) => entry.1 = value,
                None => conformed.push((key, value)),
            }
        }

        Ok(Some(Value::Array(
            conformed
                .into_iter()
                .map(|(k, v)| Value::Array(vec![k, v]))
                .collect(),
        )))
    }
}

/// A validator for plain keyed objects with uniform key and value shapes.
///
/// Every input key is validated (as a string) under the `keyof <path>`
/// context, and every value under `<path>.<key>`, in input enumeration order.
/// The first invalid key or value aborts immediately. Non-objects fail with
/// `should be an object`.
///
/// # Example
///
/// ```rust
/// use conform::{number, object_map, string, ValidatorLike};
/// use serde_json::json;
///
/// let validator = object_map(string().pattern(r"^[a-z]+$").unwrap(), number());
///
/// assert!(validator.conform(&json!({"alpha": 1})).is_ok());
///
/// let err = validator.conform(&json!({"NOT": 1})).unwrap_err();
/// assert_eq!(err.to_string(), "[keyof root] doesn't match the pattern");
/// ```
#[derive(Debug, Clone)]
pub struct ObjectMapValidator<K, V> {
    key: K,
    value: V,
}

impl<K, V> ObjectMapValidator<K, V>
where
    K: ValidatorLike,
    V: ValidatorLike,
{
    /// Creates a new object-map validator from key and value validators.
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

/// Extracts the object entries or fails with `should be an object`.
fn not_an_object<'a>(
    value: Option<&'a Value>,
    path: &ValuePath,
) -> ValidationResult<&'a Map<String, Value>> {
    match value {
        Some(Value::Object(obj)) => Ok(obj),
        _ => Err(ValidationError::single(
            Violation::new(path.clone(), "should be an object").with_code("invalid_type"),
        )),
    }
}

impl<K, V> ValidatorLike for ObjectMapValidator<K, V>
where
    K: ValidatorLike,
    V: ValidatorLike,
    K::Output: Eq + Hash,
{
    type Output = IndexMap<K::Output, V::Output>;

    fn validate(
        &self,
        value: Option<&Value>,
        path: &ValuePath,
    ) -> ValidationResult<IndexMap<K::Output, V::Output>> {
        let obj = not_an_object(value, path)?;

        let mut conformed = IndexMap::with_capacity(obj.len());
        for (name, item) in obj {
            let key_value = Value::String(name.clone());
            let key = self.key.validate(Some(&key_value), &path.key_of())?;
            let value = self.value.validate(Some(item), &path.push_field(name))?;
            conformed.insert(key, value);
        }
        Ok(conformed)
    }

    fn validate_to_value(
        &self,
        value: Option<&Value>,
        path: &ValuePath,
    ) -> ValidationResult<Option<Value>> {
        let obj = not_an_object(value, path)?;

        let mut conformed = Map::new();
        for (name, item) in obj {
            let key_value = Value::String(name.clone());
            let key = match self.key.validate_to_value(Some(&key_value), &path.key_of())? {
                Some(Value::String(key)) => key,
                _ => name.clone(),
            };
            let value = self
                .value
                .validate_to_value(Some(item), &path.push_field(name))?
                .unwrap_or(Value::Null);
            conformed.insert(key, value);
        }
        Ok(Some(Value::Object(conformed)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::{boolean, number, string};
    use serde_json::json;

    #[test]
    fn test_map_conforms_pairs() {
        let validator = MapValidator::new(string(), number());

        let conformed = validator.conform(&json!([["a", 1], ["b", 2]])).unwrap();
        assert_eq!(conformed.len(), 2);
        assert_eq!(conformed.get("a"), Some(&1.0));
        assert_eq!(conformed.get("b"), Some(&2.0));
    }

    #[test]
    fn test_map_rejects_non_array() {
        let validator = MapValidator::new(string(), number());

        let err = validator.conform(&json!({"a": 1})).unwrap_err();
        assert_eq!(err.to_string(), "[root] should be an array");
    }

    #[test]
    fn test_map_pair_length_mismatch() {
        let validator = MapValidator::new(string(), number());

        let err = validator.conform(&json!([["a", 1, 2]])).unwrap_err();
        assert_eq!(err.to_string(), "[root[0]] should have a length of 2");
    }

    #[test]
    fn test_map_pair_must_be_array() {
        let validator = MapValidator::new(string(), number());

        let err = validator.conform(&json!(["a"])).unwrap_err();
        assert_eq!(err.to_string(), "[root[0]] should be an array");
    }

    #[test]
    fn test_map_fails_fast_with_pair_paths() {
        let validator = MapValidator::new(string(), number());

        let err = validator
            .conform(&json!([["a", 1], [2, 2], [3, 3]]))
            .unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.to_string(), "[root[1][0]] should be a string");
    }

    #[test]
    fn test_map_later_duplicates_overwrite() {
        let validator = MapValidator::new(string(), number());

        let conformed = validator
            .conform(&json!([["a", 1], ["b", 2], ["a", 3]]))
            .unwrap();
        assert_eq!(conformed.len(), 2);
        assert_eq!(conformed.get("a"), Some(&3.0));

        let keys: Vec<_> = conformed.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_map_boolean_keys() {
        let validator = MapValidator::new(boolean(), string());

        let conformed = validator
            .conform(&json!([[true, "yes"], [false, "no"]]))
            .unwrap();
        assert_eq!(conformed.get(&true), Some(&"yes".to_string()));
    }

    #[test]
    fn test_object_map_conforms_entries() {
        let validator = ObjectMapValidator::new(string(), number());

        let conformed = validator.conform(&json!({"a": 1, "b": 2})).unwrap();
        assert_eq!(conformed.get("a"), Some(&1.0));
        assert_eq!(conformed.get("b"), Some(&2.0));
    }

    #[test]
    fn test_object_map_rejects_non_object() {
        let validator = ObjectMapValidator::new(string(), number());

        for value in [json!([["a", 1]]), json!(null), json!(1)] {
            let err = validator.conform(&value).unwrap_err();
            assert_eq!(err.to_string(), "[root] should be an object");
        }
    }

    #[test]
    fn test_object_map_key_failure_uses_keyof_path() {
        let validator =
            ObjectMapValidator::new(string().pattern(r"^[a-z]+$").unwrap(), number());

        let err = validator.conform(&json!({"BAD": 1})).unwrap_err();
        assert_eq!(err.to_string(), "[keyof root] doesn't match the pattern");
    }

    #[test]
    fn test_object_map_value_failure_uses_field_path() {
        let validator = ObjectMapValidator::new(string(), number());

        let err = validator.conform(&json!({"a": 1, "b": "x"})).unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.to_string(), "[root.b] should be a number");
    }

    #[test]
    fn test_object_map_preserves_enumeration_order() {
        let validator = ObjectMapValidator::new(string(), number());

        let conformed = validator.conform(&json!({"z": 1, "a": 2, "m": 3})).unwrap();
        let keys: Vec<_> = conformed.keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }
}
