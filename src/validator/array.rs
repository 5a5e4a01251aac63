//! Sequence validation: homogeneous arrays and fixed-length tuples.

use serde_json::Value;

use crate::error::{ValidationError, Violation};
use crate::path::ValuePath;
use crate::ValidationResult;

use super::traits::{ValidatorLike, ValueValidator};

/// A validator for homogeneous sequences.
///
/// Validates every element against the item validator in order, extending the
/// path with `[index]`. The first element failure propagates immediately: a
/// malformed early element usually invalidates the positional meaning of the
/// rest. Non-arrays fail with `should be an array`.
///
/// # Example
///
/// ```rust
/// use conform::{array, string, ValidatorLike};
/// use serde_json::json;
///
/// let validator = array(string());
///
/// assert_eq!(
///     validator.conform(&json!(["a", "b"])).unwrap(),
///     vec!["a".to_string(), "b".to_string()]
/// );
///
/// let err = validator.conform(&json!(["a", "b", 3])).unwrap_err();
/// assert_eq!(err.to_string(), "[root[2]] should be a string");
/// ```
#[derive(Debug, Clone)]
pub struct ArrayValidator<S> {
    item: S,
}

impl<S: ValidatorLike> ArrayValidator<S> {
    /// Creates a new array validator with the given item validator.
    pub fn new(item: S) -> Self {
        Self { item }
    }
}

impl<S: ValidatorLike> ValidatorLike for ArrayValidator<S> {
    type Output = Vec<S::Output>;

    fn validate(
        &self,
        value: Option<&Value>,
        path: &ValuePath,
    ) -> ValidationResult<Vec<S::Output>> {
        let items = not_an_array(value, path)?;

        let mut conformed = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            conformed.push(self.item.validate(Some(item), &path.push_index(index))?);
        }
        Ok(conformed)
    }

    fn validate_to_value(
        &self,
        value: Option<&Value>,
        path: &ValuePath,
    ) -> ValidationResult<Option<Value>> {
        let items = not_an_array(value, path)?;

        let mut conformed = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let v = self
                .item
                .validate_to_value(Some(item), &path.push_index(index))?;
            conformed.push(v.unwrap_or(Value::Null));
        }
        Ok(Some(Value::Array(conformed)))
    }
}

/// A validator for fixed-length heterogeneous sequences.
///
/// The input must be an array of exactly the declared length; each position is
/// validated by the validator declared for it, failing fast on the first
/// mismatch. Length mismatches fail with `should have a length of <n>`.
///
/// # Example
///
/// ```rust
/// use conform::{boxed, literal, string, tuple, ValidatorLike};
/// use serde_json::json;
///
/// let validator = tuple(vec![
///     boxed(string()),
///     boxed(literal(vec![json!(1), json!(2), json!(3)])),
/// ]);
///
/// assert!(validator.conform(&json!(["test", 1])).is_ok());
/// assert!(validator.conform(&json!(["test"])).is_err());
/// ```
pub struct TupleValidator {
    items: Vec<Box<dyn ValueValidator>>,
}

impl TupleValidator {
    /// Creates a new tuple validator with one validator per position.
    pub fn new(items: Vec<Box<dyn ValueValidator>>) -> Self {
        Self { items }
    }

    /// Returns the declared length of the tuple.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the tuple declares no positions.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ValidatorLike for TupleValidator {
    type Output = Vec<Value>;

    fn validate(&self, value: Option<&Value>, path: &ValuePath) -> ValidationResult<Vec<Value>> {
        let items = not_an_array(value, path)?;

        if items.len() != self.items.len() {
            return Err(ValidationError::single(
                Violation::new(
                    path.clone(),
                    format!("should have a length of {}", self.items.len()),
                )
                .with_code("length"),
            ));
        }

        let mut conformed = Vec::with_capacity(items.len());
        for (index, (validator, item)) in self.items.iter().zip(items).enumerate() {
            let v = validator.validate_value(Some(item), &path.push_index(index))?;
            conformed.push(v.unwrap_or(Value::Null));
        }
        Ok(conformed)
    }

    fn validate_to_value(
        &self,
        value: Option<&Value>,
        path: &ValuePath,
    ) -> ValidationResult<Option<Value>> {
        self.validate(value, path).map(|v| Some(Value::Array(v)))
    }
}

/// Extracts the array items or fails with `should be an array`.
fn not_an_array<'a>(
    value: Option<&'a Value>,
    path: &ValuePath,
) -> ValidationResult<&'a Vec<Value>> {
    match value {
        Some(Value::Array(items)) => Ok(items),
        _ => Err(ValidationError::single(
            Violation::new(path.clone(), "should be an array").with_code("invalid_type"),
        )),
    }
}
