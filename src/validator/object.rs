//! Object validation with declared shapes and shape intersection.

use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::{ValidationError, Violation};
use crate::path::ValuePath;
use crate::ValidationResult;

use super::traits::{ValidatorLike, ValueValidator};

/// The declared shape of an object validator: field name to validator, in
/// declaration order.
pub type Shape = IndexMap<String, Arc<dyn ValueValidator>>;

/// A validator for keyed structures with a declared shape.
///
/// Every declared key is validated against its field validator; an absent key
/// validates as undefined, so pair field validators with [`crate::optional`]
/// when absence is acceptable. Keys not declared in the shape are silently
/// ignored and dropped from the conformed result.
///
/// Unlike the sequence combinators, `ObjectValidator` ACCUMULATES: every
/// declared key is attempted regardless of earlier failures, and all
/// violations are reported in one error, newline-joined in declaration order.
///
/// The declared shape stays readable through [`ObjectValidator::shape`], which
/// is what allows [`intersect`] to recompose object validators.
///
/// # Example
///
/// ```rust
/// use conform::{number, object, string, ValidatorLike};
/// use serde_json::json;
///
/// let validator = object()
///     .field("foo", number())
///     .field("bar", string());
///
/// let err = validator.conform(&json!({})).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "[root.foo] should be a number\n[root.bar] should be a string"
/// );
/// ```
#[derive(Clone, Default)]
pub struct ObjectValidator {
    shape: Shape,
}

impl ObjectValidator {
    /// Creates a new object validator with an empty shape.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an object validator from an existing shape.
    pub fn from_shape(shape: Shape) -> Self {
        Self { shape }
    }

    /// Declares a field and its validator.
    ///
    /// Declaration order is preserved and determines error ordering.
    /// Redeclaring a field replaces its validator but keeps its position.
    pub fn field<S>(mut self, name: impl Into<String>, validator: S) -> Self
    where
        S: ValidatorLike + 'static,
    {
        self.shape.insert(name.into(), Arc::new(validator));
        self
    }

    /// Returns the declared shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }
}

impl ValidatorLike for ObjectValidator {
    type Output = Map<String, Value>;

    fn validate(
        &self,
        value: Option<&Value>,
        path: &ValuePath,
    ) -> ValidationResult<Map<String, Value>> {
        let obj = match value {
            Some(Value::Object(obj)) => obj,
            _ => {
                return Err(ValidationError::single(
                    Violation::new(path.clone(), "should be an object").with_code("invalid_type"),
                ))
            }
        };

        let mut violations = Vec::new();
        let mut conformed = Map::new();

        for (name, validator) in &self.shape {
            let field_path = path.push_field(name);
            match validator.validate_value(obj.get(name), &field_path) {
                Ok(Some(v)) => {
                    conformed.insert(name.clone(), v);
                }
                // Absent result (optional field left undefined): no entry.
                Ok(None) => {}
                Err(error) => violations.extend(error),
            }
        }

        if violations.is_empty() {
            Ok(conformed)
        } else {
            Err(ValidationError::from_vec(violations))
        }
    }

    fn validate_to_value(
        &self,
        value: Option<&Value>,
        path: &ValuePath,
    ) -> ValidationResult<Option<Value>> {
        self.validate(value, path).map(|obj| Some(Value::Object(obj)))
    }
}

/// Merges two object validators into one that validates the combined shape.
///
/// The second shape is merged over the first: for overlapping keys the second
/// operand's validator wins, keeping the key's original position. The merged
/// validator re-validates from scratch against the synthesized shape; it does
/// not run both operands and merge their results.
///
/// # Example
///
/// ```rust
/// use conform::{intersect, number, object, string, ValidatorLike};
/// use serde_json::json;
///
/// let base = object().field("name", string());
/// let extra = object().field("age", number());
///
/// let merged = intersect(&base, &extra);
/// assert!(merged.conform(&json!({"name": "a", "age": 1})).is_ok());
/// assert!(merged.conform(&json!({"name": "a"})).is_err());
/// ```
pub fn intersect(first: &ObjectValidator, second: &ObjectValidator) -> ObjectValidator {
    let mut shape = first.shape().clone();
    for (name, validator) in second.shape() {
        shape.insert(name.clone(), Arc::clone(validator));
    }
    ObjectValidator::from_shape(shape)
}
