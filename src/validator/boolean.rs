//! Boolean validation with optional value conversion.

use serde_json::Value;

use crate::error::{ValidationError, Violation};
use crate::path::ValuePath;
use crate::ValidationResult;

use super::traits::ValidatorLike;

/// A validator for boolean values.
///
/// Booleans pass through unchanged. Non-boolean input is converted to `true`
/// if it is member-equal to any element of the `convert_to_true` list, then to
/// `false` via the `convert_to_false` list (in that order). Everything else
/// fails with `should be a boolean`. This is the only coercion the library
/// performs.
///
/// # Example
///
/// ```rust
/// use conform::{boolean, ValidatorLike};
/// use serde_json::json;
///
/// let flag = boolean()
///     .convert_to_true(vec![json!("yes"), json!(1)])
///     .convert_to_false(vec![json!("no"), json!(0)]);
///
/// assert_eq!(flag.conform(&json!("yes")).unwrap(), true);
/// assert_eq!(flag.conform(&json!(0)).unwrap(), false);
/// assert!(flag.conform(&json!("true")).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct BooleanValidator {
    convert_to_true: Vec<Value>,
    convert_to_false: Vec<Value>,
}

impl BooleanValidator {
    /// Creates a new boolean validator with no conversions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the values converted to `true`.
    pub fn convert_to_true(mut self, values: Vec<Value>) -> Self {
        self.convert_to_true = values;
        self
    }

    /// Sets the values converted to `false`.
    pub fn convert_to_false(mut self, values: Vec<Value>) -> Self {
        self.convert_to_false = values;
        self
    }
}

impl ValidatorLike for BooleanValidator {
    type Output = bool;

    fn validate(&self, value: Option<&Value>, path: &ValuePath) -> ValidationResult<bool> {
        if let Some(Value::Bool(b)) = value {
            return Ok(*b);
        }

        if let Some(v) = value {
            if self.convert_to_true.contains(v) {
                return Ok(true);
            }
            if self.convert_to_false.contains(v) {
                return Ok(false);
            }
        }

        Err(ValidationError::single(
            Violation::new(path.clone(), "should be a boolean").with_code("invalid_type"),
        ))
    }

    fn validate_to_value(
        &self,
        value: Option<&Value>,
        path: &ValuePath,
    ) -> ValidationResult<Option<Value>> {
        self.validate(value, path).map(|b| Some(Value::Bool(b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_booleans() {
        let validator = BooleanValidator::new();

        assert!(validator.conform(&json!(true)).unwrap());
        assert!(!validator.conform(&json!(false)).unwrap());
    }

    #[test]
    fn test_rejects_non_boolean_without_conversions() {
        let validator = BooleanValidator::new();

        for value in [json!("true"), json!(0), json!(null), json!([])] {
            let err = validator.conform(&value).unwrap_err();
            assert_eq!(err.to_string(), "[root] should be a boolean");
        }
    }

    #[test]
    fn test_conversions() {
        let validator = BooleanValidator::new()
            .convert_to_true(vec![json!("yes"), json!(1)])
            .convert_to_false(vec![json!("no"), json!(0)]);

        assert!(validator.conform(&json!(true)).unwrap());
        assert!(validator.conform(&json!("yes")).unwrap());
        assert!(validator.conform(&json!(1)).unwrap());

        assert!(!validator.conform(&json!(false)).unwrap());
        assert!(!validator.conform(&json!("no")).unwrap());
        assert!(!validator.conform(&json!(0)).unwrap());
    }

    #[test]
    fn test_unlisted_values_still_fail() {
        let validator = BooleanValidator::new()
            .convert_to_true(vec![json!("yes"), json!(1)])
            .convert_to_false(vec![json!("no"), json!(0)]);

        for value in [json!("true"), json!("false"), json!(2), json!([])] {
            assert!(validator.conform(&value).is_err());
        }
    }

    #[test]
    fn test_convert_to_true_checked_first() {
        let validator = BooleanValidator::new()
            .convert_to_true(vec![json!("both")])
            .convert_to_false(vec![json!("both")]);

        assert!(validator.conform(&json!("both")).unwrap());
    }

    #[test]
    fn test_rejects_undefined() {
        let validator = BooleanValidator::new().convert_to_true(vec![json!(1)]);
        let err = validator.validate(None, &ValuePath::root()).unwrap_err();
        assert_eq!(err.to_string(), "[root] should be a boolean");
    }
}
