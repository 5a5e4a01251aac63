//! Number validation.

use serde_json::Value;

use crate::error::{ValidationError, Violation};
use crate::path::ValuePath;
use crate::ValidationResult;

use super::traits::ValidatorLike;

/// A validator for numeric values.
///
/// Accepts any JSON number and returns it as `f64`. Anything else fails with
/// `should be a number`, as does NaN unless `allow_nan` is set.
///
/// Note that `serde_json::Value` cannot normally represent NaN, so the NaN
/// check matters only for values built by other means.
///
/// # Example
///
/// ```rust
/// use conform::{number, ValidatorLike};
/// use serde_json::json;
///
/// let validator = number();
///
/// assert_eq!(validator.conform(&json!(0.1)).unwrap(), 0.1);
/// assert!(validator.conform(&json!("1")).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct NumberValidator {
    allow_nan: bool,
}

impl NumberValidator {
    /// Creates a new number validator that rejects NaN.
    pub fn new() -> Self {
        Self::default()
    }

    /// Controls whether the not-a-number sentinel passes validation.
    pub fn allow_nan(mut self, allow: bool) -> Self {
        self.allow_nan = allow;
        self
    }
}

impl ValidatorLike for NumberValidator {
    type Output = f64;

    fn validate(&self, value: Option<&Value>, path: &ValuePath) -> ValidationResult<f64> {
        let n = match value {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
            _ => {
                return Err(ValidationError::single(
                    Violation::new(path.clone(), "should be a number").with_code("invalid_type"),
                ))
            }
        };

        if n.is_nan() && !self.allow_nan {
            return Err(ValidationError::single(
                Violation::new(path.clone(), "should be a number").with_code("invalid_type"),
            ));
        }

        Ok(n)
    }

    fn validate_to_value(
        &self,
        value: Option<&Value>,
        path: &ValuePath,
    ) -> ValidationResult<Option<Value>> {
        // Return the original number to keep integer precision intact.
        self.validate(value, path)?;
        Ok(value.cloned())
    }
}
