//! The `unknown` escape hatch.

use serde_json::Value;

use crate::error::{ValidationError, Violation};
use crate::path::ValuePath;
use crate::ValidationResult;

use super::traits::ValidatorLike;

/// A validator that accepts any value except the undefined sentinel.
///
/// Useful as an escape hatch for fields whose shape is not (yet) pinned down;
/// the only guarantee it provides is presence. Undefined input fails with
/// `cannot be undefined`.
///
/// # Example
///
/// ```rust
/// use conform::{unknown, ValidatorLike, ValuePath};
/// use serde_json::json;
///
/// let validator = unknown();
///
/// assert!(validator.conform(&json!(null)).is_ok());
/// assert!(validator.validate(None, &ValuePath::root()).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UnknownValidator;

impl UnknownValidator {
    /// Creates a new unknown validator.
    pub fn new() -> Self {
        Self
    }
}

impl ValidatorLike for UnknownValidator {
    type Output = Value;

    fn validate(&self, value: Option<&Value>, path: &ValuePath) -> ValidationResult<Value> {
        match value {
            Some(v) => Ok(v.clone()),
            None => Err(ValidationError::single(
                Violation::new(path.clone(), "cannot be undefined").with_code("undefined"),
            )),
        }
    }

    fn validate_to_value(
        &self,
        value: Option<&Value>,
        path: &ValuePath,
    ) -> ValidationResult<Option<Value>> {
        self.validate(value, path).map(Some)
    }
}
