//! String validation.

use regex::Regex;
use serde_json::Value;

use crate::error::{ValidationError, Violation};
use crate::path::ValuePath;
use crate::ValidationResult;

use super::traits::ValidatorLike;

/// A validator for string values.
///
/// Accepts character strings, optionally constrained by a regex pattern, and
/// returns the string unchanged. Anything else fails with
/// `should be a string`; a non-matching string fails with
/// `doesn't match the pattern`.
///
/// # Example
///
/// ```rust
/// use conform::{string, ValidatorLike};
/// use serde_json::json;
///
/// let version = string().pattern(r"^\d+\.\d+\.\d+$").unwrap();
///
/// assert!(version.conform(&json!("1.2.3")).is_ok());
/// assert!(version.conform(&json!("1.2.e")).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringValidator {
    pattern: Option<Regex>,
}

impl StringValidator {
    /// Creates a new string validator with no pattern constraint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrains accepted strings to those matching the regex pattern.
    ///
    /// An invalid pattern is a construction defect, reported as a
    /// `regex::Error`; it is never a validation failure.
    pub fn pattern(mut self, pattern: &str) -> Result<Self, regex::Error> {
        self.pattern = Some(Regex::new(pattern)?);
        Ok(self)
    }
}

impl ValidatorLike for StringValidator {
    type Output = String;

    fn validate(&self, value: Option<&Value>, path: &ValuePath) -> ValidationResult<String> {
        let s = match value {
            Some(Value::String(s)) => s,
            _ => {
                return Err(ValidationError::single(
                    Violation::new(path.clone(), "should be a string").with_code("invalid_type"),
                ))
            }
        };

        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(s) {
                return Err(ValidationError::single(
                    Violation::new(path.clone(), "doesn't match the pattern").with_code("pattern"),
                ));
            }
        }

        Ok(s.clone())
    }

    fn validate_to_value(
        &self,
        value: Option<&Value>,
        path: &ValuePath,
    ) -> ValidationResult<Option<Value>> {
        self.validate(value, path).map(|s| Some(Value::String(s)))
    }
}
