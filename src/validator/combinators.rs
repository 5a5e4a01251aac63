//! Union and modifier combinators.
//!
//! - [`AnyOfValidator`]: first-match-wins union over alternatives
//! - [`NullableValidator`]: null short-circuits, everything else delegates
//! - [`OptionalValidator`]: undefined short-circuits, everything else delegates

use serde_json::Value;

use crate::error::{ValidationError, Violation};
use crate::path::ValuePath;
use crate::ValidationResult;

use super::traits::{ValidatorLike, ValueValidator};

/// A union validator: the first matching alternative wins.
///
/// Alternatives are tried in listed order against the same path; the first
/// success is returned even if a later alternative would also match, and there
/// is no backtracking. A failing alternative's validation error is discarded
/// and the next one tried. If no alternative matches, the failure is
/// `did not match any of the given validators`.
///
/// # Example
///
/// ```rust
/// use conform::{any_of, boolean, boxed, string, ValidatorLike};
/// use serde_json::json;
///
/// let validator = any_of(vec![boxed(string()), boxed(boolean())]);
///
/// assert_eq!(validator.conform(&json!(true)).unwrap(), json!(true));
///
/// let err = validator.conform(&json!(1)).unwrap_err();
/// assert_eq!(err.to_string(), "[root] did not match any of the given validators");
/// ```
pub struct AnyOfValidator {
    alternatives: Vec<Box<dyn ValueValidator>>,
}

impl AnyOfValidator {
    /// Creates a new union validator over the given alternatives.
    pub fn new(alternatives: Vec<Box<dyn ValueValidator>>) -> Self {
        Self { alternatives }
    }
}

impl ValidatorLike for AnyOfValidator {
    type Output = Value;

    fn validate(&self, value: Option<&Value>, path: &ValuePath) -> ValidationResult<Value> {
        self.validate_to_value(value, path)
            .map(|v| v.unwrap_or(Value::Null))
    }

    fn validate_to_value(
        &self,
        value: Option<&Value>,
        path: &ValuePath,
    ) -> ValidationResult<Option<Value>> {
        for alternative in &self.alternatives {
            if let Ok(conformed) = alternative.validate_value(value, path) {
                return Ok(conformed);
            }
        }

        Err(ValidationError::single(
            Violation::new(path.clone(), "did not match any of the given validators")
                .with_code("any_of_none_matched"),
        ))
    }
}

/// A modifier that accepts null in addition to what its inner validator
/// accepts.
///
/// Null returns `None` immediately without invoking the inner validator.
/// Everything else, including the undefined sentinel, delegates, so an
/// undefined input is rejected by the inner validator's own rules.
///
/// # Example
///
/// ```rust
/// use conform::{nullable, string, ValidatorLike};
/// use serde_json::json;
///
/// let validator = nullable(string());
///
/// assert_eq!(validator.conform(&json!(null)).unwrap(), None);
/// assert_eq!(validator.conform(&json!("a")).unwrap(), Some("a".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct NullableValidator<S> {
    inner: S,
}

impl<S: ValidatorLike> NullableValidator<S> {
    /// Creates a new nullable modifier around the inner validator.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: ValidatorLike> ValidatorLike for NullableValidator<S> {
    type Output = Option<S::Output>;

    fn validate(
        &self,
        value: Option<&Value>,
        path: &ValuePath,
    ) -> ValidationResult<Option<S::Output>> {
        if let Some(Value::Null) = value {
            return Ok(None);
        }
        self.inner.validate(value, path).map(Some)
    }

    fn validate_to_value(
        &self,
        value: Option<&Value>,
        path: &ValuePath,
    ) -> ValidationResult<Option<Value>> {
        if let Some(Value::Null) = value {
            return Ok(Some(Value::Null));
        }
        self.inner.validate_to_value(value, path)
    }
}

/// A modifier that accepts the undefined sentinel in addition to what its
/// inner validator accepts.
///
/// Undefined returns `None` immediately without invoking the inner validator.
/// Everything else, including null, delegates, so a null input is rejected
/// by the inner validator's own rules.
///
/// # Example
///
/// ```rust
/// use conform::{optional, string, ValidatorLike, ValuePath};
/// use serde_json::json;
///
/// let validator = optional(string());
///
/// assert_eq!(validator.validate(None, &ValuePath::root()).unwrap(), None);
/// assert!(validator.conform(&json!(null)).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct OptionalValidator<S> {
    inner: S,
}

impl<S: ValidatorLike> OptionalValidator<S> {
    /// Creates a new optional modifier around the inner validator.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: ValidatorLike> ValidatorLike for OptionalValidator<S> {
    type Output = Option<S::Output>;

    fn validate(
        &self,
        value: Option<&Value>,
        path: &ValuePath,
    ) -> ValidationResult<Option<S::Output>> {
        if value.is_none() {
            return Ok(None);
        }
        self.inner.validate(value, path).map(Some)
    }

    fn validate_to_value(
        &self,
        value: Option<&Value>,
        path: &ValuePath,
    ) -> ValidationResult<Option<Value>> {
        if value.is_none() {
            return Ok(None);
        }
        self.inner.validate_to_value(value, path)
    }
}
