//! Literal-set validation and enum-derived literal sets.

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{ValidationError, Violation};
use crate::path::ValuePath;
use crate::ValidationResult;

use super::traits::ValidatorLike;

/// A validator accepting only values from a fixed literal set.
///
/// Input passes when it strictly equals one of the allowed values and is
/// returned unchanged. Anything else fails with
/// `must be one of [<v1>,<v2>,...], got <value>`, where allowed strings render
/// bare and the rejected value renders as JSON.
///
/// # Example
///
/// ```rust
/// use conform::{literal, ValidatorLike};
/// use serde_json::json;
///
/// let validator = literal(vec![json!("test"), json!(1), json!(2)]);
///
/// assert_eq!(validator.conform(&json!(1)).unwrap(), json!(1));
///
/// let err = validator.conform(&json!(3)).unwrap_err();
/// assert_eq!(err.to_string(), "[root] must be one of [test,1,2], got 3");
/// ```
#[derive(Debug, Clone)]
pub struct LiteralValidator {
    allowed: Vec<Value>,
}

impl LiteralValidator {
    /// Creates a new literal validator over the given allowed set.
    pub fn new(allowed: Vec<Value>) -> Self {
        Self { allowed }
    }
}

impl ValidatorLike for LiteralValidator {
    type Output = Value;

    fn validate(&self, value: Option<&Value>, path: &ValuePath) -> ValidationResult<Value> {
        if let Some(v) = value {
            if self.allowed.iter().any(|allowed| allowed == v) {
                return Ok(v.clone());
            }
        }

        let allowed = self
            .allowed
            .iter()
            .map(literal_label)
            .collect::<Vec<_>>()
            .join(",");
        let got = match value {
            Some(v) => v.to_string(),
            None => "undefined".to_string(),
        };

        Err(ValidationError::single(
            Violation::new(
                path.clone(),
                format!("must be one of [{}], got {}", allowed, got),
            )
            .with_code("literal"),
        ))
    }

    fn validate_to_value(
        &self,
        value: Option<&Value>,
        path: &ValuePath,
    ) -> ValidationResult<Option<Value>> {
        self.validate(value, path).map(Some)
    }
}

/// Renders an allowed value for the `must be one of [...]` listing.
///
/// Strings render bare (no quotes); everything else renders as JSON.
fn literal_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Derives a [`LiteralValidator`] from an enum-like mapping.
///
/// The allowed set is the *values* of the mapping, excluding any string value
/// that is itself also a key of the mapping. Numeric enumerations commonly
/// carry reverse-lookup entries (`{"Test": 1, "1": "Test"}`); the exclusion
/// filters those artifacts out. A string-valued enum whose legitimate value
/// happens to equal one of its own member names is likewise excluded; callers
/// with such enums should use [`crate::literal`] directly.
///
/// # Example
///
/// ```rust
/// use conform::{enum_value, ValidatorLike};
/// use indexmap::indexmap;
/// use serde_json::json;
///
/// let validator = enum_value(&indexmap! {
///     "Test".to_string() => json!(1),
///     "Cool".to_string() => json!(2),
/// });
///
/// assert!(validator.conform(&json!(1)).is_ok());
/// assert!(validator.conform(&json!("Test")).is_err());
/// ```
pub fn enum_value(mapping: &IndexMap<String, Value>) -> LiteralValidator {
    let allowed = mapping
        .values()
        .filter(|value| match value.as_str() {
            Some(s) => !mapping.contains_key(s),
            None => true,
        })
        .cloned()
        .collect();

    LiteralValidator::new(allowed)
}
