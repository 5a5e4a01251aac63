//! Traits for validator polymorphism.
//!
//! This module provides the [`ValidatorLike`] trait that every validator
//! implements, and the type-erased [`ValueValidator`] trait that lets
//! validators with different output types be composed together.

use serde_json::Value;

use crate::path::ValuePath;
use crate::ValidationResult;

/// The capability every validator implements.
///
/// A validator is a pure function of `(value, path)`: it either returns the
/// conformed, typed result or fails with a [`crate::ValidationError`] locating
/// every violation. Validators hold no state between invocations; a single
/// instance may be shared across threads and invoked concurrently.
///
/// The input is `Option<&Value>`, where `None` is the absent/undefined
/// sentinel: an object passes `map.get(key)` straight through, so a missing
/// key validates as undefined. JSON itself has no undefined value.
///
/// Recursion is bounded by the depth of the input value.
///
/// # Example
///
/// ```rust
/// use conform::{string, ValidatorLike, ValuePath};
/// use serde_json::json;
///
/// let validator = string();
/// let value = json!("hello");
///
/// assert_eq!(validator.validate(Some(&value), &ValuePath::root()).unwrap(), "hello");
/// ```
pub trait ValidatorLike: Send + Sync {
    /// The conformed type produced by successful validation.
    type Output;

    /// Validates a value at the given path.
    ///
    /// Returns the conformed result on success, or a `ValidationError`
    /// carrying one or more path-bound violations on failure.
    fn validate(&self, value: Option<&Value>, path: &ValuePath) -> ValidationResult<Self::Output>;

    /// Validates a value and returns the conformed result as a
    /// `serde_json::Value`.
    ///
    /// `Ok(None)` means the conformed result is absent (undefined); only
    /// [`crate::optional`] produces it. This lets validators with different
    /// output types be stored uniformly in shapes and tuples while keeping
    /// the undefined/null distinction intact.
    fn validate_to_value(
        &self,
        value: Option<&Value>,
        path: &ValuePath,
    ) -> ValidationResult<Option<Value>>;

    /// Validates a top-level value at the conventional `"root"` path.
    fn conform(&self, value: &Value) -> ValidationResult<Self::Output> {
        self.validate(Some(value), &ValuePath::root())
    }
}

/// A type-erased trait for validators that conform to JSON values.
///
/// `ValueValidator` provides type erasure for validators with different output
/// types, allowing them to be mixed in shapes, tuples, and unions. Any type
/// that implements [`ValidatorLike`] automatically implements `ValueValidator`.
///
/// # Example
///
/// ```rust
/// use conform::{boxed, number, string, ValueValidator};
///
/// let alternatives: Vec<Box<dyn ValueValidator>> = vec![
///     boxed(string()),
///     boxed(number()),
/// ];
/// ```
pub trait ValueValidator: Send + Sync {
    /// Validates a value and returns the conformed result as a JSON value,
    /// or `Ok(None)` for an absent (undefined) result.
    fn validate_value(
        &self,
        value: Option<&Value>,
        path: &ValuePath,
    ) -> ValidationResult<Option<Value>>;
}

/// Blanket implementation of `ValueValidator` for all `ValidatorLike` types.
impl<V: ValidatorLike> ValueValidator for V {
    fn validate_value(
        &self,
        value: Option<&Value>,
        path: &ValuePath,
    ) -> ValidationResult<Option<Value>> {
        self.validate_to_value(value, path)
    }
}

/// Promotes a validator to a boxed [`ValueValidator`] trait object.
///
/// Convenience for building heterogeneous collections for [`crate::tuple`]
/// and [`crate::any_of`].
pub fn boxed<V: ValidatorLike + 'static>(validator: V) -> Box<dyn ValueValidator> {
    Box::new(validator)
}
