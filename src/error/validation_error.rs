//! Validation error types.
//!
//! This module provides [`Violation`] for single validation failures and
//! [`ValidationError`] for accumulating multiple violations.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::path::ValuePath;

/// A single validation failure bound to a path.
///
/// `Violation` captures the location and description of one failed check:
/// - **path**: where in the data structure the check failed
/// - **message**: human-readable description (e.g., `should be a string`)
/// - **code**: machine-readable code for programmatic handling
///
/// Rendering is `[<path>] <message>`, ready to display or log verbatim.
///
/// # Example
///
/// ```rust
/// use conform::{ValuePath, Violation};
///
/// let violation = Violation::new(
///     ValuePath::root().push_field("email"),
///     "should be a string",
/// )
/// .with_code("invalid_type");
///
/// assert_eq!(violation.to_string(), "[root.email] should be a string");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The path to the value that failed validation.
    pub path: ValuePath,
    /// Human-readable failure message.
    pub message: String,
    /// Machine-readable code (e.g., `invalid_type`, `literal`).
    pub code: String,
}

impl Violation {
    /// Creates a new violation with the given path and message.
    ///
    /// The code defaults to "validation_error". Use `with_code` to set a more
    /// specific code.
    pub fn new(path: ValuePath, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
            code: "validation_error".to_string(),
        }
    }

    /// Sets the code and returns self for chaining.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.path, self.message)
    }
}

impl std::error::Error for Violation {}

// Violation is Send + Sync since all fields are owned types
// (String, ValuePath with Vec<PathSegment>). These assertions ensure
// it remains true if the types change.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Violation>();
    assert_sync::<Violation>();
};

/// A non-empty collection of validation failures.
///
/// `ValidationError` wraps a `NonEmptyVec<Violation>` to guarantee that at
/// least one violation is present. Single-check validators fail with one
/// violation; accumulating combinators (object, intersect) fail with every
/// field violation in declaration order.
///
/// Rendering joins the violations with newlines:
///
/// ```text
/// [root.foo] should be a number
/// [root.bar] should be a string
/// ```
///
/// # Combining Errors
///
/// `ValidationError` implements `Semigroup`, allowing failures from multiple
/// validations to be combined:
///
/// ```rust
/// use conform::{ValidationError, ValuePath, Violation};
/// use stillwater::prelude::*;
///
/// let first = ValidationError::single(
///     Violation::new(ValuePath::root().push_field("name"), "should be a string")
/// );
/// let second = ValidationError::single(
///     Violation::new(ValuePath::root().push_field("age"), "should be a number")
/// );
///
/// let combined = first.combine(second);
/// assert_eq!(combined.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError(NonEmptyVec<Violation>);

impl ValidationError {
    /// Creates a `ValidationError` containing a single violation.
    pub fn single(violation: Violation) -> Self {
        Self(NonEmptyVec::singleton(violation))
    }

    /// Creates a `ValidationError` from a `NonEmptyVec` of violations.
    pub fn from_non_empty(violations: NonEmptyVec<Violation>) -> Self {
        Self(violations)
    }

    /// Creates a `ValidationError` from a `Vec<Violation>`.
    ///
    /// Use this when you're certain the vec contains at least one violation.
    ///
    /// # Panics
    ///
    /// Panics if the provided vec is empty.
    pub fn from_vec(violations: Vec<Violation>) -> Self {
        Self(NonEmptyVec::from_vec(violations).expect("ValidationError requires at least one violation"))
    }

    /// Returns the number of violations in this error.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns false since this collection is guaranteed non-empty.
    ///
    /// This method exists for API consistency but always returns false.
    pub fn is_empty(&self) -> bool {
        false // NonEmptyVec is never empty
    }

    /// Returns an iterator over the contained violations.
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    /// Returns the first violation.
    pub fn first(&self) -> &Violation {
        self.0.head()
    }

    /// Returns all violations at the specified path.
    pub fn at_path(&self, path: &ValuePath) -> Vec<&Violation> {
        self.0.iter().filter(|v| &v.path == path).collect()
    }

    /// Returns all violations with the specified code.
    pub fn with_code(&self, code: &str) -> Vec<&Violation> {
        self.0.iter().filter(|v| v.code == code).collect()
    }

    /// Converts this error into a `Vec<Violation>`.
    pub fn into_vec(self) -> Vec<Violation> {
        self.0.into_vec()
    }
}

impl Semigroup for ValidationError {
    fn combine(self, other: Self) -> Self {
        ValidationError(self.0.combine(other.0))
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl IntoIterator for ValidationError {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationError {
    type Item = &'a Violation;
    type IntoIter = Box<dyn Iterator<Item = &'a Violation> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.0.iter())
    }
}

// ValidationError is Send + Sync since it only contains Violations
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationError>();
    assert_sync::<ValidationError>();
};
