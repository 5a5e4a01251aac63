//! # Conform
//!
//! A composable runtime validation library: given an arbitrary untyped value
//! (as produced by parsing JSON), confirm it conforms to a declared shape and
//! return a conformed, typed result, or report the violations found.
//!
//! ## Overview
//!
//! Validators are small owned values built by constructor functions. Primitives
//! ([`string`], [`number`], [`boolean`], [`literal`], [`enum_value`],
//! [`unknown`]) check leaf values; combinators ([`array`], [`tuple`],
//! [`object`], [`map`], [`object_map`], [`any_of`], [`intersect`],
//! [`nullable`], [`optional`]) compose them into arbitrarily deep validators.
//! Every failure carries the path to the offending value, rendered as
//! `[root.items[2].name] should be a string`.
//!
//! Sequence combinators fail fast; [`object`] and [`intersect`] accumulate
//! every field violation into a single error, newline-joined in declaration
//! order.
//!
//! ## Core Types
//!
//! - [`ValuePath`]: path to a value in a nested structure (e.g., `root.users[0].email`)
//! - [`Violation`]: a single validation failure with path, message, and code
//! - [`ValidationError`]: a non-empty collection of violations
//! - [`ValidatorLike`]: the capability every validator implements
//!
//! ## Example
//!
//! ```rust
//! use conform::{object, string, number, ValidatorLike};
//! use serde_json::json;
//!
//! let validator = object()
//!     .field("name", string())
//!     .field("age", number());
//!
//! let conformed = validator.conform(&json!({"name": "Alice", "age": 30}));
//! assert!(conformed.is_ok());
//!
//! let err = validator.conform(&json!({"name": 1})).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "[root.name] should be a string\n[root.age] should be a number"
//! );
//! ```

pub mod error;
pub mod path;
pub mod validator;

pub use error::{ValidationError, Violation};
pub use path::{PathSegment, ValuePath};
pub use validator::{
    any_of, array, boolean, boxed, enum_value, intersect, literal, map, nullable, number, object,
    object_map, optional, string, tuple, unknown, AnyOfValidator, ArrayValidator, BooleanValidator,
    EnumMapping, LiteralValidator, MapValidator, NullableValidator, NumberValidator,
    ObjectMapValidator, ObjectValidator, OptionalValidator, Shape, StringValidator, TupleValidator,
    UnknownValidator, ValidatorLike, ValueValidator,
};

/// Type alias for validation results using ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;
