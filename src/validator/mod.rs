//! Validator primitives and combinators.
//!
//! Each validator is constructed once, owns only its configuration, and can
//! then be invoked any number of times (including concurrently). Constructor
//! functions mirror the shapes they validate:
//!
//! - primitives: [`string`], [`number`], [`boolean`], [`literal`],
//!   [`enum_value`], [`unknown`]
//! - structure: [`array`], [`tuple`], [`object`], [`map`], [`object_map`]
//! - unions and modifiers: [`any_of`], [`intersect`], [`nullable`],
//!   [`optional`]
//!
//! # Example
//!
//! ```rust
//! use conform::{array, object, optional, string, ValidatorLike};
//! use serde_json::json;
//!
//! let manifest = object()
//!     .field("name", string())
//!     .field("tags", optional(array(string())));
//!
//! assert!(manifest.conform(&json!({"name": "demo"})).is_ok());
//! ```

mod array;
mod boolean;
mod combinators;
mod literal;
mod map;
mod number;
mod object;
mod string;
mod traits;
mod unknown;

use indexmap::IndexMap;
use serde_json::Value;

pub use array::{ArrayValidator, TupleValidator};
pub use boolean::BooleanValidator;
pub use combinators::{AnyOfValidator, NullableValidator, OptionalValidator};
pub use literal::{enum_value, LiteralValidator};
pub use map::{MapValidator, ObjectMapValidator};
pub use number::NumberValidator;
pub use object::{intersect, ObjectValidator, Shape};
pub use string::StringValidator;
pub use traits::{boxed, ValidatorLike, ValueValidator};
pub use unknown::UnknownValidator;

/// Creates a string validator. See [`StringValidator`].
pub fn string() -> StringValidator {
    StringValidator::new()
}

/// Creates a number validator. See [`NumberValidator`].
pub fn number() -> NumberValidator {
    NumberValidator::new()
}

/// Creates a boolean validator. See [`BooleanValidator`].
pub fn boolean() -> BooleanValidator {
    BooleanValidator::new()
}

/// Creates a validator accepting only the listed values. See
/// [`LiteralValidator`].
pub fn literal(values: Vec<Value>) -> LiteralValidator {
    LiteralValidator::new(values)
}

/// Creates a validator accepting any defined value. See [`UnknownValidator`].
pub fn unknown() -> UnknownValidator {
    UnknownValidator::new()
}

/// Creates a homogeneous sequence validator. See [`ArrayValidator`].
pub fn array<S: ValidatorLike>(item: S) -> ArrayValidator<S> {
    ArrayValidator::new(item)
}

/// Creates a fixed-length sequence validator with one validator per position.
/// See [`TupleValidator`].
pub fn tuple(items: Vec<Box<dyn ValueValidator>>) -> TupleValidator {
    TupleValidator::new(items)
}

/// Creates an object validator with an empty shape; declare fields with
/// [`ObjectValidator::field`].
pub fn object() -> ObjectValidator {
    ObjectValidator::new()
}

/// Creates a validator for `[key, value]` pair sequences. See
/// [`MapValidator`].
pub fn map<K: ValidatorLike, V: ValidatorLike>(key: K, value: V) -> MapValidator<K, V> {
    MapValidator::new(key, value)
}

/// Creates a validator for keyed objects with uniform key and value shapes.
/// See [`ObjectMapValidator`].
pub fn object_map<K: ValidatorLike, V: ValidatorLike>(
    key: K,
    value: V,
) -> ObjectMapValidator<K, V> {
    ObjectMapValidator::new(key, value)
}

/// Creates a first-match-wins union over the alternatives. See
/// [`AnyOfValidator`].
pub fn any_of(alternatives: Vec<Box<dyn ValueValidator>>) -> AnyOfValidator {
    AnyOfValidator::new(alternatives)
}

/// Wraps a validator so null is accepted. See [`NullableValidator`].
pub fn nullable<S: ValidatorLike>(inner: S) -> NullableValidator<S> {
    NullableValidator::new(inner)
}

/// Wraps a validator so the undefined sentinel is accepted. See
/// [`OptionalValidator`].
pub fn optional<S: ValidatorLike>(inner: S) -> OptionalValidator<S> {
    OptionalValidator::new(inner)
}

/// An enum-like mapping of member name to member value, accepted by
/// [`enum_value`].
pub type EnumMapping = IndexMap<String, Value>;
