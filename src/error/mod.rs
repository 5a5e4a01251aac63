//! Error types for validation failures.
//!
//! Provides [`Violation`] for a single path-bound failure and
//! [`ValidationError`] for a non-empty collection of violations.

mod validation_error;

pub use validation_error::{ValidationError, Violation};
