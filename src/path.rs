//! Path representation for locating values in nested structures.
//!
//! This module provides [`ValuePath`] and [`PathSegment`] types for building
//! and rendering paths to values in nested JSON-like structures.

use std::fmt::{self, Display};

/// A segment of a value path.
///
/// Paths are built from segments that represent either field access or array
/// indexing. The first segment is the root label supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A field/property access (e.g., `user`, `email`)
    Field(String),
    /// An array index access (e.g., `[0]`, `[42]`)
    Index(usize),
}

impl PathSegment {
    /// Creates a new field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

/// A path to a value in a nested JSON-like structure.
///
/// `ValuePath` represents locations like `root.users[0].email` and provides
/// methods for building paths incrementally. Top-level validation starts from
/// a caller-supplied label, conventionally `"root"`.
///
/// Paths built via [`ValuePath::key_of`] render with a `keyof ` prefix; they
/// locate a key of a map-like structure rather than a value inside it.
///
/// # Example
///
/// ```rust
/// use conform::ValuePath;
///
/// let path = ValuePath::root()
///     .push_field("users")
///     .push_index(0)
///     .push_field("email");
///
/// assert_eq!(path.to_string(), "root.users[0].email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValuePath {
    segments: Vec<PathSegment>,
    key_context: bool,
}

impl ValuePath {
    /// Creates a path from the given root label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Field(label.into())],
            key_context: false,
        }
    }

    /// Creates a path with the conventional `"root"` label.
    pub fn root() -> Self {
        Self::new("root")
    }

    /// Returns a new path with a field segment appended.
    ///
    /// This method does not modify the original path; it returns a new one.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(name.into()));
        Self {
            segments,
            key_context: self.key_context,
        }
    }

    /// Returns a new path with an index segment appended.
    ///
    /// This method does not modify the original path; it returns a new one.
    pub fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self {
            segments,
            key_context: self.key_context,
        }
    }

    /// Returns a copy of this path that renders with a `keyof ` prefix.
    ///
    /// Used when validating the keys of a map-like structure, so failures read
    /// `[keyof root.scores] ...` rather than pointing at a value.
    pub fn key_of(&self) -> Self {
        Self {
            segments: self.segments.clone(),
            key_context: true,
        }
    }

    /// Returns the number of segments in this path, including the root label.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Returns the last segment, or None for an empty path.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }
}

impl Default for ValuePath {
    fn default() -> Self {
        Self::root()
    }
}

impl Display for ValuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.key_context {
            write!(f, "keyof ")?;
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", name)?;
                }
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}
