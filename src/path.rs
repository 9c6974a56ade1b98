//! Field paths for locating violations in nested values.
//!
//! This module provides [`FieldPath`] and [`PathSegment`] types that identify
//! where in a value's structure a violation occurred, e.g. `address.zip` or
//! `tags[0]`. The empty path is the root sentinel, meaning "the value itself".

use std::fmt::{self, Display};

/// A segment of a field path.
///
/// Paths are built from segments that represent either field access or
/// collection indexing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A field/property access (e.g., `email`, `zip`)
    Field(String),
    /// A collection index access (e.g., `[0]`, `[42]`)
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

/// A path to a location inside a validated value.
///
/// `FieldPath` represents locations like `addresses[0].zip` and provides
/// methods for building paths on both ends: leaf rules append while
/// descending, and the composite builder prepends while rewriting child
/// violations outward.
///
/// The empty path is the root sentinel: a violation at root applies to the
/// whole value, not to any sub-field.
///
/// # Example
///
/// ```rust
/// use verdict::FieldPath;
///
/// let path = FieldPath::from_field("zip")
///     .prepend_index(0)
///     .prepend_field("addresses");
/// assert_eq!(path.to_string(), "addresses[0].zip");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Creates the empty path representing the whole value.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path from a single field segment.
    pub fn from_field(name: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Field(name.into())],
        }
    }

    /// Creates a path from a single index segment.
    pub fn from_index(idx: usize) -> Self {
        Self {
            segments: vec![PathSegment::Index(idx)],
        }
    }

    /// Returns a new path with a field segment appended.
    ///
    /// This method does not modify the original path; it returns a new one.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(name.into()));
        Self { segments }
    }

    /// Returns a new path with an index segment appended.
    ///
    /// This method does not modify the original path; it returns a new one.
    pub fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Returns a new path with a field segment prepended.
    ///
    /// Used when a field's violations are rewritten under the field's name:
    /// a root path becomes `name`, `zip` becomes `name.zip`, and `[0]`
    /// becomes `name[0]`.
    pub fn prepend_field(&self, name: impl Into<String>) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.push(PathSegment::Field(name.into()));
        segments.extend(self.segments.iter().cloned());
        Self { segments }
    }

    /// Returns a new path with an index segment prepended.
    ///
    /// Used when an element's violations are rewritten under its position:
    /// a root path becomes `[i]`, `email` becomes `[i].email`.
    pub fn prepend_index(&self, index: usize) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.push(PathSegment::Index(index));
        segments.extend(self.segments.iter().cloned());
        Self { segments }
    }

    /// Returns true if this is the root path (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments in this path.
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
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
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
