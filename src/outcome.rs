//! Validation outcomes and violation accumulation.
//!
//! This module provides [`Violation`] for a single validation failure,
//! [`Violations`] for a non-empty ordered collection of failures, and
//! [`Outcome`], the two-variant result of running a rule.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::path::FieldPath;

/// A single validation failure: a field path plus a human-readable message.
///
/// # Example
///
/// ```rust
/// use verdict::{FieldPath, Violation};
///
/// let violation = Violation::new(FieldPath::from_field("email"), "must be a valid email address");
/// assert_eq!(violation.path.to_string(), "email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The path to the value that failed validation. The empty (root) path
    /// means the whole value.
    pub path: FieldPath,
    /// Human-readable message describing the failure.
    pub message: String,
}

impl Violation {
    /// Creates a new violation at the given path.
    pub fn new(path: FieldPath, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
        }
    }

    /// Creates a violation at the root path (the whole value).
    pub fn at_root(message: impl Into<String>) -> Self {
        Self::new(FieldPath::root(), message)
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

impl std::error::Error for Violation {}

/// A non-empty, ordered collection of violations.
///
/// `Violations` wraps a `NonEmptyVec<Violation>` to guarantee that a failure
/// always carries at least one violation. Ordering is significant: it equals
/// rule declaration order, and for per-element checks, collection iteration
/// order.
///
/// # Combining
///
/// `Violations` implements `Semigroup`; combining preserves order with the
/// left-hand side's violations first:
///
/// ```rust
/// use verdict::{FieldPath, Violation, Violations};
/// use stillwater::prelude::*;
///
/// let a = Violations::single(Violation::new(FieldPath::from_field("name"), "must not be blank"));
/// let b = Violations::single(Violation::new(FieldPath::from_field("email"), "must be a valid email address"));
///
/// let combined = a.combine(b);
/// assert_eq!(combined.len(), 2);
/// assert_eq!(combined.first().path.to_string(), "name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations(NonEmptyVec<Violation>);

impl Violations {
    /// Creates a `Violations` containing a single violation.
    pub fn single(violation: Violation) -> Self {
        Self(NonEmptyVec::singleton(violation))
    }

    /// Creates a `Violations` from a `NonEmptyVec`.
    pub fn from_non_empty(violations: NonEmptyVec<Violation>) -> Self {
        Self(violations)
    }

    /// Creates a `Violations` from a `Vec`.
    ///
    /// # Panics
    ///
    /// Panics if the vec is empty. A failure with zero violations is a
    /// programming error, not a validation result; use
    /// [`Outcome::from_violations`] when emptiness means success.
    pub fn from_vec(violations: Vec<Violation>) -> Self {
        Self(NonEmptyVec::from_vec(violations).expect("Violations requires at least one violation"))
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns false; the collection is guaranteed non-empty.
    ///
    /// This method exists for API consistency but always returns false.
    pub fn is_empty(&self) -> bool {
        false // NonEmptyVec is never empty
    }

    /// Returns an iterator over the violations.
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    /// Returns the first violation.
    pub fn first(&self) -> &Violation {
        self.0.head()
    }

    /// Returns all violations at the specified path.
    pub fn at_path(&self, path: &FieldPath) -> Vec<&Violation> {
        self.0.iter().filter(|v| &v.path == path).collect()
    }

    /// Converts this collection into a `Vec<Violation>`.
    pub fn into_vec(self) -> Vec<Violation> {
        self.0.into_vec()
    }

    /// Returns a new collection with every violation transformed.
    pub fn map(self, f: impl FnMut(Violation) -> Violation) -> Self {
        Self::from_vec(self.into_vec().into_iter().map(f).collect())
    }
}

impl Semigroup for Violations {
    fn combine(self, other: Self) -> Self {
        Violations(self.0.combine(other.0))
    }
}

impl Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} violation(s):", self.len())?;
        for (i, violation) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for Violations {}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = Box<dyn Iterator<Item = &'a Violation> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.0.iter())
    }
}

// Violations must stay shareable across threads; rules capture them freely.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Violations>();
    assert_sync::<Violations>();
};

/// The result of running a rule: success, or failure with at least one
/// violation.
///
/// Outcomes are immutable values. They are constructed fresh by each rule
/// invocation and combined with [`Outcome::merge`], which is associative and
/// has `Success` as its identity.
///
/// # Example
///
/// ```rust
/// use verdict::{FieldPath, Outcome};
///
/// let ok = Outcome::success();
/// let bad = Outcome::fail(FieldPath::from_field("age"), "must be >= 0");
///
/// let merged = ok.merge(bad);
/// assert!(!merged.is_valid());
/// assert_eq!(merged.violations().unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The value passed every check.
    Success,
    /// The value failed; carries one or more violations in declaration order.
    Failure(Violations),
}

impl Outcome {
    /// Returns the success outcome.
    pub fn success() -> Self {
        Outcome::Success
    }

    /// Returns a failure with exactly one violation.
    pub fn fail(path: FieldPath, message: impl Into<String>) -> Self {
        Outcome::Failure(Violations::single(Violation::new(path, message)))
    }

    /// Returns a failure with exactly one violation at the root path.
    pub fn fail_at_root(message: impl Into<String>) -> Self {
        Self::fail(FieldPath::root(), message)
    }

    /// Builds an outcome from a list of violations.
    ///
    /// An empty list yields `Success`; a non-empty list yields `Failure`
    /// preserving order.
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        if violations.is_empty() {
            Outcome::Success
        } else {
            Outcome::Failure(Violations::from_vec(violations))
        }
    }

    /// Merges two outcomes.
    ///
    /// `Success` is the identity; two failures concatenate their violations
    /// with `self`'s first. The operation is associative, so any fold order
    /// over a sequence of outcomes produces the same result.
    pub fn merge(self, other: Outcome) -> Outcome {
        match (self, other) {
            (Outcome::Success, other) => other,
            (this, Outcome::Success) => this,
            (Outcome::Failure(a), Outcome::Failure(b)) => Outcome::Failure(a.combine(b)),
        }
    }

    /// Returns true if this outcome is `Success`.
    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// Returns the violations, or `None` for `Success`.
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            Outcome::Success => None,
            Outcome::Failure(violations) => Some(violations),
        }
    }

    /// Consumes the outcome, returning the violations or `None` for `Success`.
    pub fn into_violations(self) -> Option<Violations> {
        match self {
            Outcome::Success => None,
            Outcome::Failure(violations) => Some(violations),
        }
    }

    /// Rewrites every violation path under a field name.
    ///
    /// Root violations move to `name`; qualified ones are prefixed, so `zip`
    /// becomes `name.zip` and `[0]` becomes `name[0]`.
    pub fn under_field(self, name: &str) -> Outcome {
        match self {
            Outcome::Success => Outcome::Success,
            Outcome::Failure(violations) => Outcome::Failure(violations.map(|v| Violation {
                path: v.path.prepend_field(name),
                message: v.message,
            })),
        }
    }

    /// Rewrites every violation path under a collection index.
    ///
    /// Root violations move to `[index]`; qualified ones are prefixed, so
    /// `email` becomes `[index].email`.
    pub fn under_index(self, index: usize) -> Outcome {
        match self {
            Outcome::Success => Outcome::Success,
            Outcome::Failure(violations) => Outcome::Failure(violations.map(|v| Violation {
                path: v.path.prepend_index(index),
                message: v.message,
            })),
        }
    }
}
