//! The composable rule abstraction.
//!
//! A [`Rule<T>`] is a pure, stateless check from `&T` to an [`Outcome`],
//! stored behind an `Arc` so rules are cheap to clone and safe to share
//! across threads. Rules compose through a small algebra: [`Rule::and`],
//! [`Rule::or`], [`Rule::negate`], message/path overrides, and
//! [`Rule::adapt`] for changing the input type via a projection.

use std::fmt::Display;
use std::sync::Arc;

use crate::outcome::{Outcome, Violation};
use crate::path::FieldPath;

/// A pure check from a value to an [`Outcome`].
///
/// Rules are values: cloning one clones a shared handle, not the logic, and
/// applying the same rule to the same value twice yields identical outcomes.
/// Leaf rules report violations at the root path; the composite builder (or
/// [`Rule::at_field`]) rewrites those paths to the owning field.
///
/// # Example
///
/// ```rust
/// use verdict::rules::{min_length, matches};
/// use verdict::Rule;
///
/// let strong_password: Rule<String> = min_length(8)
///     .and(matches(".*[A-Z].*").unwrap().with_message("must contain an uppercase letter"))
///     .and(matches(".*[0-9].*").unwrap().with_message("must contain a digit"));
///
/// let outcome = strong_password.apply(&"weak".to_string());
/// assert_eq!(outcome.violations().unwrap().len(), 3);
/// ```
pub struct Rule<T: 'static> {
    check: Arc<dyn Fn(&T) -> Outcome + Send + Sync>,
}

impl<T> Clone for Rule<T> {
    fn clone(&self) -> Self {
        Self {
            check: Arc::clone(&self.check),
        }
    }
}

impl<T> Rule<T> {
    /// Creates a rule from an arbitrary check function.
    ///
    /// The function must be pure: no side effects, no retained mutable state.
    pub fn from_fn(check: impl Fn(&T) -> Outcome + Send + Sync + 'static) -> Self {
        Self {
            check: Arc::new(check),
        }
    }

    /// Creates a rule from a predicate, the quickest way to define a custom
    /// rule. A failing value produces a single root-path violation with the
    /// given message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::Rule;
    ///
    /// let even = Rule::satisfies(|n: &i64| n % 2 == 0, "must be even");
    /// assert!(even.apply(&4).is_valid());
    /// assert!(!even.apply(&3).is_valid());
    /// ```
    pub fn satisfies(
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
        message: impl Into<String>,
    ) -> Self {
        let message = message.into();
        Self::from_fn(move |value| {
            if predicate(value) {
                Outcome::success()
            } else {
                Outcome::fail_at_root(message.clone())
            }
        })
    }

    /// Creates a rule that requires the value to equal `expected`.
    pub fn equal_to(expected: T) -> Self
    where
        T: PartialEq + Display + Send + Sync,
    {
        Self::from_fn(move |value| {
            if *value == expected {
                Outcome::success()
            } else {
                Outcome::fail_at_root(format!("must equal {}", expected))
            }
        })
    }

    /// Runs this rule against a value.
    pub fn apply(&self, value: &T) -> Outcome {
        (self.check)(value)
    }

    /// Conjunction: runs BOTH rules and merges their outcomes.
    ///
    /// `and` never short-circuits: a value failing both rules reports both
    /// rules' violations, in order. This holds transitively for any depth of
    /// chaining, so composites report everything wrong in one pass.
    pub fn and(self, other: Rule<T>) -> Rule<T> {
        Rule::from_fn(move |value| self.apply(value).merge(other.apply(value)))
    }

    /// Disjunction: succeeds if either rule succeeds.
    ///
    /// Short-circuits on the first rule's success. When both fail, only the
    /// SECOND rule's violations are reported; the first attempt's are
    /// discarded. Callers rely on seeing the last attempted rule's message,
    /// so this is deliberate and stable behavior.
    pub fn or(self, other: Rule<T>) -> Rule<T> {
        Rule::from_fn(move |value| match self.apply(value) {
            Outcome::Success => Outcome::Success,
            Outcome::Failure(_) => other.apply(value),
        })
    }

    /// Inverts this rule.
    ///
    /// An inner failure becomes success; an inner success becomes a single
    /// root-path violation with the given message. The inner rule's own
    /// violation details are discarded.
    pub fn negate(self, message: impl Into<String>) -> Rule<T> {
        let message = message.into();
        Rule::from_fn(move |value| match self.apply(value) {
            Outcome::Success => Outcome::fail_at_root(message.clone()),
            Outcome::Failure(_) => Outcome::success(),
        })
    }

    /// Overrides the message of every violation this rule produces, keeping
    /// paths intact. Used to give leaf rules domain-specific wording.
    pub fn with_message(self, message: impl Into<String>) -> Rule<T> {
        let message = message.into();
        Rule::from_fn(move |value| match self.apply(value) {
            Outcome::Success => Outcome::Success,
            Outcome::Failure(violations) => Outcome::Failure(violations.map(|v| Violation {
                path: v.path,
                message: message.clone(),
            })),
        })
    }

    /// Overrides the path of every violation this rule produces, keeping
    /// messages intact.
    pub fn at(self, path: FieldPath) -> Rule<T> {
        Rule::from_fn(move |value| match self.apply(value) {
            Outcome::Success => Outcome::Success,
            Outcome::Failure(violations) => Outcome::Failure(violations.map(|v| Violation {
                path: path.clone(),
                message: v.message,
            })),
        })
    }

    /// Prefixes every violation path under a field name.
    ///
    /// Root violations move to `name`; already-qualified ones keep their
    /// suffix, so `zip` becomes `name.zip` and `[0]` becomes `name[0]`. This
    /// is what `Builder::field` applies after projecting.
    pub fn at_field(self, name: impl Into<String>) -> Rule<T> {
        let name = name.into();
        Rule::from_fn(move |value| self.apply(value).under_field(&name))
    }

    /// Adapts this rule to another input type via a borrowing projection.
    ///
    /// Paths are left unchanged; pair with [`Rule::at_field`] (or register
    /// through `Builder::field`) to relocate the violations.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::rules::not_blank;
    ///
    /// struct User { name: String }
    ///
    /// let rule = not_blank().adapt(|u: &User| &u.name);
    /// assert!(!rule.apply(&User { name: "  ".into() }).is_valid());
    /// ```
    pub fn adapt<U>(self, project: impl for<'a> Fn(&'a U) -> &'a T + Send + Sync + 'static) -> Rule<U> {
        Rule::from_fn(move |value: &U| self.apply(project(value)))
    }

    /// Lifts this rule over `Option<T>`, treating absence as a violation.
    ///
    /// `None` fails with a single root-path `"must not be absent"` violation;
    /// `Some(v)` delegates to the inner rule. Absent values are ordinary
    /// failures here, never a skipped check.
    pub fn required(self) -> Rule<Option<T>> {
        Rule::from_fn(move |value: &Option<T>| match value {
            Some(inner) => self.apply(inner),
            None => Outcome::fail_at_root("must not be absent"),
        })
    }
}
