//! # Verdict
//!
//! A composable validation library that accumulates ALL violations, giving
//! callers complete feedback in one pass instead of stopping at the first
//! failure.
//!
//! ## Overview
//!
//! A [`Rule<T>`] is a pure check from `&T` to an [`Outcome`]. Rules compose
//! through a small algebra (`and`, `or`, `negate`, message overrides, type
//! adaptation), and a [`Validator<T>`] assembles per-field, cross-field,
//! conditional, nested, and per-element rules into one composite that is
//! itself a rule. Failures carry [`FieldPath`]s (`address.zip`, `tags[0]`)
//! so adapters can surface each violation exactly where it occurred.
//! [`Group`] tags scope rules to specific invocation contexts; rules
//! without an explicit group always run.
//!
//! ## Core Types
//!
//! - [`FieldPath`]: path to a location in a nested value (e.g. `users[0].email`)
//! - [`Violation`]: a single validation failure with its path and message
//! - [`Violations`]: a non-empty, ordered collection of violations
//! - [`Outcome`]: the two-variant result, `Success` or `Failure(Violations)`
//! - [`Rule`]: the composable check abstraction
//! - [`Validator`]: an immutable composite of group-tagged rules
//!
//! ## Example
//!
//! ```rust
//! use verdict::rules::{between, email, not_blank};
//! use verdict::Validator;
//!
//! struct User {
//!     name: String,
//!     email: String,
//!     age: i64,
//! }
//!
//! let validator = Validator::builder()
//!     .field("name", |u: &User| &u.name, [not_blank()])
//!     .field("email", |u: &User| &u.email, [not_blank(), email()])
//!     .field("age", |u: &User| &u.age, [between(0, 150)])
//!     .build();
//!
//! let user = User {
//!     name: "".into(),
//!     email: "not-an-email".into(),
//!     age: -5,
//! };
//!
//! // One call reports every violation, in declaration order.
//! let outcome = validator.validate(&user);
//! assert_eq!(outcome.violations().unwrap().len(), 3);
//! ```

pub mod outcome;
pub mod path;
pub mod registry;
pub mod report;
pub mod rule;
pub mod rules;
pub mod validator;

pub use outcome::{Outcome, Violation, Violations};
pub use path::{FieldPath, PathSegment};
pub use registry::{RegistryError, ValidatorRegistry};
pub use rule::Rule;
pub use validator::{Builder, Group, Validator};

/// One-stop import for the whole DSL.
///
/// ```rust
/// use verdict::prelude::*;
///
/// let rule = not_blank().and(max_length(100));
/// assert!(rule.apply(&"hello".to_string()).is_valid());
/// ```
pub mod prelude {
    pub use crate::rules::*;
    pub use crate::{FieldPath, Group, Outcome, Rule, Validator, Violation, Violations};
}
