//! Composite validators: group-tagged rules assembled against one type.
//!
//! [`Validator<T>`] is an immutable, ordered collection of rules built with
//! [`Builder<T>`]. Each stored rule is tagged with zero or more [`Group`]s;
//! at invocation time only active rules run, in registration order, and
//! their outcomes merge left-to-right so the caller sees every violation in
//! one pass.
//!
//! # Example
//!
//! ```rust
//! use verdict::rules::{between, email, not_blank};
//! use verdict::{Group, Validator};
//!
//! const ON_CREATE: Group = Group::new("on_create");
//!
//! struct User {
//!     name: String,
//!     email: String,
//!     age: i64,
//!     password: String,
//! }
//!
//! let validator = Validator::builder()
//!     .field("name", |u: &User| &u.name, [not_blank()])
//!     .field("email", |u: &User| &u.email, [not_blank(), email()])
//!     .field("age", |u: &User| &u.age, [between(0, 150)])
//!     .field("password", |u: &User| &u.password, [not_blank()])
//!     .groups([ON_CREATE])
//!     .build();
//!
//! let user = User {
//!     name: "Alice".into(),
//!     email: "alice@example.com".into(),
//!     age: 30,
//!     password: "".into(),
//! };
//!
//! // Default rules only: the password rule is scoped to ON_CREATE.
//! assert!(validator.validate(&user).is_valid());
//! // Requesting the group activates it.
//! assert!(!validator.validate_for(&user, &[ON_CREATE]).is_valid());
//! ```

use std::fmt::{self, Display};
use std::sync::Arc;

use crate::outcome::Outcome;
use crate::path::FieldPath;
use crate::rule::Rule;

/// An opaque validation group tag.
///
/// Groups scope rules to specific invocation contexts (creation, update,
/// publication, ...). Applications declare their own as constants:
///
/// ```rust
/// use verdict::Group;
///
/// const ON_CREATE: Group = Group::new("on_create");
/// const ON_UPDATE: Group = Group::new("on_update");
/// ```
///
/// [`Group::DEFAULT`] is reserved: rules registered without an explicit
/// group belong to it implicitly, and it participates in every invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Group(&'static str);

impl Group {
    /// The implicit group for rules registered without explicit groups.
    /// Always active, regardless of which groups an invocation requests.
    pub const DEFAULT: Group = Group("default");

    /// Declares a new group with the given tag.
    pub const fn new(name: &'static str) -> Self {
        Group(name)
    }

    /// Returns the group's tag.
    pub const fn name(&self) -> &'static str {
        self.0
    }
}

impl Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// One group-tagged rule inside a [`Validator`].
struct Entry<T: 'static> {
    groups: Vec<Group>,
    rule: Rule<T>,
}

impl<T> Entry<T> {
    /// An entry runs when it has no explicit groups, carries the Default
    /// group, or shares at least one group with the requested set.
    fn is_active(&self, requested: &[Group]) -> bool {
        self.groups.is_empty()
            || self.groups.contains(&Group::DEFAULT)
            || self.groups.iter().any(|g| requested.contains(g))
    }
}

/// An immutable composite of group-tagged rules for values of type `T`.
///
/// Built once via [`Validator::builder`], then freely cloned (entries sit
/// behind an `Arc`) and invoked concurrently: a validator holds no mutable
/// state between invocations, so repeated calls on the same value produce
/// identical outcomes.
///
/// A validator is itself usable as a [`Rule<T>`] (via `From`), which is how
/// one validator nests inside another or applies to every element of a
/// collection.
pub struct Validator<T: 'static> {
    entries: Arc<Vec<Entry<T>>>,
}

impl<T> Clone for Validator<T> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<T> Validator<T> {
    /// Creates a new [`Builder`] for values of type `T`.
    pub fn builder() -> Builder<T> {
        Builder::new()
    }

    /// Runs all Default-group rules against the value.
    ///
    /// Equivalent to `validate_for(value, &[])`.
    pub fn validate(&self, value: &T) -> Outcome {
        self.validate_for(value, &[])
    }

    /// Runs Default-group rules plus any rules scoped to the requested
    /// groups.
    ///
    /// Active rules run in registration order and no rule is skipped
    /// because an earlier one failed; the returned outcome carries every
    /// violation, ordered by registration. A validator with zero entries
    /// (or zero active entries) trivially succeeds.
    pub fn validate_for(&self, value: &T, groups: &[Group]) -> Outcome {
        self.entries
            .iter()
            .filter(|entry| entry.is_active(groups))
            .fold(Outcome::success(), |acc, entry| {
                acc.merge(entry.rule.apply(value))
            })
    }

    /// Returns this validator as a composable [`Rule`].
    pub fn as_rule(&self) -> Rule<T> {
        self.clone().into()
    }
}

impl<T> From<Validator<T>> for Rule<T> {
    fn from(validator: Validator<T>) -> Rule<T> {
        Rule::from_fn(move |value| validator.validate(value))
    }
}

/// Accumulates group-tagged rules and freezes them into a [`Validator`].
///
/// Registration calls (`field`, `rule`, `require`, `when`, `nested`) place
/// their rules in a pending slot; an immediately following
/// [`Builder::groups`] call commits them under explicit groups, and any
/// other builder call first auto-commits the pending slot to the implicit
/// Default group. `build` consumes the builder, so a finalized builder
/// cannot be reused.
pub struct Builder<T: 'static> {
    committed: Vec<Entry<T>>,
    pending: Vec<Rule<T>>,
}

impl<T> Builder<T> {
    fn new() -> Self {
        Self {
            committed: Vec::new(),
            pending: Vec::new(),
        }
    }

    fn commit_pending(&mut self, groups: Vec<Group>) {
        for rule in self.pending.drain(..) {
            self.committed.push(Entry {
                groups: groups.clone(),
                rule,
            });
        }
    }

    /// Registers per-field rules.
    ///
    /// Each supplied rule is run against the projected sub-value and its
    /// violations are rewritten under `name`: a root-path violation moves to
    /// `name`, a qualified one (from a nested or per-element rule) becomes
    /// `name.child` or `name[i]`. One entry is stored per rule, preserving
    /// declaration order, so a following `groups(...)` call scopes all of
    /// them.
    pub fn field<F: 'static>(
        mut self,
        name: impl Into<String>,
        project: impl for<'a> Fn(&'a T) -> &'a F + Send + Sync + 'static,
        rules: impl IntoIterator<Item = Rule<F>>,
    ) -> Self {
        self.commit_pending(Vec::new());
        let name = name.into();
        let project = Arc::new(project);
        for rule in rules {
            let name = name.clone();
            let project = Arc::clone(&project);
            self.pending.push(Rule::from_fn(move |value: &T| {
                rule.apply(project(value)).under_field(&name)
            }));
        }
        self
    }

    /// Registers a whole-value rule, verbatim.
    ///
    /// For cross-field invariants spanning multiple fields. Report such
    /// violations at whichever field path fits, e.g.
    /// `Outcome::fail(FieldPath::from_field("confirm_password"), ...)`.
    pub fn rule(mut self, rule: Rule<T>) -> Self {
        self.commit_pending(Vec::new());
        self.pending.push(rule);
        self
    }

    /// Registers a presence rule: the projection must yield `Some`, else a
    /// single `(name, "is required")` violation is reported.
    pub fn require<F: 'static>(
        mut self,
        name: impl Into<String>,
        project: impl for<'a> Fn(&'a T) -> Option<&'a F> + Send + Sync + 'static,
    ) -> Self {
        self.commit_pending(Vec::new());
        let name = name.into();
        self.pending.push(Rule::from_fn(move |value: &T| {
            if project(value).is_some() {
                Outcome::success()
            } else {
                Outcome::fail(FieldPath::from_field(name.clone()), "is required")
            }
        }));
        self
    }

    /// Registers a guarded rule.
    ///
    /// When the predicate is false for a value, the rule is skipped and the
    /// entry contributes success; when true, the rule runs normally.
    pub fn when(
        mut self,
        condition: impl Fn(&T) -> bool + Send + Sync + 'static,
        rule: Rule<T>,
    ) -> Self {
        self.commit_pending(Vec::new());
        self.pending.push(Rule::from_fn(move |value: &T| {
            if condition(value) {
                rule.apply(value)
            } else {
                Outcome::success()
            }
        }));
        self
    }

    /// Embeds a child rule (or validator) for a sub-object.
    ///
    /// The child runs against the projected sub-value and every violation
    /// path is prefixed with `prefix`: a child violation at `zip` surfaces
    /// as `prefix.zip`, one at root as `prefix` alone.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::rules::not_blank;
    /// use verdict::Validator;
    ///
    /// struct Address { zip: String }
    /// struct User { address: Address }
    ///
    /// let address = Validator::builder()
    ///     .field("zip", |a: &Address| &a.zip, [not_blank()])
    ///     .build();
    ///
    /// let user = Validator::builder()
    ///     .nested("address", |u: &User| &u.address, address)
    ///     .build();
    ///
    /// let outcome = user.validate(&User { address: Address { zip: "".into() } });
    /// let violations = outcome.into_violations().unwrap();
    /// assert_eq!(violations.first().path.to_string(), "address.zip");
    /// ```
    pub fn nested<C: 'static>(
        mut self,
        prefix: impl Into<String>,
        project: impl for<'a> Fn(&'a T) -> &'a C + Send + Sync + 'static,
        rule: impl Into<Rule<C>>,
    ) -> Self {
        self.commit_pending(Vec::new());
        let prefix = prefix.into();
        let rule = rule.into();
        self.pending.push(Rule::from_fn(move |value: &T| {
            rule.apply(project(value)).under_field(&prefix)
        }));
        self
    }

    /// Scopes the most recent registration step to the given groups,
    /// replacing its implicit Default membership.
    ///
    /// Applies to every rule the previous call produced (all of a multi-rule
    /// `field`'s entries). Omitting `groups` leaves the registration in the
    /// Default group.
    ///
    /// # Panics
    ///
    /// Panics when no registration is pending; calling `groups` first, or
    /// twice in a row, is a programming error, not a validation failure.
    pub fn groups(mut self, groups: impl IntoIterator<Item = Group>) -> Self {
        assert!(
            !self.pending.is_empty(),
            "groups() must directly follow a registration call (field/rule/require/when/nested)"
        );
        let groups: Vec<Group> = groups.into_iter().collect();
        self.commit_pending(groups);
        self
    }

    /// Freezes the accumulated rules into an immutable [`Validator`].
    ///
    /// Consumes the builder; the entries move into the validator and the
    /// builder cannot be used again.
    pub fn build(mut self) -> Validator<T> {
        self.commit_pending(Vec::new());
        Validator {
            entries: Arc::new(self.committed),
        }
    }
}

impl<T> Default for Builder<T> {
    fn default() -> Self {
        Self::new()
    }
}
