//! Type-keyed validator registry.
//!
//! This module provides [`ValidatorRegistry`], a thread-safe mapping from a
//! Rust type to its pre-built [`Rule`]. Adapters (HTTP, CLI, batch) use it to
//! look up "the" validator for an incoming value's type without threading
//! validators through every call site. All type erasure lives here: the core
//! rule and validator types stay fully generic.

use std::any::{Any, TypeId};
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::outcome::Outcome;
use crate::rule::Rule;

/// A registered rule plus the human-readable name of its target type.
struct Registered {
    type_name: &'static str,
    rule: Arc<dyn Any + Send + Sync>,
}

/// A thread-safe registry mapping types to their validation rules.
///
/// Registration order is preserved, so [`ValidatorRegistry::type_names`]
/// lists types deterministically.
///
/// # Thread Safety
///
/// The registry uses an `RwLock` internally:
/// - Any number of threads can look up and validate concurrently.
/// - Registration calls are serialized.
///
/// # Example
///
/// ```rust
/// use verdict::rules::not_blank;
/// use verdict::{Validator, ValidatorRegistry};
///
/// struct CreateUser { name: String }
///
/// let registry = ValidatorRegistry::new();
/// registry
///     .register::<CreateUser>(
///         Validator::builder()
///             .field("name", |r: &CreateUser| &r.name, [not_blank()])
///             .build(),
///     )
///     .unwrap();
///
/// let outcome = registry.validate(&CreateUser { name: "".into() }).unwrap();
/// assert!(!outcome.is_valid());
/// ```
pub struct ValidatorRegistry {
    entries: RwLock<IndexMap<TypeId, Registered>>,
}

impl ValidatorRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(IndexMap::new()),
        }
    }

    /// Registers a rule for type `T`.
    ///
    /// Accepts anything convertible into a [`Rule<T>`]: a plain rule or a
    /// built [`Validator<T>`](crate::Validator).
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::AlreadyRegistered`] if a rule for `T` is
    /// already present; replacing a validator at runtime is almost always a
    /// configuration mistake.
    pub fn register<T: 'static>(&self, rule: impl Into<Rule<T>>) -> Result<(), RegistryError> {
        let mut entries = self.entries.write();
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        if entries.contains_key(&type_id) {
            return Err(RegistryError::AlreadyRegistered(type_name));
        }

        entries.insert(
            type_id,
            Registered {
                type_name,
                rule: Arc::new(rule.into()),
            },
        );
        Ok(())
    }

    /// Looks up the rule registered for type `T`.
    ///
    /// Returns `None` when no rule is registered; the returned rule is a
    /// cheap clone sharing the stored logic.
    pub fn find<T: 'static>(&self) -> Option<Rule<T>> {
        let entries = self.entries.read();
        entries
            .get(&TypeId::of::<T>())
            .and_then(|registered| registered.rule.downcast_ref::<Rule<T>>())
            .cloned()
    }

    /// Returns true if a rule is registered for type `T`.
    pub fn supports<T: 'static>(&self) -> bool {
        self.entries.read().contains_key(&TypeId::of::<T>())
    }

    /// Validates a value against the rule registered for its type.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotRegistered`] when no rule exists for `T`.
    pub fn validate<T: 'static>(&self, value: &T) -> Result<Outcome, RegistryError> {
        let rule = self
            .find::<T>()
            .ok_or(RegistryError::NotRegistered(std::any::type_name::<T>()))?;
        Ok(rule.apply(value))
    }

    /// Returns the names of all registered target types, in registration
    /// order.
    pub fn type_names(&self) -> Vec<&'static str> {
        self.entries
            .read()
            .values()
            .map(|registered| registered.type_name)
            .collect()
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur during registry operations.
///
/// These are programmer-facing configuration errors, not validation
/// failures; data problems are always reported through [`Outcome`].
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Attempted to register a rule for a type that already has one.
    #[error("validator for type '{0}' already registered")]
    AlreadyRegistered(&'static str),

    /// Attempted to validate a type with no registered rule.
    #[error("no validator registered for type '{0}'")]
    NotRegistered(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::text::not_blank;
    use crate::validator::Validator;

    struct CreateUser {
        name: String,
    }

    struct UpdateUser {
        name: String,
    }

    fn create_user_validator() -> Validator<CreateUser> {
        Validator::builder()
            .field("name", |r: &CreateUser| &r.name, [not_blank()])
            .build()
    }

    #[test]
    fn test_register_and_find() {
        let registry = ValidatorRegistry::new();
        registry.register::<CreateUser>(create_user_validator()).unwrap();

        assert!(registry.supports::<CreateUser>());
        assert!(registry.find::<CreateUser>().is_some());
        assert!(!registry.supports::<UpdateUser>());
        assert!(registry.find::<UpdateUser>().is_none());
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let registry = ValidatorRegistry::new();
        registry.register::<CreateUser>(create_user_validator()).unwrap();

        let result = registry.register::<CreateUser>(create_user_validator());
        assert!(matches!(result, Err(RegistryError::AlreadyRegistered(_))));
    }

    #[test]
    fn test_validate_via_registry() {
        let registry = ValidatorRegistry::new();
        registry.register::<CreateUser>(create_user_validator()).unwrap();

        let outcome = registry.validate(&CreateUser { name: "".into() }).unwrap();
        assert!(!outcome.is_valid());

        let outcome = registry
            .validate(&CreateUser { name: "Alice".into() })
            .unwrap();
        assert!(outcome.is_valid());
    }

    #[test]
    fn test_validate_unregistered_type_errors() {
        let registry = ValidatorRegistry::new();
        let result = registry.validate(&UpdateUser { name: "x".into() });
        assert!(matches!(result, Err(RegistryError::NotRegistered(_))));
    }

    #[test]
    fn test_plain_rule_registration() {
        let registry = ValidatorRegistry::new();
        registry
            .register::<i64>(Rule::satisfies(|n: &i64| *n > 0, "must be positive"))
            .unwrap();

        assert!(registry.validate(&5i64).unwrap().is_valid());
        assert!(!registry.validate(&-5i64).unwrap().is_valid());
    }

    #[test]
    fn test_type_names_preserve_registration_order() {
        let registry = ValidatorRegistry::new();
        registry.register::<CreateUser>(create_user_validator()).unwrap();
        registry
            .register::<UpdateUser>(
                Validator::builder()
                    .field("name", |r: &UpdateUser| &r.name, [not_blank()])
                    .build(),
            )
            .unwrap();

        let names = registry.type_names();
        assert_eq!(names.len(), 2);
        assert!(names[0].contains("CreateUser"));
        assert!(names[1].contains("UpdateUser"));
    }

    #[test]
    fn test_error_display() {
        let error = RegistryError::NotRegistered("my_crate::User");
        assert_eq!(
            error.to_string(),
            "no validator registered for type 'my_crate::User'"
        );
    }
}
