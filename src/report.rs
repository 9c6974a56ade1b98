//! JSON rendering of validation failures.
//!
//! Adapters that surface violations over HTTP or to a console typically want
//! messages grouped by field. [`problem_detail`] renders a [`Violations`]
//! collection into an RFC-7807-style payload; root-path (whole-value)
//! violations land under the empty-string key.

use indexmap::IndexMap;
use serde_json::{json, Value};

use crate::outcome::Violations;

/// Renders violations as an RFC-7807-style problem JSON value.
///
/// Messages are grouped by field path, preserving first-seen path order and
/// per-path message order. Violations at the root path are grouped under
/// `""`.
///
/// # Example
///
/// ```rust
/// use verdict::rules::{email, not_blank};
/// use verdict::{report, Validator};
///
/// struct User { name: String, email: String }
///
/// let validator = Validator::builder()
///     .field("name", |u: &User| &u.name, [not_blank()])
///     .field("email", |u: &User| &u.email, [not_blank(), email()])
///     .build();
///
/// let outcome = validator.validate(&User { name: "".into(), email: "bad".into() });
/// let problem = report::problem_detail(&outcome.into_violations().unwrap());
///
/// assert_eq!(problem["title"], "Validation Failed");
/// assert_eq!(problem["errors"]["name"][0], "must not be blank");
/// assert_eq!(problem["errors"]["email"][0], "must be a valid email address");
/// ```
pub fn problem_detail(violations: &Violations) -> Value {
    let mut grouped: IndexMap<String, Vec<Value>> = IndexMap::new();
    for violation in violations.iter() {
        let key = if violation.path.is_root() {
            String::new()
        } else {
            violation.path.to_string()
        };
        grouped
            .entry(key)
            .or_default()
            .push(Value::String(violation.message.clone()));
    }

    let errors: serde_json::Map<String, Value> = grouped
        .into_iter()
        .map(|(path, messages)| (path, Value::Array(messages)))
        .collect();

    json!({
        "title": "Validation Failed",
        "detail": format!("{} constraint(s) violated", violations.len()),
        "errors": errors,
    })
}
