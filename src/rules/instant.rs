//! Built-in rules for time instants.
//!
//! `future`, `past`, and `future_or_present` compare against the clock at
//! validation time; `after` and `before` compare against a fixed reference.

use chrono::{DateTime, Utc};

use crate::outcome::Outcome;
use crate::rule::Rule;

/// The instant must be strictly in the future at validation time.
pub fn future() -> Rule<DateTime<Utc>> {
    Rule::from_fn(|value: &DateTime<Utc>| {
        if *value > Utc::now() {
            Outcome::success()
        } else {
            Outcome::fail_at_root("must be in the future")
        }
    })
}

/// The instant must be now or later.
pub fn future_or_present() -> Rule<DateTime<Utc>> {
    Rule::from_fn(|value: &DateTime<Utc>| {
        if *value >= Utc::now() {
            Outcome::success()
        } else {
            Outcome::fail_at_root("must be in the present or future")
        }
    })
}

/// The instant must be strictly in the past at validation time.
pub fn past() -> Rule<DateTime<Utc>> {
    Rule::from_fn(|value: &DateTime<Utc>| {
        if *value < Utc::now() {
            Outcome::success()
        } else {
            Outcome::fail_at_root("must be in the past")
        }
    })
}

/// The instant must be strictly after a fixed reference instant.
pub fn after(reference: DateTime<Utc>) -> Rule<DateTime<Utc>> {
    Rule::from_fn(move |value: &DateTime<Utc>| {
        if *value > reference {
            Outcome::success()
        } else {
            Outcome::fail_at_root(format!("must be after {}", reference))
        }
    })
}

/// The instant must be strictly before a fixed reference instant.
pub fn before(reference: DateTime<Utc>) -> Rule<DateTime<Utc>> {
    Rule::from_fn(move |value: &DateTime<Utc>| {
        if *value < reference {
            Outcome::success()
        } else {
            Outcome::fail_at_root(format!("must be before {}", reference))
        }
    })
}
