//! Built-in rules for ordered/comparable values.
//!
//! Generic over any `PartialOrd + Display` type: integers, floats, dates,
//! or domain newtypes that order.

use std::fmt::Display;

use crate::outcome::Outcome;
use crate::rule::Rule;

/// The value must be greater than or equal to `minimum`.
pub fn min<N>(minimum: N) -> Rule<N>
where
    N: PartialOrd + Display + Send + Sync + 'static,
{
    Rule::from_fn(move |value: &N| {
        if *value >= minimum {
            Outcome::success()
        } else {
            Outcome::fail_at_root(format!("must be >= {}", minimum))
        }
    })
}

/// The value must be less than or equal to `maximum`.
pub fn max<N>(maximum: N) -> Rule<N>
where
    N: PartialOrd + Display + Send + Sync + 'static,
{
    Rule::from_fn(move |value: &N| {
        if *value <= maximum {
            Outcome::success()
        } else {
            Outcome::fail_at_root(format!("must be <= {}", maximum))
        }
    })
}

/// The value must fall within `[minimum, maximum]`.
///
/// An and-chain of [`min`] and [`max`], so a value outside an impossible
/// range reports every violated bound.
pub fn between<N>(minimum: N, maximum: N) -> Rule<N>
where
    N: PartialOrd + Display + Send + Sync + 'static,
{
    min(minimum).and(max(maximum))
}

/// The value must be strictly positive.
pub fn positive() -> Rule<i64> {
    min(1)
}

/// The value must be zero or greater.
pub fn non_negative() -> Rule<i64> {
    min(0)
}
