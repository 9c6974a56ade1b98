//! Built-in rules for collections.
//!
//! Size rules treat the collection as a whole; [`each_element`] descends into
//! it, checking every member and rewriting violation paths with the element's
//! index. For optional collections, compose with
//! [`Rule::required`](crate::Rule::required): an absent collection is a
//! single root-level `"must not be absent"` failure, never a silently
//! skipped iteration.

use crate::outcome::Outcome;
use crate::rule::Rule;

/// The collection must contain at least one element.
pub fn not_empty<E: 'static>() -> Rule<Vec<E>> {
    Rule::from_fn(|value: &Vec<E>| {
        if value.is_empty() {
            Outcome::fail_at_root("must not be empty")
        } else {
            Outcome::success()
        }
    })
}

/// The collection must contain at least `min` elements.
pub fn min_size<E: 'static>(min: usize) -> Rule<Vec<E>> {
    Rule::from_fn(move |value: &Vec<E>| {
        if value.len() >= min {
            Outcome::success()
        } else {
            Outcome::fail_at_root(format!("must have at least {} element(s)", min))
        }
    })
}

/// The collection must contain at most `max` elements.
pub fn max_size<E: 'static>(max: usize) -> Rule<Vec<E>> {
    Rule::from_fn(move |value: &Vec<E>| {
        if value.len() <= max {
            Outcome::success()
        } else {
            Outcome::fail_at_root(format!("must have at most {} element(s)", max))
        }
    })
}

/// Validates every element of a collection against the given rule.
///
/// Iteration never stops early: every element is checked and all violations
/// are merged in element order, the same collect-everything policy `and`
/// follows. Each violation's path is rewritten under the element's index:
/// a root-path violation becomes `[i]`, a qualified one becomes `[i].field`.
///
/// # Example
///
/// ```rust
/// use verdict::rules::{each_element, not_blank};
///
/// let rule = each_element(not_blank());
/// let outcome = rule.apply(&vec!["ok".to_string(), "".to_string(), "also ok".to_string()]);
///
/// let violations = outcome.into_violations().unwrap();
/// assert_eq!(violations.first().path.to_string(), "[1]");
/// ```
pub fn each_element<E: 'static>(rule: Rule<E>) -> Rule<Vec<E>> {
    Rule::from_fn(move |collection: &Vec<E>| {
        collection
            .iter()
            .enumerate()
            .fold(Outcome::success(), |acc, (index, element)| {
                acc.merge(rule.apply(element).under_index(index))
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::text::not_blank;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_not_empty() {
        assert!(not_empty::<String>().apply(&tags(&["a"])).is_valid());
        assert!(!not_empty::<String>().apply(&tags(&[])).is_valid());
    }

    #[test]
    fn test_min_size() {
        let rule = min_size::<String>(2);
        assert!(rule.apply(&tags(&["a", "b"])).is_valid());
        assert!(!rule.apply(&tags(&["a"])).is_valid());
    }

    #[test]
    fn test_max_size() {
        let rule = max_size::<String>(2);
        assert!(rule.apply(&tags(&["a", "b"])).is_valid());
        assert!(!rule.apply(&tags(&["a", "b", "c"])).is_valid());
    }

    #[test]
    fn test_each_element_passes_when_all_pass() {
        let rule = each_element(not_blank());
        assert!(rule.apply(&tags(&["a", "b", "c"])).is_valid());
    }

    #[test]
    fn test_each_element_indexes_failures() {
        let rule = each_element(not_blank());
        let outcome = rule.apply(&tags(&["", "ok", ""]));

        let violations = outcome.into_violations().unwrap();
        let paths: Vec<_> = violations.iter().map(|v| v.path.to_string()).collect();
        assert_eq!(paths, vec!["[0]", "[2]"]);
    }

    #[test]
    fn test_each_element_checks_every_element() {
        let rule = each_element(not_blank());
        let outcome = rule.apply(&tags(&["", "", ""]));
        assert_eq!(outcome.into_violations().unwrap().len(), 3);
    }

    #[test]
    fn test_each_element_on_empty_collection_is_success() {
        let rule = each_element(not_blank());
        assert!(rule.apply(&tags(&[])).is_valid());
    }

    #[test]
    fn test_each_element_required_reports_absence_at_root() {
        let rule = each_element(not_blank()).required();
        let outcome = rule.apply(&None);

        let violations = outcome.into_violations().unwrap();
        assert!(violations.first().path.is_root());
        assert_eq!(violations.first().message, "must not be absent");
    }

    #[test]
    fn test_size_and_element_rules_compose() {
        let rule = min_size(2).and(each_element(not_blank()));
        let outcome = rule.apply(&tags(&[""]));

        let violations = outcome.into_violations().unwrap();
        assert_eq!(violations.len(), 2);
        assert!(violations.first().path.is_root());
        assert_eq!(violations.iter().nth(1).unwrap().path.to_string(), "[0]");
    }
}
