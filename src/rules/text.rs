//! Built-in rules for text values.
//!
//! All rules operate on `String` fields and report a single root-path
//! violation when they fail. Compose them with `and`, `or`, and `negate`,
//! and override wording with `with_message`.

use std::sync::LazyLock;

use regex::Regex;

use crate::outcome::Outcome;
use crate::rule::Rule;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\w.+-]+@[\w-]+\.[\w.]{2,}$").expect("email pattern is valid")
});

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[\w\-.]+(:\d+)?(/[^\s]*)?$").expect("url pattern is valid")
});

static UUID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("uuid pattern is valid")
});

/// The value must contain at least one non-whitespace character.
pub fn not_blank() -> Rule<String> {
    Rule::from_fn(|value: &String| {
        if value.trim().is_empty() {
            Outcome::fail_at_root("must not be blank")
        } else {
            Outcome::success()
        }
    })
}

/// The value must have at least `min` characters (Unicode scalar values,
/// not bytes).
pub fn min_length(min: usize) -> Rule<String> {
    Rule::from_fn(move |value: &String| {
        if value.chars().count() >= min {
            Outcome::success()
        } else {
            Outcome::fail_at_root(format!("must be at least {} characters", min))
        }
    })
}

/// The value must have at most `max` characters.
pub fn max_length(max: usize) -> Rule<String> {
    Rule::from_fn(move |value: &String| {
        if value.chars().count() <= max {
            Outcome::success()
        } else {
            Outcome::fail_at_root(format!("must be at most {} characters", max))
        }
    })
}

/// The value's length must fall within `[min, max]`.
///
/// Both bounds are checked even when the lower one already failed, so an
/// impossible range reports every violated bound.
pub fn length(min: usize, max: usize) -> Rule<String> {
    min_length(min).and(max_length(max))
}

/// The value must match the given regex pattern.
///
/// Returns an error if the pattern does not compile; user-supplied patterns
/// surface their `regex::Error` instead of panicking.
///
/// # Example
///
/// ```rust
/// use verdict::rules::matches;
///
/// let zip = matches(r"^\d{5}(-\d{4})?$")
///     .unwrap()
///     .with_message("must be a valid US ZIP code");
/// assert!(zip.apply(&"12345".to_string()).is_valid());
/// ```
pub fn matches(pattern: &str) -> Result<Rule<String>, regex::Error> {
    Ok(matches_regex(Regex::new(pattern)?))
}

/// The value must match an already-compiled regex.
pub fn matches_regex(regex: Regex) -> Rule<String> {
    Rule::from_fn(move |value: &String| {
        if regex.is_match(value) {
            Outcome::success()
        } else {
            Outcome::fail_at_root(format!("must match pattern: {}", regex))
        }
    })
}

/// The value must be a plausible email address.
pub fn email() -> Rule<String> {
    matches_regex(EMAIL_PATTERN.clone()).with_message("must be a valid email address")
}

/// The value must be an http or https URL.
pub fn url() -> Rule<String> {
    matches_regex(URL_PATTERN.clone()).with_message("must be a valid URL (http/https)")
}

/// The value must be a hyphenated UUID.
pub fn uuid() -> Rule<String> {
    matches_regex(UUID_PATTERN.clone()).with_message("must be a valid UUID")
}

/// The value must contain only ASCII digits. The empty string passes.
pub fn numeric() -> Rule<String> {
    Rule::from_fn(|value: &String| {
        if value.chars().all(|c| c.is_ascii_digit()) {
            Outcome::success()
        } else {
            Outcome::fail_at_root("must contain only digits")
        }
    })
}

/// The value must contain only letters. The empty string passes.
pub fn alpha() -> Rule<String> {
    Rule::from_fn(|value: &String| {
        if value.chars().all(|c| c.is_alphabetic()) {
            Outcome::success()
        } else {
            Outcome::fail_at_root("must contain only letters")
        }
    })
}

/// The value must start with the given prefix.
pub fn starts_with(prefix: impl Into<String>) -> Rule<String> {
    let prefix = prefix.into();
    Rule::from_fn(move |value: &String| {
        if value.starts_with(&prefix) {
            Outcome::success()
        } else {
            Outcome::fail_at_root(format!("must start with \"{}\"", prefix))
        }
    })
}

/// The value must end with the given suffix.
pub fn ends_with(suffix: impl Into<String>) -> Rule<String> {
    let suffix = suffix.into();
    Rule::from_fn(move |value: &String| {
        if value.ends_with(&suffix) {
            Outcome::success()
        } else {
            Outcome::fail_at_root(format!("must end with \"{}\"", suffix))
        }
    })
}

/// The value must contain the given substring.
pub fn contains(substring: impl Into<String>) -> Rule<String> {
    let substring = substring.into();
    Rule::from_fn(move |value: &String| {
        if value.contains(&substring) {
            Outcome::success()
        } else {
            Outcome::fail_at_root(format!("must contain \"{}\"", substring))
        }
    })
}

/// The value must be one of the allowed strings.
pub fn one_of(allowed: &[&str]) -> Rule<String> {
    let allowed: Vec<String> = allowed.iter().map(|s| s.to_string()).collect();
    Rule::from_fn(move |value: &String| {
        if allowed.iter().any(|a| a == value) {
            Outcome::success()
        } else {
            Outcome::fail_at_root(format!("must be one of: {}", allowed.join(", ")))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(value: &str) -> String {
        value.to_string()
    }

    fn first_message(outcome: Outcome) -> String {
        outcome.into_violations().unwrap().first().message.clone()
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank().apply(&s("hello")).is_valid());
        assert!(!not_blank().apply(&s("")).is_valid());
        assert_eq!(
            first_message(not_blank().apply(&s("   "))),
            "must not be blank"
        );
    }

    #[test]
    fn test_min_length_counts_chars() {
        let rule = min_length(3);
        assert!(rule.apply(&s("日本語")).is_valid());
        assert!(!rule.apply(&s("🎉🎊")).is_valid());
        assert_eq!(
            first_message(rule.apply(&s("ab"))),
            "must be at least 3 characters"
        );
    }

    #[test]
    fn test_max_length() {
        let rule = max_length(5);
        assert!(rule.apply(&s("hello")).is_valid());
        assert_eq!(
            first_message(rule.apply(&s("too long here"))),
            "must be at most 5 characters"
        );
    }

    #[test]
    fn test_length_checks_both_bounds() {
        let rule = length(2, 5);
        assert!(rule.apply(&s("abc")).is_valid());
        assert!(!rule.apply(&s("a")).is_valid());
        assert!(!rule.apply(&s("abcdef")).is_valid());
    }

    #[test]
    fn test_length_accumulates_every_violated_bound() {
        // min > max is an impossible range; "abcd" violates both bounds and
        // the and-chain reports both instead of stopping at the first.
        let outcome = length(5, 3).apply(&s("abcd"));
        assert_eq!(outcome.into_violations().unwrap().len(), 2);
    }

    #[test]
    fn test_matches() {
        let rule = matches(r"^\d+$").unwrap();
        assert!(rule.apply(&s("12345")).is_valid());
        let message = first_message(rule.apply(&s("abc")));
        assert!(message.contains(r"^\d+$"));
    }

    #[test]
    fn test_matches_rejects_invalid_pattern() {
        assert!(matches(r"[invalid").is_err());
    }

    #[test]
    fn test_email() {
        assert!(email().apply(&s("alice@example.com")).is_valid());
        assert_eq!(
            first_message(email().apply(&s("not-an-email"))),
            "must be a valid email address"
        );
    }

    #[test]
    fn test_url() {
        assert!(url().apply(&s("https://example.com/path")).is_valid());
        assert!(url().apply(&s("http://localhost:8080")).is_valid());
        assert!(!url().apply(&s("ftp://example.com")).is_valid());
    }

    #[test]
    fn test_uuid() {
        assert!(uuid()
            .apply(&s("550e8400-e29b-41d4-a716-446655440000"))
            .is_valid());
        assert!(!uuid().apply(&s("not-a-uuid")).is_valid());
    }

    #[test]
    fn test_numeric() {
        assert!(numeric().apply(&s("0123")).is_valid());
        assert!(!numeric().apply(&s("12a")).is_valid());
    }

    #[test]
    fn test_alpha() {
        assert!(alpha().apply(&s("abcДЖ")).is_valid());
        assert!(!alpha().apply(&s("abc1")).is_valid());
    }

    #[test]
    fn test_starts_with_ends_with_contains() {
        assert!(starts_with("he").apply(&s("hello")).is_valid());
        assert!(!starts_with("lo").apply(&s("hello")).is_valid());
        assert!(ends_with("lo").apply(&s("hello")).is_valid());
        assert!(contains("ell").apply(&s("hello")).is_valid());
        assert_eq!(
            first_message(contains("xyz").apply(&s("hello"))),
            "must contain \"xyz\""
        );
    }

    #[test]
    fn test_one_of() {
        let rule = one_of(&["USER", "ADMIN"]);
        assert!(rule.apply(&s("USER")).is_valid());
        assert_eq!(
            first_message(rule.apply(&s("GUEST"))),
            "must be one of: USER, ADMIN"
        );
    }

    #[test]
    fn test_violations_are_at_root() {
        let outcome = not_blank().apply(&s(""));
        assert!(outcome.into_violations().unwrap().first().path.is_root());
    }
}
