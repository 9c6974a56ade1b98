//! Tests for group-scoped validation: which entries run for which requested
//! groups, and how scoping interacts with the builder's commit semantics.

use verdict::rules::{min_length, not_blank};
use verdict::{Group, Outcome, Validator};

const ON_CREATE: Group = Group::new("on_create");
const ON_UPDATE: Group = Group::new("on_update");
const ON_PUBLISH: Group = Group::new("on_publish");

struct Article {
    title: String,
    slug: String,
    body: String,
}

fn article(title: &str, slug: &str, body: &str) -> Article {
    Article {
        title: title.into(),
        slug: slug.into(),
        body: body.into(),
    }
}

fn article_validator() -> Validator<Article> {
    Validator::builder()
        .field("title", |a: &Article| &a.title, [not_blank()])
        .field("slug", |a: &Article| &a.slug, [not_blank()])
        .groups([ON_CREATE])
        .field("body", |a: &Article| &a.body, [min_length(100)])
        .groups([ON_PUBLISH])
        .build()
}

fn count(outcome: Outcome) -> usize {
    outcome.into_violations().map(|vs| vs.len()).unwrap_or(0)
}

#[test]
fn test_default_invocation_skips_scoped_entries() {
    let validator = article_validator();
    // Everything empty: only the ungrouped title rule is active.
    assert_eq!(count(validator.validate(&article("", "", ""))), 1);
}

#[test]
fn test_requested_group_activates_its_entries() {
    let validator = article_validator();
    let outcome = validator.validate_for(&article("", "", ""), &[ON_CREATE]);
    // title (ungrouped) + slug (on_create); body stays dormant.
    assert_eq!(count(outcome), 2);
}

#[test]
fn test_multiple_requested_groups_union_their_entries() {
    let validator = article_validator();
    let outcome = validator.validate_for(&article("", "", ""), &[ON_CREATE, ON_PUBLISH]);
    assert_eq!(count(outcome), 3);
}

#[test]
fn test_unknown_requested_group_adds_nothing() {
    let validator = article_validator();
    let outcome = validator.validate_for(&article("", "", ""), &[ON_UPDATE]);
    assert_eq!(count(outcome), 1);
}

#[test]
fn test_entry_carrying_default_group_runs_unconditionally() {
    let validator = Validator::builder()
        .field("title", |a: &Article| &a.title, [not_blank()])
        .groups([Group::DEFAULT, ON_PUBLISH])
        .build();

    assert_eq!(count(validator.validate(&article("", "x", "y"))), 1);
    assert_eq!(
        count(validator.validate_for(&article("", "x", "y"), &[ON_UPDATE])),
        1
    );
}

#[test]
fn test_entry_in_several_groups_runs_when_any_is_requested() {
    let validator = Validator::builder()
        .field("slug", |a: &Article| &a.slug, [not_blank()])
        .groups([ON_CREATE, ON_UPDATE])
        .build();

    let value = article("t", "", "b");
    assert!(validator.validate(&value).is_valid());
    assert!(!validator.validate_for(&value, &[ON_CREATE]).is_valid());
    assert!(!validator.validate_for(&value, &[ON_UPDATE]).is_valid());
    assert!(validator.validate_for(&value, &[ON_PUBLISH]).is_valid());
}

#[test]
fn test_active_entries_keep_registration_order() {
    let validator = article_validator();
    let outcome = validator.validate_for(&article("", "", ""), &[ON_PUBLISH, ON_CREATE]);

    // Requested-group order is irrelevant; registration order wins.
    let violations = outcome.into_violations().unwrap();
    let paths: Vec<_> = violations.iter().map(|v| v.path.to_string()).collect();
    assert_eq!(paths, vec!["title", "slug", "body"]);
}

#[test]
fn test_scoping_applies_to_the_whole_preceding_registration() {
    let validator = Validator::builder()
        .field("title", |a: &Article| &a.title, [not_blank(), min_length(3)])
        .groups([ON_CREATE])
        .build();

    let value = article("", "s", "b");
    assert!(validator.validate(&value).is_valid());
    assert_eq!(count(validator.validate_for(&value, &[ON_CREATE])), 2);
}

#[test]
fn test_group_filtering_survives_validator_cloning() {
    let validator = article_validator();
    let clone = validator.clone();

    let value = article("", "", "");
    assert_eq!(
        count(validator.validate_for(&value, &[ON_CREATE])),
        count(clone.validate_for(&value, &[ON_CREATE]))
    );
}
