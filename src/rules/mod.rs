//! Built-in leaf rules.
//!
//! Each family is expressed purely via [`Outcome`](crate::Outcome)
//! construction and the [`Rule`](crate::Rule) algebra; the engine has no
//! special cases for any of them. Leaf rules report violations at the root
//! path; registering them through `Builder::field` (or wrapping with
//! [`Rule::at_field`](crate::Rule::at_field)) relocates the violations to the
//! owning field.
//!
//! # Example
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
//! ```

pub mod collection;
pub mod instant;
pub mod ord;
pub mod text;

pub use collection::{each_element, max_size, min_size, not_empty};
pub use instant::{after, before, future, future_or_present, past};
pub use ord::{between, max, min, non_negative, positive};
pub use text::{
    alpha, contains, email, ends_with, length, matches, matches_regex, max_length, min_length,
    not_blank, numeric, one_of, starts_with, url, uuid,
};
