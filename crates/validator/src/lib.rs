//! # tagcheck
//!
//! Declarative field validation for Rust records.
//!
//! Attach a rule specification to a field with `#[validate("...")]`, derive
//! [`Record`], and call [`validate`]. Every rule-carrying field is checked
//! and every failure is reported, in field declaration order.
//!
//! ## Quick Start
//!
//! ```rust
//! use tagcheck::prelude::*;
//!
//! #[derive(Record)]
//! struct Profile {
//!     #[validate("non-empty:20")]
//!     pub nickname: String,
//!     pub bio: String,
//! }
//!
//! let profile = Profile { nickname: "neo".into(), bio: String::new() };
//! assert!(profile.validate().is_ok());
//! ```
//!
//! ## Rule specifications
//!
//! ```text
//! <rule-name> ":" [ <arg> { "," <arg> } ]
//! ```
//!
//! | Rule        | Arguments         | Applies to | Passes when                       |
//! |-------------|-------------------|------------|-----------------------------------|
//! | `non-empty` | `max` (integer ≥1) | text       | `1 <= chars <= max`               |
//!
//! Specifications are interpreted at validation time. A malformed
//! specification, an unknown rule or a rule placed on a field of the wrong
//! kind is reported as [`ErrorKind::InvalidRuleSyntax`]; a rule on a field
//! that is not `pub` is reported as [`ErrorKind::UnexportedFieldTagged`];
//! a value that breaks its rule is an [`ErrorKind::RuleViolation`].
//!
//! ## Features
//!
//! - `derive` (default): re-exports `#[derive(Record)]`.
//! - `serde` (default): JSON error reports and validation of
//!   `serde_json::Value` (which is never a record).

// Lets `#[derive(Record)]` expand to `::tagcheck::...` inside this crate's own tests.
extern crate self as tagcheck;

pub mod engine;
pub mod foundation;
pub mod prelude;
pub mod rules;

pub use engine::{ValidateExt, check_field, validate, validate_record};
pub use foundation::{
    Error, ErrorKind, FieldDescriptor, FieldValue, Inspect, Record, ValidationError,
    ValidationErrors, ValueKind, Visibility,
};

#[cfg(feature = "derive")]
pub use tagcheck_macros::Record;
