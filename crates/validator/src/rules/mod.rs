//! Rule specifications and the rule registry.
//!
//! A field's rule goes through three steps:
//!
//! 1. [`RuleSpec::parse`] splits the raw string into a name and arguments.
//! 2. [`Rule::resolve`] looks the name up in the registry and parses the
//!    arguments into the rule's typed payload.
//! 3. [`Rule::check`] applies the rule to the field's value.
//!
//! Steps 1 and 2 fail only with
//! [`ErrorKind::InvalidRuleSyntax`](crate::foundation::ErrorKind::InvalidRuleSyntax).

pub mod non_empty;
pub mod registry;
pub mod spec;

pub use non_empty::NonEmpty;
pub use registry::{Rule, RuleKind};
pub use spec::{ARG_DELIMITER, RULE_SEPARATOR, RuleSpec};
