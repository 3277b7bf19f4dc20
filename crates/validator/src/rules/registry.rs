//! The closed rule registry.
//!
//! Every rule the engine knows is a [`RuleKind`]. A field's specification is
//! resolved once into a [`Rule`], whose variant carries the rule's parsed,
//! typed arguments. Adding a rule means adding a `RuleKind` variant, a
//! `Rule` variant wrapping its [`Validate`] implementor, and one arm in each
//! `match` below.

use std::fmt;

use crate::foundation::{FieldValue, Validate, ValidationError, ValueKind};
use crate::rules::non_empty::{self, NonEmpty};
use crate::rules::spec::RuleSpec;

// ============================================================================
// RULE KIND
// ============================================================================

/// Name-level identity of a registered rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// `non-empty:<max>`
    NonEmpty,
}

impl RuleKind {
    /// Every registered rule.
    pub const ALL: &'static [Self] = &[Self::NonEmpty];

    /// Looks up a rule by its registered name.
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// Registered name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NonEmpty => non_empty::NAME,
        }
    }

    /// Kind of value the rule applies to.
    #[must_use]
    pub const fn accepts(self) -> ValueKind {
        match self {
            Self::NonEmpty => ValueKind::Text,
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// RULE
// ============================================================================

/// A resolved rule with typed arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// See [`NonEmpty`].
    NonEmpty(NonEmpty),
}

impl Rule {
    /// Resolves a parsed specification against the registry.
    ///
    /// Unknown names and argument lists the rule does not accept are
    /// [`ErrorKind::InvalidRuleSyntax`](crate::foundation::ErrorKind::InvalidRuleSyntax).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagcheck::rules::{Rule, RuleKind, RuleSpec};
    ///
    /// let rule = Rule::resolve(&RuleSpec::parse("non-empty:8").unwrap()).unwrap();
    /// assert_eq!(rule.kind(), RuleKind::NonEmpty);
    ///
    /// assert!(Rule::resolve(&RuleSpec::parse("email:").unwrap()).is_err());
    /// ```
    pub fn resolve(spec: &RuleSpec<'_>) -> Result<Self, ValidationError> {
        let kind = RuleKind::lookup(spec.name()).ok_or_else(|| {
            ValidationError::syntax(format!("unknown rule `{}`", spec.name()))
        })?;

        match kind {
            RuleKind::NonEmpty => NonEmpty::from_args(spec.args()).map(Self::NonEmpty),
        }
    }

    /// Registry entry this rule was resolved from.
    #[must_use]
    pub const fn kind(&self) -> RuleKind {
        match self {
            Self::NonEmpty(_) => RuleKind::NonEmpty,
        }
    }

    /// Applies the rule to a value.
    ///
    /// A value of a kind the rule does not apply to is a syntax failure: the
    /// declaration can never hold for that field.
    pub fn check(&self, value: &FieldValue<'_>) -> Result<(), ValidationError> {
        match self {
            Self::NonEmpty(rule) => match value.as_text() {
                Some(text) => rule.validate(text),
                None => Err(self.kind_mismatch(value.kind())),
            },
        }
    }

    fn kind_mismatch(&self, found: ValueKind) -> ValidationError {
        let kind = self.kind();
        ValidationError::syntax(format!(
            "`{kind}` applies to {} values, not {found}",
            kind.accepts()
        ))
        .with_rule(kind.name())
    }
}
