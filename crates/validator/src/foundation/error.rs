//! Error types for validation failures
//!
//! Three things can go wrong with a single field, classified by
//! [`ErrorKind`]: a rule declared on a field that is not public, a rule
//! declaration that is malformed or inapplicable, and a value that breaks a
//! well-formed rule. Per-field failures are collected into
//! [`ValidationErrors`]; the only failure that stops a call outright is
//! [`Error::NotARecord`].

use std::borrow::Cow;
use std::fmt;

use crate::foundation::value::ValueKind;

// ============================================================================
// ERROR KIND
// ============================================================================

/// Identity of a per-field failure.
///
/// Compare kinds with `==` to classify a failure; the rendered message is for
/// humans only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorKind {
    /// A non-public field carries a rule specification.
    UnexportedFieldTagged,
    /// The rule specification is malformed or cannot apply to the field.
    InvalidRuleSyntax,
    /// The field's value breaks a well-formed rule.
    RuleViolation,
}

impl ErrorKind {
    /// Stable error code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::UnexportedFieldTagged => "unexported_field_tagged",
            Self::InvalidRuleSyntax => "invalid_rule_syntax",
            Self::RuleViolation => "rule_violation",
        }
    }

    /// Sentinel message for this kind.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::UnexportedFieldTagged => "validation rule on non-public field is not allowed",
            Self::InvalidRuleSyntax => "invalid rule syntax",
            Self::RuleViolation => "rule violated",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single field's failure.
///
/// # Examples
///
/// ```rust
/// use tagcheck::foundation::{ErrorKind, ValidationError};
///
/// let error = ValidationError::syntax("unknown rule `trim`").with_field("name");
/// assert_eq!(error.kind(), ErrorKind::InvalidRuleSyntax);
/// assert_eq!(error.to_string(), "invalid rule syntax: unknown rule `trim`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationError {
    kind: ErrorKind,
    field: Option<Cow<'static, str>>,
    rule: Option<Cow<'static, str>>,
    detail: Option<Cow<'static, str>>,
}

impl ValidationError {
    /// Creates an error of the given kind with no detail.
    #[must_use]
    pub const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            field: None,
            rule: None,
            detail: None,
        }
    }

    /// A rule specification on a non-public field.
    #[must_use]
    pub const fn unexported_field() -> Self {
        Self::new(ErrorKind::UnexportedFieldTagged)
    }

    /// A malformed or inapplicable rule specification.
    pub fn syntax(detail: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InvalidRuleSyntax).with_detail(detail)
    }

    /// A value that breaks a well-formed rule.
    pub fn violation(
        rule: impl Into<Cow<'static, str>>,
        detail: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(ErrorKind::RuleViolation)
            .with_rule(rule)
            .with_detail(detail)
    }

    /// Sets the field this error belongs to.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Sets the rule name this error was raised by.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_rule(mut self, rule: impl Into<Cow<'static, str>>) -> Self {
        self.rule = Some(rule.into());
        self
    }

    /// Sets the human-readable detail.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_detail(mut self, detail: impl Into<Cow<'static, str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Failure identity.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Name of the failing field, if known.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Name of the rule that failed, if it was resolved.
    #[must_use]
    pub fn rule(&self) -> Option<&str> {
        self.rule.as_deref()
    }

    /// Detail appended to the sentinel message.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Returns true if this error is of the given kind.
    #[must_use]
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{}: {detail}", self.kind),
            None => fmt::Display::fmt(&self.kind, f),
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// Ordered failures of one validation call, in field declaration order.
///
/// A `ValidationErrors` returned by this crate is never empty.
///
/// Rendering is asymmetric: a single failure renders as its own message,
/// several failures render one message per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Appends an error.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Number of failures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if no failure was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// All failures in order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Iterates over failures in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// First failure.
    #[must_use]
    pub fn first(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    /// Number of failures of the given kind.
    #[must_use]
    pub fn count_kind(&self, kind: ErrorKind) -> usize {
        self.errors.iter().filter(|e| e.is(kind)).count()
    }

    /// Returns true if any failure is of the given kind.
    #[must_use]
    pub fn contains_kind(&self, kind: ErrorKind) -> bool {
        self.errors.iter().any(|e| e.is(kind))
    }

    /// Names of the failing fields, in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().filter_map(ValidationError::field)
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    #[must_use = "result must be used"]
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Converts the collection to a JSON array.
    #[cfg(feature = "serde")]
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::Array(
            self.errors
                .iter()
                .map(|e| {
                    serde_json::json!({
                        "code": e.kind.code(),
                        "message": e.to_string(),
                        "field": e.field,
                        "rule": e.rule,
                    })
                })
                .collect(),
        )
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let [only] = self.errors.as_slice() {
            return fmt::Display::fmt(only, f);
        }
        for error in &self.errors {
            writeln!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TOP-LEVEL ERROR
// ============================================================================

/// Error returned by [`validate`](crate::validate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The top-level value is not a record. No field was inspected.
    #[error("value is not a record (found {found})")]
    NotARecord {
        /// Kind of the value that was passed instead.
        found: ValueKind,
    },

    /// One or more fields failed.
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

impl Error {
    /// Returns true for the not-a-record sentinel.
    #[must_use]
    pub const fn is_not_a_record(&self) -> bool {
        matches!(self, Self::NotARecord { .. })
    }

    /// Per-field failures, if any field was inspected.
    #[must_use]
    pub const fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            Self::NotARecord { .. } => None,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
