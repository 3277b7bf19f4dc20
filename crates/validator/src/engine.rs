//! The validation driver.
//!
//! ```text
//! Start -> type check --(not a record)--> Error::NotARecord
//!            |
//!            v
//!        for each field, in declaration order:
//!            no rule          -> skip
//!            not public       -> record UnexportedFieldTagged
//!            parse / resolve  -> record InvalidRuleSyntax on failure
//!            check            -> record InvalidRuleSyntax or RuleViolation on failure
//!            |
//!            v
//!        no failures -> Ok(()), otherwise Error::Invalid
//! ```
//!
//! Every field is visited exactly once; a failing field never prevents the
//! next one from being checked.

use tracing::{debug, trace};

use crate::foundation::{
    Error, FieldDescriptor, Inspect, Record, ValidationError, ValidationErrors,
};
use crate::rules::{Rule, RuleSpec};

/// Validates every rule-carrying field of a record.
///
/// Returns [`Error::NotARecord`] when `value` is not a record, and
/// [`Error::Invalid`] with one entry per failing field otherwise.
///
/// # Examples
///
/// ```rust
/// use tagcheck::{ErrorKind, Record, validate};
///
/// #[derive(Record)]
/// struct Signup {
///     #[validate("non-empty:16")]
///     pub username: String,
///     #[validate("non-empty:64")]
///     pub display_name: String,
/// }
///
/// let ok = Signup { username: "ada".into(), display_name: "Ada L.".into() };
/// assert!(validate(&ok).is_ok());
///
/// let bad = Signup { username: String::new(), display_name: "x".repeat(65) };
/// let errors = validate(&bad).unwrap_err();
/// let errors = errors.validation_errors().unwrap();
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.count_kind(ErrorKind::RuleViolation), 2);
///
/// assert!(validate("just text").unwrap_err().is_not_a_record());
/// ```
pub fn validate<T>(value: &T) -> Result<(), Error>
where
    T: Inspect + ?Sized,
{
    let value = value.value();
    let Some(record) = value.as_record() else {
        debug!(found = %value.kind(), "rejected non-record value");
        return Err(Error::NotARecord {
            found: value.kind(),
        });
    };

    validate_record(record).map_err(Error::from)
}

/// Validates a record's fields, skipping the top-level type check.
pub fn validate_record(record: &dyn Record) -> Result<(), ValidationErrors> {
    let fields = record.fields();
    let mut errors = ValidationErrors::new();

    for field in &fields {
        if let Some(Err(error)) = check_field(field) {
            errors.add(error);
        }
    }

    debug!(
        record = record.record_name(),
        fields = fields.len(),
        failures = errors.len(),
        "validated record"
    );

    errors.into_result()
}

/// Computes one field's outcome.
///
/// Returns `None` for a field without a rule specification, which is never
/// validated regardless of its visibility.
pub fn check_field(field: &FieldDescriptor<'_>) -> Option<Result<(), ValidationError>> {
    let source = field.rule?;

    let outcome = if field.is_visible() {
        apply(source, field)
    } else {
        Err(ValidationError::unexported_field())
    };

    match &outcome {
        Ok(()) => trace!(field = field.name, rule = source, "field passed"),
        Err(error) => trace!(
            field = field.name,
            rule = source,
            kind = error.kind().code(),
            "field failed"
        ),
    }

    Some(outcome.map_err(|error| error.with_field(field.name)))
}

fn apply(source: &str, field: &FieldDescriptor<'_>) -> Result<(), ValidationError> {
    let spec = RuleSpec::parse(source)?;
    let rule = Rule::resolve(&spec)?;
    rule.check(&field.value)
}

// ============================================================================
// EXTENSION TRAIT
// ============================================================================

/// Method-call form of [`validate`].
///
/// Implemented for every [`Inspect`] type, so any derived record can call
/// `record.validate()`.
pub trait ValidateExt: Inspect {
    /// Validates `self`. See [`validate`].
    fn validate(&self) -> Result<(), Error> {
        validate(self)
    }
}

impl<T: Inspect + ?Sized> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================
