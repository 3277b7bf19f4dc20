//! Core traits for the validation system
//!
//! [`Validate`] is the typed check behind every registered rule. A rule
//! resolved from a field's specification carries a `Validate` implementor
//! with its arguments already parsed; the engine hands it the field's value
//! once the value's kind has been matched to [`Validate::Input`].

use crate::foundation::ValidationError;

/// A typed validator.
///
/// # Examples
///
/// ```rust
/// use tagcheck::foundation::{Validate, ValidationError};
///
/// struct Ascii;
///
/// impl Validate for Ascii {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.is_ascii() {
///             Ok(())
///         } else {
///             Err(ValidationError::violation("ascii", "text contains non-ASCII characters"))
///         }
///     }
/// }
///
/// assert!(Ascii.validate("plain").is_ok());
/// assert!(Ascii.validate("na\u{ef}ve").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// Returns [`ErrorKind::RuleViolation`](crate::foundation::ErrorKind::RuleViolation)
    /// errors only: by the time a validator runs, its declaration is known to
    /// be well-formed.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}
