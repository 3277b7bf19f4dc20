//! The `non-empty` rule: text that is present and bounded.
//!
//! Length is measured in Unicode scalar values, not bytes: `"h\u{e9}llo"` is
//! five characters long.

use std::num::NonZeroUsize;

use crate::foundation::{Validate, ValidationError};

/// Registered name of the rule.
pub const NAME: &str = "non-empty";

/// Text must hold between 1 and `max` characters, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NonEmpty {
    max: NonZeroUsize,
}

impl NonEmpty {
    /// Creates the rule with an inclusive upper bound.
    #[must_use]
    pub const fn new(max: NonZeroUsize) -> Self {
        Self { max }
    }

    /// Builds the rule from its raw arguments.
    ///
    /// Exactly one base-10 integer argument, at least 1, is accepted. Any
    /// other argument list is a syntax failure.
    pub fn from_args(args: &[&str]) -> Result<Self, ValidationError> {
        let [raw] = args else {
            return Err(ValidationError::syntax(format!(
                "`{NAME}` takes exactly 1 argument, got {}",
                args.len()
            ))
            .with_rule(NAME));
        };

        let max: i64 = raw.parse().map_err(|_| {
            ValidationError::syntax(format!("`{NAME}` maximum must be an integer, got `{raw}`"))
                .with_rule(NAME)
        })?;

        usize::try_from(max)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self::new)
            .ok_or_else(|| {
                ValidationError::syntax(format!("`{NAME}` maximum must be at least 1, got {max}"))
                    .with_rule(NAME)
            })
    }

    /// Inclusive upper bound.
    #[must_use]
    pub const fn max(&self) -> usize {
        self.max.get()
    }
}

impl Validate for NonEmpty {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let len = input.chars().count();
        if len == 0 {
            return Err(ValidationError::violation(NAME, "text must not be empty"));
        }
        if len > self.max() {
            return Err(ValidationError::violation(
                NAME,
                format!(
                    "text must be at most {} characters, got {len}",
                    self.max()
                ),
            ));
        }
        Ok(())
    }
}
