//! Rule specification grammar.
//!
//! ```text
//! rule-spec := rule-name ":" [ arg { "," arg } ]
//! ```
//!
//! The name ends at the first `:`; everything after it is the argument list.
//! Arguments are split on `,` with no trimming and no escaping, so an
//! argument can never contain a comma. A `:` inside the argument list is kept
//! as part of the argument.

use smallvec::SmallVec;

use crate::foundation::ValidationError;

/// Separates the rule name from its arguments.
pub const RULE_SEPARATOR: char = ':';

/// Separates arguments from each other.
pub const ARG_DELIMITER: char = ',';

/// A parsed rule specification, borrowing from its source string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec<'s> {
    name: &'s str,
    args: SmallVec<[&'s str; 2]>,
}

impl<'s> RuleSpec<'s> {
    /// Parses a rule specification.
    ///
    /// Fails with [`ErrorKind::InvalidRuleSyntax`](crate::foundation::ErrorKind::InvalidRuleSyntax)
    /// when the separator is missing or the rule name is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagcheck::rules::RuleSpec;
    ///
    /// let spec = RuleSpec::parse("non-empty:10").unwrap();
    /// assert_eq!(spec.name(), "non-empty");
    /// assert_eq!(spec.args(), ["10"]);
    ///
    /// let bare = RuleSpec::parse("flag:").unwrap();
    /// assert!(bare.args().is_empty());
    ///
    /// assert!(RuleSpec::parse("non-empty").is_err());
    /// ```
    pub fn parse(source: &'s str) -> Result<Self, ValidationError> {
        let Some((name, rest)) = source.split_once(RULE_SEPARATOR) else {
            return Err(ValidationError::syntax(format!(
                "missing `{RULE_SEPARATOR}` after rule name in `{source}`"
            )));
        };

        if name.is_empty() {
            return Err(ValidationError::syntax(format!(
                "empty rule name in `{source}`"
            )));
        }

        let args = if rest.is_empty() {
            SmallVec::new()
        } else {
            rest.split(ARG_DELIMITER).collect()
        };

        Ok(Self { name, args })
    }

    /// Rule name, everything before the first separator.
    #[must_use]
    pub fn name(&self) -> &'s str {
        self.name
    }

    /// Raw arguments, in order.
    #[must_use]
    pub fn args(&self) -> &[&'s str] {
        &self.args
    }
}
