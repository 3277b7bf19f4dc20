//! Records and their field descriptor tables.
//!
//! A [`Record`] exposes its declared fields, in declaration order, as
//! [`FieldDescriptor`]s. `#[derive(Record)]` generates this table from the
//! struct definition; it can also be written by hand.

use crate::foundation::value::{FieldValue, Inspect};

/// Who can see a field from outside its defining module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    /// `pub`: externally visible.
    Public,
    /// `pub(crate)`, `pub(super)`, `pub(in path)`.
    Restricted,
    /// No visibility modifier.
    #[default]
    Private,
}

impl Visibility {
    /// Returns true if rules may be declared on a field with this visibility.
    #[inline]
    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Public)
    }
}

/// One declared field of a record.
///
/// Produced fresh on every [`Record::fields`] call.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor<'a> {
    /// Declared field name (`"0"`, `"1"`, ... for tuple fields).
    pub name: &'static str,
    /// Declared visibility.
    pub visibility: Visibility,
    /// Raw rule specification. `None` means the field carries no rule;
    /// `Some("")` is an empty, and therefore malformed, specification.
    pub rule: Option<&'a str>,
    /// Current value of the field.
    pub value: FieldValue<'a>,
}

impl<'a> FieldDescriptor<'a> {
    /// Creates a descriptor for a field without a rule.
    pub fn new(
        name: &'static str,
        visibility: Visibility,
        value: &'a (impl Inspect + ?Sized),
    ) -> Self {
        Self {
            name,
            visibility,
            rule: None,
            value: value.value(),
        }
    }

    /// Creates a descriptor for a field that is never validated.
    ///
    /// The value is not inspected, so the field's type need not implement
    /// [`Inspect`]. `type_name` is reported as [`FieldValue::Opaque`].
    pub const fn untagged(
        name: &'static str,
        visibility: Visibility,
        type_name: &'static str,
    ) -> Self {
        Self {
            name,
            visibility,
            rule: None,
            value: FieldValue::Opaque(type_name),
        }
    }

    /// Attaches a raw rule specification.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_rule(mut self, rule: &'a str) -> Self {
        self.rule = Some(rule);
        self
    }

    /// Returns true if the field is externally visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }
}

/// A value composed of named, declared fields.
///
/// # Examples
///
/// ```rust
/// use tagcheck::foundation::{FieldDescriptor, FieldValue, Inspect, Record, Visibility};
///
/// struct Login {
///     user: String,
/// }
///
/// impl Record for Login {
///     fn record_name(&self) -> &'static str {
///         "Login"
///     }
///
///     fn fields(&self) -> Vec<FieldDescriptor<'_>> {
///         vec![
///             FieldDescriptor::new("user", Visibility::Public, &self.user)
///                 .with_rule("non-empty:32"),
///         ]
///     }
/// }
///
/// impl Inspect for Login {
///     fn value(&self) -> FieldValue<'_> {
///         FieldValue::Record(self)
///     }
/// }
///
/// let login = Login { user: "alice".into() };
/// assert!(tagcheck::validate(&login).is_ok());
/// ```
pub trait Record {
    /// Name of the record type, used in diagnostics.
    fn record_name(&self) -> &'static str;

    /// Declared fields, in declaration order, including fields without a rule
    /// and fields that are not externally visible.
    fn fields(&self) -> Vec<FieldDescriptor<'_>>;
}
