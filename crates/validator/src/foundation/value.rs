//! Runtime view of field values.
//!
//! The engine never owns or walks a record's data. It asks each field for a
//! [`FieldValue`], a cheap borrowed view that tells it the value's
//! [`ValueKind`] and, for text, the text itself. Composite values only report
//! their shape and length: contained records, sequences and maps are not
//! validated recursively.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::foundation::record::Record;

// ============================================================================
// VALUE KIND
// ============================================================================

/// Coarse classification of a runtime value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ValueKind {
    /// Absent value (`None`, `()`, JSON `null`).
    Null,
    /// Boolean.
    Bool,
    /// Signed or unsigned integer of any width.
    Integer,
    /// Floating point number.
    Float,
    /// A single character.
    Char,
    /// UTF-8 text.
    Text,
    /// Ordered collection of values.
    Sequence,
    /// Key-value mapping.
    Map,
    /// A value with named, declared fields.
    Record,
    /// Anything the engine cannot classify.
    Opaque,
}

impl ValueKind {
    /// Lowercase name used in error details.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Char => "char",
            Self::Text => "text",
            Self::Sequence => "sequence",
            Self::Map => "map",
            Self::Record => "record",
            Self::Opaque => "opaque",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// FIELD VALUE
// ============================================================================

/// Borrowed, read-only view of a value.
#[derive(Clone, Copy)]
pub enum FieldValue<'a> {
    /// Absent value.
    Null,
    /// Boolean.
    Bool(bool),
    /// Signed integer.
    Int(i128),
    /// Unsigned integer.
    UInt(u128),
    /// Floating point number.
    Float(f64),
    /// Single character.
    Char(char),
    /// Text, borrowed from the field.
    Text(&'a str),
    /// Sequence of the given length.
    Sequence(usize),
    /// Map with the given number of entries.
    Map(usize),
    /// A record; its own fields are not descended into by the engine.
    Record(&'a dyn Record),
    /// Value of the named type that has no finer classification.
    Opaque(&'static str),
}

impl<'a> FieldValue<'a> {
    /// Returns the kind of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) | Self::UInt(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Char(_) => ValueKind::Char,
            Self::Text(_) => ValueKind::Text,
            Self::Sequence(_) => ValueKind::Sequence,
            Self::Map(_) => ValueKind::Map,
            Self::Record(_) => ValueKind::Record,
            Self::Opaque(_) => ValueKind::Opaque,
        }
    }

    /// Returns the text if this value is of text kind.
    #[must_use]
    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the record handle if this value is a record.
    #[must_use]
    pub fn as_record(&self) -> Option<&'a dyn Record> {
        match *self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Self::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
            Self::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Self::Char(v) => f.debug_tuple("Char").field(v).finish(),
            Self::Text(v) => f.debug_tuple("Text").field(v).finish(),
            Self::Sequence(len) => f.debug_tuple("Sequence").field(len).finish(),
            Self::Map(len) => f.debug_tuple("Map").field(len).finish(),
            Self::Record(record) => f.debug_tuple("Record").field(&record.record_name()).finish(),
            Self::Opaque(name) => f.debug_tuple("Opaque").field(name).finish(),
        }
    }
}

// ============================================================================
// INSPECT
// ============================================================================

/// Types whose runtime shape can be inspected by the engine.
///
/// `#[derive(Record)]` implements this for the deriving type, returning
/// [`FieldValue::Record`]. Field types used inside a derived record must
/// implement it too; for a foreign type without a natural kind, return
/// [`FieldValue::Opaque`].
///
/// # Examples
///
/// ```rust
/// use tagcheck::foundation::{FieldValue, Inspect, ValueKind};
///
/// struct Celsius(f64);
///
/// impl Inspect for Celsius {
///     fn value(&self) -> FieldValue<'_> {
///         FieldValue::Float(self.0)
///     }
/// }
///
/// assert_eq!(Celsius(21.5).value().kind(), ValueKind::Float);
/// ```
pub trait Inspect {
    /// Returns a borrowed view of this value.
    fn value(&self) -> FieldValue<'_>;
}

macro_rules! inspect_as {
    ($variant:ident($wide:ty): $($ty:ty),+ $(,)?) => {
        $(
            impl Inspect for $ty {
                #[inline]
                fn value(&self) -> FieldValue<'_> {
                    FieldValue::$variant(<$wide>::from(*self))
                }
            }
        )+
    };
}

inspect_as!(Int(i128): i8, i16, i32, i64, i128);
inspect_as!(UInt(u128): u8, u16, u32, u64, u128);
inspect_as!(Float(f64): f32, f64);

impl Inspect for isize {
    #[inline]
    fn value(&self) -> FieldValue<'_> {
        FieldValue::Int(*self as i128)
    }
}

impl Inspect for usize {
    #[inline]
    fn value(&self) -> FieldValue<'_> {
        FieldValue::UInt(*self as u128)
    }
}

impl Inspect for bool {
    #[inline]
    fn value(&self) -> FieldValue<'_> {
        FieldValue::Bool(*self)
    }
}

impl Inspect for char {
    #[inline]
    fn value(&self) -> FieldValue<'_> {
        FieldValue::Char(*self)
    }
}

impl Inspect for () {
    #[inline]
    fn value(&self) -> FieldValue<'_> {
        FieldValue::Null
    }
}

// ── text ────────────────────────────────────────────────────────────────────

impl Inspect for str {
    #[inline]
    fn value(&self) -> FieldValue<'_> {
        FieldValue::Text(self)
    }
}

impl Inspect for String {
    #[inline]
    fn value(&self) -> FieldValue<'_> {
        FieldValue::Text(self.as_str())
    }
}

impl Inspect for Cow<'_, str> {
    #[inline]
    fn value(&self) -> FieldValue<'_> {
        FieldValue::Text(self.as_ref())
    }
}

// ── indirections ────────────────────────────────────────────────────────────
//
// References and smart pointers are transparent: they take the shape of the
// value they point to.

impl<T: Inspect + ?Sized> Inspect for &T {
    #[inline]
    fn value(&self) -> FieldValue<'_> {
        (**self).value()
    }
}

impl<T: Inspect + ?Sized> Inspect for &mut T {
    #[inline]
    fn value(&self) -> FieldValue<'_> {
        (**self).value()
    }
}

impl<T: Inspect + ?Sized> Inspect for Box<T> {
    #[inline]
    fn value(&self) -> FieldValue<'_> {
        (**self).value()
    }
}

impl<T: Inspect + ?Sized> Inspect for Rc<T> {
    #[inline]
    fn value(&self) -> FieldValue<'_> {
        (**self).value()
    }
}

impl<T: Inspect + ?Sized> Inspect for Arc<T> {
    #[inline]
    fn value(&self) -> FieldValue<'_> {
        (**self).value()
    }
}

impl<T: Inspect> Inspect for Option<T> {
    #[inline]
    fn value(&self) -> FieldValue<'_> {
        self.as_ref().map_or(FieldValue::Null, Inspect::value)
    }
}

// ── collections ─────────────────────────────────────────────────────────────

impl<T> Inspect for [T] {
    #[inline]
    fn value(&self) -> FieldValue<'_> {
        FieldValue::Sequence(self.len())
    }
}

impl<T> Inspect for Vec<T> {
    #[inline]
    fn value(&self) -> FieldValue<'_> {
        FieldValue::Sequence(self.len())
    }
}

impl<T, const N: usize> Inspect for [T; N] {
    #[inline]
    fn value(&self) -> FieldValue<'_> {
        FieldValue::Sequence(N)
    }
}

impl<T> Inspect for VecDeque<T> {
    #[inline]
    fn value(&self) -> FieldValue<'_> {
        FieldValue::Sequence(self.len())
    }
}

impl<T, S> Inspect for HashSet<T, S> {
    #[inline]
    fn value(&self) -> FieldValue<'_> {
        FieldValue::Sequence(self.len())
    }
}

impl<T> Inspect for BTreeSet<T> {
    #[inline]
    fn value(&self) -> FieldValue<'_> {
        FieldValue::Sequence(self.len())
    }
}

impl<K, V, S> Inspect for HashMap<K, V, S> {
    #[inline]
    fn value(&self) -> FieldValue<'_> {
        FieldValue::Map(self.len())
    }
}

impl<K, V> Inspect for BTreeMap<K, V> {
    #[inline]
    fn value(&self) -> FieldValue<'_> {
        FieldValue::Map(self.len())
    }
}

// ── JSON ────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Inspect for serde_json::Value {
    fn value(&self) -> FieldValue<'_> {
        use serde_json::Value;

        match self {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    FieldValue::Int(i128::from(i))
                } else if let Some(u) = n.as_u64() {
                    FieldValue::UInt(u128::from(u))
                } else {
                    FieldValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => FieldValue::Text(s),
            Value::Array(items) => FieldValue::Sequence(items.len()),
            Value::Object(map) => FieldValue::Map(map.len()),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
