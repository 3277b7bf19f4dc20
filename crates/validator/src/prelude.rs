//! Prelude module for convenient imports.
//!
//! ```rust
//! use tagcheck::prelude::*;
//! ```

pub use crate::engine::{ValidateExt, validate};
pub use crate::foundation::{
    Error, ErrorKind, FieldDescriptor, FieldValue, Inspect, Record, ValidationError,
    ValidationErrors, ValueKind, Visibility,
};

#[cfg(feature = "derive")]
pub use tagcheck_macros::Record;
