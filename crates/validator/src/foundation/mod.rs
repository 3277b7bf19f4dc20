//! Core validation types and traits
//!
//! - **Values**: [`FieldValue`], [`ValueKind`], [`Inspect`]
//! - **Records**: [`Record`], [`FieldDescriptor`], [`Visibility`]
//! - **Traits**: [`Validate`]
//! - **Errors**: [`Error`], [`ErrorKind`], [`ValidationError`], [`ValidationErrors`]

pub mod error;
pub mod record;
pub mod traits;
pub mod value;

pub use error::{Error, ErrorKind, ValidationError, ValidationErrors};
pub use record::{FieldDescriptor, Record, Visibility};
pub use traits::Validate;
pub use value::{FieldValue, Inspect, ValueKind};
