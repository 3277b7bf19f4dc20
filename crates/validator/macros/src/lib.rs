//! Procedural macros for tagcheck
//!
//! - **`#[derive(Record)]`** - field descriptor table for rule validation
//!
//! Use through the `tagcheck` crate, which re-exports the derive.

use proc_macro::TokenStream;

mod record;
mod support;

/// Derives `tagcheck::foundation::Record` and `tagcheck::foundation::Inspect`.
///
/// Each field becomes one entry of the record's descriptor table, in
/// declaration order. A field carries a rule when it has a
/// `#[validate("<rule-spec>")]` attribute; the string is kept verbatim and
/// interpreted when the record is validated.
///
/// Field visibility is taken from the declaration: only `pub` fields may
/// carry a rule. A rule on any other field is reported at validation time.
///
/// The type of every field carrying a rule must implement
/// `tagcheck::foundation::Inspect`; fields without a rule are never read and
/// may have any type. For generic structs the bound is added to the generated
/// impls, for rule-carrying fields only.
///
/// # Examples
///
/// ```rust,ignore
/// use tagcheck::Record;
///
/// #[derive(Record)]
/// struct Comment {
///     #[validate("non-empty:280")]
///     pub body: String,
///     pub author_id: u64,
/// }
///
/// #[derive(Record)]
/// struct Tag(#[validate("non-empty:32")] pub String);
/// ```
///
/// # Compile errors
///
/// - applied to an enum or a union
/// - more than one `validate` attribute on a field
/// - a `validate` attribute whose argument is not a single string literal
#[proc_macro_derive(Record, attributes(validate))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record_impl(input)
}
