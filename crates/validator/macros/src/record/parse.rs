//! Parsing of fields and their `#[validate(...)]` attributes

use syn::ext::IdentExt;
use syn::{Attribute, Data, DeriveInput, Fields, LitStr, Member, Type};

use crate::support::diag;

/// Declared visibility of a field, mirrored from the runtime `Visibility`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum FieldVisibility {
    Public,
    Restricted,
    Private,
}

impl From<&syn::Visibility> for FieldVisibility {
    fn from(vis: &syn::Visibility) -> Self {
        match vis {
            syn::Visibility::Public(_) => Self::Public,
            syn::Visibility::Restricted(_) => Self::Restricted,
            syn::Visibility::Inherited => Self::Private,
        }
    }
}

/// One field of the deriving struct.
pub(super) struct RecordField<'a> {
    /// `self.<member>` accessor.
    pub member: Member,
    /// Name reported at runtime.
    pub name: String,
    pub visibility: FieldVisibility,
    pub ty: &'a Type,
    /// Raw rule specification, kept verbatim.
    pub rule: Option<LitStr>,
}

/// Collects the fields of a struct in declaration order.
pub(super) fn record_fields(input: &DeriveInput) -> syn::Result<Vec<RecordField<'_>>> {
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(_) => {
            return Err(diag::error_spanned(
                input,
                "Record can only be derived for structs.\n\
                 \n\
                 Enums have no fixed set of declared fields.",
            ));
        }
        Data::Union(_) => {
            return Err(diag::error_spanned(
                input,
                "Record cannot be derived for unions.",
            ));
        }
    };

    match fields {
        Fields::Named(named) => named
            .named
            .iter()
            .map(|field| {
                let ident = field.ident.as_ref().ok_or_else(|| {
                    diag::error_spanned(field, "named field without an identifier")
                })?;
                Ok(RecordField {
                    member: Member::Named(ident.clone()),
                    name: ident.unraw().to_string(),
                    visibility: FieldVisibility::from(&field.vis),
                    ty: &field.ty,
                    rule: rule_attr(&field.attrs)?,
                })
            })
            .collect(),
        Fields::Unnamed(unnamed) => unnamed
            .unnamed
            .iter()
            .enumerate()
            .map(|(index, field)| {
                Ok(RecordField {
                    member: Member::from(index),
                    name: index.to_string(),
                    visibility: FieldVisibility::from(&field.vis),
                    ty: &field.ty,
                    rule: rule_attr(&field.attrs)?,
                })
            })
            .collect(),
        Fields::Unit => Ok(Vec::new()),
    }
}

/// Extracts the rule specification of a field.
///
/// `#[validate("...")]` may appear at most once; its argument must be a
/// single string literal. The literal's content is not inspected here.
pub(super) fn rule_attr(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    let mut rule: Option<LitStr> = None;

    for attr in attrs {
        if !attr.path().is_ident("validate") {
            continue;
        }

        if rule.is_some() {
            return Err(diag::error_spanned(
                attr,
                "only one `#[validate(\"...\")]` attribute is allowed per field",
            ));
        }

        let lit = attr.parse_args::<LitStr>().map_err(|_| {
            diag::error_spanned(
                attr,
                "expected a rule specification string: #[validate(\"rule-name:args\")]",
            )
        })?;
        rule = Some(lit);
    }

    Ok(rule)
}
