//! Code generation for the Record derive

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_quote};

use super::parse::{FieldVisibility, RecordField, record_fields};

/// Generate the `Record` and `Inspect` implementations for a struct.
///
/// The generated `fields()` builds one `FieldDescriptor` per declared field,
/// in declaration order, including fields without a rule. Only fields with a
/// rule are inspected, so only their types need `Inspect`.
pub(super) fn generate_record(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let name_str = name.to_string();
    let fields = record_fields(input)?;

    let mut generics = input.generics.clone();
    if !generics.params.is_empty() {
        let where_clause = generics.make_where_clause();
        for field in fields.iter().filter(|field| field.rule.is_some()) {
            let ty = field.ty;
            where_clause
                .predicates
                .push(parse_quote!(#ty: ::tagcheck::foundation::Inspect));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let descriptors = fields.iter().map(descriptor);

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::tagcheck::foundation::Record for #name #ty_generics #where_clause {
            fn record_name(&self) -> &'static str {
                #name_str
            }

            fn fields(&self) -> ::std::vec::Vec<::tagcheck::foundation::FieldDescriptor<'_>> {
                ::std::vec![#(#descriptors),*]
            }
        }

        #[automatically_derived]
        impl #impl_generics ::tagcheck::foundation::Inspect for #name #ty_generics #where_clause {
            fn value(&self) -> ::tagcheck::foundation::FieldValue<'_> {
                ::tagcheck::foundation::FieldValue::Record(self)
            }
        }
    })
}

/// Generate the descriptor expression for one field.
fn descriptor(field: &RecordField<'_>) -> TokenStream {
    let member = &field.member;
    let name = &field.name;
    let visibility = match field.visibility {
        FieldVisibility::Public => quote!(::tagcheck::foundation::Visibility::Public),
        FieldVisibility::Restricted => quote!(::tagcheck::foundation::Visibility::Restricted),
        FieldVisibility::Private => quote!(::tagcheck::foundation::Visibility::Private),
    };

    match &field.rule {
        Some(rule) => quote! {
            ::tagcheck::foundation::FieldDescriptor::new(#name, #visibility, &self.#member)
                .with_rule(#rule)
        },
        None => quote! {
            ::tagcheck::foundation::FieldDescriptor::untagged(
                #name,
                #visibility,
                ::core::any::type_name_of_val(&self.#member),
            )
        },
    }
}
