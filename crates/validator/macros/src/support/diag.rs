/// Create a `syn::Error` spanning `tokens` with the given message.
///
/// Keep this in one place to have consistent diagnostics across the derive.
pub(crate) fn error_spanned<T: quote::ToTokens>(tokens: &T, msg: impl Into<String>) -> syn::Error {
    syn::Error::new_spanned(tokens, msg.into())
}
