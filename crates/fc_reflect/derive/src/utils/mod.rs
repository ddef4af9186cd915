use proc_macro2::TokenStream;

/// Returns an empty token stream.
#[inline(always)]
pub(crate) fn empty() -> TokenStream {
    TokenStream::new()
}
