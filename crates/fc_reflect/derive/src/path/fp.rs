//! Fully qualified paths of `core` items used in generated code.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

/// `::core::option::Option`
pub(crate) struct OptionFP;

impl ToTokens for OptionFP {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        quote!(::core::option::Option).to_tokens(tokens);
    }
}

/// `::core::any::TypeId`
pub(crate) struct TypeIdFP;

impl ToTokens for TypeIdFP {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        quote!(::core::any::TypeId).to_tokens(tokens);
    }
}

/// `::core::fmt`
pub(crate) struct FmtFP;

impl ToTokens for FmtFP {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        quote!(::core::fmt).to_tokens(tokens);
    }
}
