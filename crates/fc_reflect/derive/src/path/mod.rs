//! This independent module is used to provide the required paths,
//! so as to minimize changes when the `fc_reflect` structure is modified.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the access path to the `fc_reflect` crate.
///
/// Always `::fc_reflect`. Inside `fc_reflect` itself the name resolves
/// through `extern crate self as fc_reflect`.
pub(crate) fn fc_reflect() -> syn::Path {
    syn::parse_quote!(::fc_reflect)
}

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod info;
mod ops;

pub(crate) mod fp;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use cell::*;
pub(crate) use info::*;
pub(crate) use ops::*;

#[inline(always)]
pub(crate) fn reflect_(fc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fc_reflect_path::Reflect
    }
}
