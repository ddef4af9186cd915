use proc_macro2::{Ident, TokenStream};
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generate implementation code for `Reflect`
///
/// `kind` is the variant name shared by `ReflectKind` and `ReflectRef`.
/// `reflect_debug_tokens` overrides the default debug formatter when not empty.
pub(crate) fn impl_trait_reflect(
    meta: &ReflectMeta,
    kind: Ident,
    reflect_debug_tokens: TokenStream,
) -> TokenStream {
    let fc_reflect_path = meta.fc_reflect_path();
    let reflect_ = crate::path::reflect_(fc_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(fc_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(fc_reflect_path);

    let real_ident = meta.real_ident();

    quote! {
        impl #reflect_ for #real_ident {
            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::#kind
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::#kind(self)
            }

            #reflect_debug_tokens
        }
    }
}
