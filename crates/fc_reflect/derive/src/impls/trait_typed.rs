use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generate implementation code for `Typed`
///
/// For param `type_info_tokens`, See the `to_info_tokens` of
/// [`ReflectStruct`] and [`ReflectEnum`].
///
/// [`ReflectStruct`]: crate::derive_data::ReflectStruct
/// [`ReflectEnum`]: crate::derive_data::ReflectEnum
pub(crate) fn impl_trait_typed(meta: &ReflectMeta, type_info_tokens: TokenStream) -> TokenStream {
    let fc_reflect_path = meta.fc_reflect_path();
    let trait_typed_ = crate::path::typed_(fc_reflect_path);
    let type_info_ = crate::path::type_info_(fc_reflect_path);
    let info_cell = crate::path::non_generic_type_info_cell_(fc_reflect_path);

    let real_ident = meta.real_ident();

    quote! {
        impl #trait_typed_ for #real_ident {
            fn type_info() -> &'static #type_info_ {
                static CELL: #info_cell = #info_cell::new();
                CELL.get_or_init(|| {
                    #type_info_tokens
                })
            }
        }
    }
}
