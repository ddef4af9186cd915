use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

use super::{impl_trait_reflect, impl_trait_type_path, impl_trait_typed};

use crate::derive_data::ReflectMeta;
use crate::path::fp::FmtFP;

/// Implement full reflect for unit struct, which is treated as `Opaque`.
pub(crate) fn impl_unit(meta: &ReflectMeta) -> TokenStream {
    let fc_reflect_path = meta.fc_reflect_path();
    let type_info_ = crate::path::type_info_(fc_reflect_path);
    let opaque_info_ = crate::path::opaque_info_(fc_reflect_path);
    let type_path_ = crate::path::type_path_(fc_reflect_path);

    // trait: TypePath
    let type_path_trait_tokens = impl_trait_type_path(meta);

    // trait: Typed
    let with_custom_attributes = meta.with_custom_attributes_expression();
    let with_docs = meta.with_docs_expression();
    let typed_trait_tokens = impl_trait_typed(
        meta,
        quote! {
            #type_info_::Opaque(
                #opaque_info_::new::<Self>()
                    #with_custom_attributes
                    #with_docs
            )
        },
    );

    // trait: Reflect
    // A unit struct has a single value, its name is a complete description.
    let reflect_debug_tokens = quote! {
        #[inline]
        fn reflect_debug(&self, f: &mut #FmtFP::Formatter<'_>) -> #FmtFP::Result {
            f.write_str(<Self as #type_path_>::type_name())
        }
    };
    let reflect_trait_tokens = impl_trait_reflect(
        meta,
        Ident::new("Opaque", Span::call_site()),
        reflect_debug_tokens,
    );

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #reflect_trait_tokens
    }
}
