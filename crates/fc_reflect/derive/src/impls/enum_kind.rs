use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

use super::{impl_trait_reflect, impl_trait_type_path, impl_trait_typed};

use crate::derive_data::ReflectEnum;

/// Implement full reflect for fieldless enum type.
pub(crate) fn impl_enum(info: &ReflectEnum) -> TokenStream {
    let meta = info.meta();

    // trait: TypePath
    let type_path_trait_tokens = impl_trait_type_path(meta);

    // trait: Typed
    let typed_trait_tokens = impl_trait_typed(meta, info.to_info_tokens());

    // trait: Enum
    let enum_trait_tokens = impl_trait_enum(info);

    // trait: Reflect
    let reflect_trait_tokens = impl_trait_reflect(
        meta,
        Ident::new("Enum", Span::call_site()),
        crate::utils::empty(),
    );

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #enum_trait_tokens

        #reflect_trait_tokens
    }
}

/// Generate `Enum` trait implementation tokens.
fn impl_trait_enum(info: &ReflectEnum) -> TokenStream {
    let meta = info.meta();

    let fc_reflect_path = meta.fc_reflect_path();
    let enum_ = crate::path::enum_(fc_reflect_path);

    let variant_idents = info
        .variants()
        .iter()
        .map(|variant| &variant.data.ident)
        .collect::<Vec<_>>();
    let variant_names = variant_idents
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>();
    let variant_indices = (0..variant_idents.len()).collect::<Vec<usize>>();

    let real_ident = meta.real_ident();

    quote! {
        impl #enum_ for #real_ident {
            fn variant_name(&self) -> &str {
                match *self {
                    #(Self::#variant_idents => #variant_names,)*
                }
            }

            fn variant_index(&self) -> usize {
                match *self {
                    #(Self::#variant_idents => #variant_indices,)*
                }
            }
        }
    }
}
