use proc_macro2::TokenStream;
use quote::quote;

#[inline]
pub(crate) fn type_path_(fc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fc_reflect_path::info::TypePath
    }
}

#[inline(always)]
pub(crate) fn typed_(fc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fc_reflect_path::info::Typed
    }
}

#[inline(always)]
pub(crate) fn type_info_(fc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fc_reflect_path::info::TypeInfo
    }
}

#[inline(always)]
pub(crate) fn reflect_kind_(fc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fc_reflect_path::info::ReflectKind
    }
}

#[inline(always)]
pub(crate) fn custom_attributes_(fc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fc_reflect_path::info::CustomAttributes
    }
}

#[inline(always)]
pub(crate) fn attribute_(fc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fc_reflect_path::info::Attribute
    }
}

#[inline(always)]
pub(crate) fn struct_info_(fc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fc_reflect_path::info::StructInfo
    }
}

#[inline(always)]
pub(crate) fn named_field_(fc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fc_reflect_path::info::NamedField
    }
}

#[inline(always)]
pub(crate) fn enum_info_(fc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fc_reflect_path::info::EnumInfo
    }
}

#[inline(always)]
pub(crate) fn variant_info_(fc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fc_reflect_path::info::VariantInfo
    }
}

#[inline(always)]
pub(crate) fn opaque_info_(fc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fc_reflect_path::info::OpaqueInfo
    }
}
