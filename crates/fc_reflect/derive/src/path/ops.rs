use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn reflect_ref_(fc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fc_reflect_path::ops::ReflectRef
    }
}

#[inline(always)]
pub(crate) fn struct_(fc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fc_reflect_path::ops::Struct
    }
}

#[inline(always)]
pub(crate) fn struct_field_iter_(fc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fc_reflect_path::ops::StructFieldIter
    }
}

#[inline(always)]
pub(crate) fn enum_(fc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fc_reflect_path::ops::Enum
    }
}
