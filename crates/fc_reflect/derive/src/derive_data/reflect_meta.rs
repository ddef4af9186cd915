use proc_macro2::TokenStream;
use quote::quote;
use syn::{Ident, Path};

use super::attributes::{CustomTypePath, TypeAttributes};
use crate::path::fp::OptionFP;

/// Data shared by every kind of reflected type.
pub(crate) struct ReflectMeta<'a> {
    fc_reflect_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
}

impl<'a> ReflectMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, ident: &'a Ident) -> Self {
        Self {
            fc_reflect_path: crate::path::fc_reflect(),
            attrs,
            ident,
        }
    }

    #[inline]
    pub fn fc_reflect_path(&self) -> &Path {
        &self.fc_reflect_path
    }

    #[inline]
    pub fn real_ident(&self) -> &'a Ident {
        self.ident
    }

    /// Generate docs codes
    ///
    /// Similar to following:
    ///
    /// ```ignore
    /// .with_docs(::core::option::Option::Some("......"))
    /// ```
    #[inline]
    pub fn with_docs_expression(&self) -> TokenStream {
        self.attrs.docs.get_expression_with()
    }

    /// Generate custom attibutes codes
    ///
    /// Similar to following:
    ///
    /// ```ignore
    /// .with_custom_attributes(
    ///     _path_::CustomAttributes::with_capacity(N)
    ///         (.with_attribute( ... ))*
    /// )
    /// ```
    #[inline]
    pub fn with_custom_attributes_expression(&self) -> TokenStream {
        self.attrs
            .custom_attributes
            .get_expression_with(&self.fc_reflect_path)
    }

    /// Expression of `TypePath::type_path`.
    pub fn type_path(&self) -> TokenStream {
        match &self.attrs.type_path {
            Some(custom) => {
                let type_path = &custom.type_path;
                quote!(#type_path)
            }
            None => {
                let name = self.ident.to_string();
                quote! {
                    ::core::concat!(::core::module_path!(), "::", #name)
                }
            }
        }
    }

    /// Expression of `TypePath::type_name`, also used as `type_ident`.
    ///
    /// Reflected types are never generic, so both are equal.
    pub fn type_name(&self) -> TokenStream {
        match &self.attrs.type_path {
            Some(custom) => {
                let type_name = &custom.type_name;
                quote!(#type_name)
            }
            None => {
                let name = self.ident.to_string();
                quote!(#name)
            }
        }
    }

    /// Expression of `TypePath::module_path`.
    pub fn module_path(&self) -> TokenStream {
        match &self.attrs.type_path {
            Some(CustomTypePath {
                module_path: Some(module_path),
                ..
            }) => quote!(#OptionFP::Some(#module_path)),
            Some(_) => quote!(#OptionFP::None),
            None => quote!(#OptionFP::Some(::core::module_path!())),
        }
    }
}
