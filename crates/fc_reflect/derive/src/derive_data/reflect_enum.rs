use proc_macro2::TokenStream;
use quote::quote;
use syn::{Path, Variant};

use super::{FieldAttributes, ReflectMeta};

// -----------------------------------------------------------------------------
// Define

pub(crate) struct ReflectEnum<'a> {
    meta: ReflectMeta<'a>,
    variants: Vec<EnumVariant<'a>>,
}

/// Represents a unit variant on an enum.
pub(crate) struct EnumVariant<'a> {
    /// The raw variant.
    pub data: &'a Variant,
    /// The reflection-based attributes on the variant.
    pub attrs: FieldAttributes,
}

// -----------------------------------------------------------------------------
// EnumVariant Implementation

impl EnumVariant<'_> {
    /// Generates a `TokenStream` for `VariantInfo` construction.
    pub fn to_info_tokens(&self, fc_reflect_path: &Path) -> TokenStream {
        let variant_info_ = crate::path::variant_info_(fc_reflect_path);

        let variant_name = self.data.ident.to_string();

        let with_custom_attributes = self
            .attrs
            .custom_attributes
            .get_expression_with(fc_reflect_path);
        let with_docs = self.attrs.docs.get_expression_with();

        quote! {
            #variant_info_::new(#variant_name)
                #with_custom_attributes
                #with_docs
        }
    }
}

// -----------------------------------------------------------------------------
// Enum Implementation

impl<'a> ReflectEnum<'a> {
    #[inline]
    pub fn new(meta: ReflectMeta<'a>, variants: Vec<EnumVariant<'a>>) -> Self {
        Self { meta, variants }
    }

    /// Access the metadata associated with this enum definition.
    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// The complete set of variants in this enum.
    #[inline]
    pub fn variants(&self) -> &[EnumVariant<'a>] {
        &self.variants
    }

    pub fn to_info_tokens(&self) -> TokenStream {
        let fc_reflect_path = self.meta.fc_reflect_path();

        let type_info_ = crate::path::type_info_(fc_reflect_path);
        let enum_info_ = crate::path::enum_info_(fc_reflect_path);

        let variant_infos = self
            .variants
            .iter()
            .map(|variant| variant.to_info_tokens(fc_reflect_path));

        let with_custom_attributes = self.meta.with_custom_attributes_expression();
        let with_docs = self.meta.with_docs_expression();

        quote! {
            #type_info_::Enum(
                #enum_info_::new::<Self>(&[ #(#variant_infos),* ])
                    #with_custom_attributes
                    #with_docs
            )
        }
    }
}
