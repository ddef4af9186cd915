use proc_macro2::TokenStream;
use quote::quote;
use syn::{Field, Ident, Path};

use super::{FieldAttributes, ReflectMeta};

// -----------------------------------------------------------------------------
// Define

/// A named struct with reflected fields.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

/// Represents a named field on a struct.
pub(crate) struct StructField<'a> {
    /// The raw field.
    pub data: &'a Field,
    /// The reflection-based attributes on the field.
    pub attrs: FieldAttributes,
}

// -----------------------------------------------------------------------------
// StructField Implementation

impl StructField<'_> {
    /// Field identifier, always present for named structs.
    #[inline]
    pub fn ident(&self) -> &Ident {
        match &self.data.ident {
            Some(ident) => ident,
            None => unreachable!("named struct should not have unnamed fields"),
        }
    }

    /// Field name as a string literal.
    #[inline]
    pub fn name(&self) -> String {
        self.ident().to_string()
    }

    /// Generates a `TokenStream` for `NamedField` construction.
    pub fn to_info_tokens(&self, fc_reflect_path: &Path) -> TokenStream {
        let named_field_ = crate::path::named_field_(fc_reflect_path);

        let name = self.name();
        let ty = &self.data.ty;

        // See [`CustomAttributes::get_expression_with`]
        let with_custom_attributes = self
            .attrs
            .custom_attributes
            .get_expression_with(fc_reflect_path);
        // If feature is diabled, this function will return a empty TokenStream, so it's safe.
        let with_docs = self.attrs.docs.get_expression_with();

        quote! {
            #named_field_::new::<#ty>(#name)
                #with_custom_attributes
                #with_docs
        }
    }
}

// -----------------------------------------------------------------------------
// Struct Implementation

impl<'a> ReflectStruct<'a> {
    pub fn new(meta: ReflectMeta<'a>, fields: Vec<StructField<'a>>) -> syn::Result<Self> {
        let mut bases = fields.iter().filter_map(|field| field.attrs.base);
        if let (Some(_), Some(span)) = (bases.next(), bases.next()) {
            return Err(syn::Error::new(span, "a struct can have only one `base` field"));
        }

        Ok(Self { meta, fields })
    }

    /// Access the metadata associated with this struct definition.
    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// Get an iterator of fields which are exposed to the reflection API.
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields
            .iter()
            .filter(|field| field.attrs.ignore.is_none())
    }

    /// The field marked `#[reflect(base)]`, if any.
    pub fn base_field(&self) -> Option<&StructField<'a>> {
        self.active_fields().find(|field| field.attrs.base.is_some())
    }

    pub fn to_info_tokens(&self) -> TokenStream {
        let fc_reflect_path = self.meta.fc_reflect_path();

        let type_info_ = crate::path::type_info_(fc_reflect_path);
        let struct_info_ = crate::path::struct_info_(fc_reflect_path);

        let field_infos = self
            .active_fields()
            .map(|field| field.to_info_tokens(fc_reflect_path));

        let with_base = match self.base_field() {
            Some(field) => {
                let name = field.name();
                quote!(.with_base(#name))
            }
            None => crate::utils::empty(),
        };

        // See [`CustomAttributes::get_expression_with`]
        let with_custom_attributes = self.meta.with_custom_attributes_expression();
        // See [`ReflectDocs::get_expression_with`]
        let with_docs = self.meta.with_docs_expression();

        quote! {
            #type_info_::Struct(
                #struct_info_::new::<Self>(&[ #(#field_infos),* ])
                    #with_base
                    #with_custom_attributes
                    #with_docs
            )
        }
    }
}
