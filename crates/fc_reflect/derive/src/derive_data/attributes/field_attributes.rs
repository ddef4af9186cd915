use proc_macro2::Span;
use syn::{Attribute, Meta, parse::ParseStream};

use super::{CustomAttributes, ReflectDocs, parse_reflect_items};
use crate::REFLECT_ATTRIBUTE_NAME;

/// Field and variant level attributes of `#[derive(Reflect)]`.
///
/// - `#[reflect(@expr)]`: custom attribute.
/// - `#[reflect(base)]`: the field holds the base declaration (fields only).
/// - `#[reflect(ignore)]`: the field is not reflected (fields only).
#[derive(Default)]
pub(crate) struct FieldAttributes {
    pub custom_attributes: CustomAttributes,
    pub docs: ReflectDocs,
    pub base: Option<Span>,
    pub ignore: Option<Span>,
}

impl FieldAttributes {
    /// Parse the attributes of a named field.
    pub fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let res = Self::parse_attrs(attrs, true)?;
        if let (Some(_), Some(span)) = (res.base, res.ignore) {
            return Err(syn::Error::new(span, "a `base` field cannot be ignored"));
        }
        Ok(res)
    }

    /// Parse the attributes of an enum variant.
    pub fn parse_variant_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        Self::parse_attrs(attrs, false)
    }

    fn parse_attrs(attrs: &[Attribute], is_field: bool) -> syn::Result<Self> {
        let mut res = Self::default();

        for attr in attrs {
            match &attr.meta {
                Meta::NameValue(pair) if pair.path.is_ident("doc") => {
                    res.docs.parse_doc(pair)?;
                }
                meta if meta.path().is_ident(REFLECT_ATTRIBUTE_NAME) => {
                    attr.parse_args_with(|input: ParseStream| res.parse_stream(input, is_field))?;
                }
                _ => {}
            }
        }

        Ok(res)
    }

    fn parse_stream(&mut self, input: ParseStream, is_field: bool) -> syn::Result<()> {
        let Self {
            custom_attributes,
            base,
            ignore,
            ..
        } = self;

        parse_reflect_items(input, custom_attributes, |ident, _| {
            let slot = match ident.to_string().as_str() {
                "base" if is_field => &mut *base,
                "ignore" if is_field => &mut *ignore,
                _ if is_field => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown field attribute `{ident}`, expected `@expr`, `base` or `ignore`"),
                    ));
                }
                _ => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown variant attribute `{ident}`, expected `@expr`"),
                    ));
                }
            };
            if slot.is_some() {
                return Err(syn::Error::new(ident.span(), format!("duplicate `{ident}`")));
            }
            *slot = Some(ident.span());
            Ok(())
        })
    }
}
