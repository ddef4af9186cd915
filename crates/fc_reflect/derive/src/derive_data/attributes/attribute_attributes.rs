use proc_macro2::Span;
use syn::{Attribute, Ident, LitBool, Token, parse::ParseStream};

use crate::ATTRIBUTE_ATTRIBUTE_NAME;

/// Type level attributes of `#[derive(Attribute)]`.
///
/// - `#[attribute(inherited = false)]`: not collected from base declarations.
pub(crate) struct AttributeTypeAttributes {
    pub inherited: bool,
}

impl AttributeTypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut inherited: Option<bool> = None;

        for attr in attrs {
            if !attr.path().is_ident(ATTRIBUTE_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if !meta.path.is_ident("inherited") {
                    return Err(meta.error("unknown type attribute, expected `inherited = bool`"));
                }
                if inherited.is_some() {
                    return Err(meta.error("duplicate `inherited`"));
                }
                let value: LitBool = meta.value()?.parse()?;
                inherited = Some(value.value());
                Ok(())
            })?;
        }

        Ok(Self {
            inherited: inherited.unwrap_or(true),
        })
    }
}

/// Field level attributes of `#[derive(Attribute)]`.
///
/// - `#[attribute(base)]`: the field embeds the base category.
#[derive(Default)]
pub(crate) struct AttributeFieldAttributes {
    pub base: Option<Span>,
}

impl AttributeFieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut res = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(ATTRIBUTE_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_args_with(|input: ParseStream| {
                let ident = input.parse::<Ident>()?;
                if ident != "base" {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown field attribute `{ident}`, expected `base`"),
                    ));
                }
                if res.base.is_some() {
                    return Err(syn::Error::new(ident.span(), "duplicate `base`"));
                }
                res.base = Some(ident.span());
                input.parse::<Option<Token![,]>>()?;
                Ok(())
            })?;
        }

        Ok(res)
    }
}
