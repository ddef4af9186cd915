use syn::{Attribute, LitStr, Meta, Token, parse::ParseStream};

use super::{CustomAttributes, ReflectDocs, parse_reflect_items};
use crate::REFLECT_ATTRIBUTE_NAME;

/// A custom type path, from `#[reflect(type_path = "a::b::C")]`.
pub(crate) struct CustomTypePath {
    pub type_path: String,
    pub type_name: String,
    pub module_path: Option<String>,
}

impl CustomTypePath {
    fn parse(lit: &LitStr) -> syn::Result<Self> {
        let type_path = lit.value();

        if type_path.starts_with("::") {
            return Err(syn::Error::new(
                lit.span(),
                "did not expect a leading double colon (`::`)",
            ));
        }
        if type_path.split("::").any(|segment| segment.trim().is_empty()) {
            return Err(syn::Error::new(lit.span(), "expected a non-empty type path"));
        }

        let (module_path, type_name) = match type_path.rsplit_once("::") {
            Some((module, name)) => (Some(module.to_owned()), name.to_owned()),
            None => (None, type_path.clone()),
        };

        Ok(Self {
            type_path,
            type_name,
            module_path,
        })
    }
}

/// Type level attributes of `#[derive(Reflect)]`.
///
/// - `#[reflect(@expr)]`: custom attribute.
/// - `#[reflect(type_path = "a::b::C")]`: custom type path.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    pub custom_attributes: CustomAttributes,
    pub docs: ReflectDocs,
    pub type_path: Option<CustomTypePath>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut res = Self::default();

        for attr in attrs {
            match &attr.meta {
                Meta::NameValue(pair) if pair.path.is_ident("doc") => {
                    res.docs.parse_doc(pair)?;
                }
                meta if meta.path().is_ident(REFLECT_ATTRIBUTE_NAME) => {
                    attr.parse_args_with(|input: ParseStream| res.parse_stream(input))?;
                }
                _ => {}
            }
        }

        Ok(res)
    }

    fn parse_stream(&mut self, input: ParseStream) -> syn::Result<()> {
        let type_path = &mut self.type_path;
        parse_reflect_items(input, &mut self.custom_attributes, |ident, input| {
            if ident != "type_path" {
                return Err(syn::Error::new(
                    ident.span(),
                    format!("unknown type attribute `{ident}`, expected `@expr` or `type_path`"),
                ));
            }
            if type_path.is_some() {
                return Err(syn::Error::new(ident.span(), "duplicate `type_path`"));
            }
            input.parse::<Token![=]>()?;
            *type_path = Some(CustomTypePath::parse(&input.parse::<LitStr>()?)?);
            Ok(())
        })
    }
}
