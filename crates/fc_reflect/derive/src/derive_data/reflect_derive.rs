use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields};

use super::{EnumVariant, FieldAttributes, ReflectEnum, ReflectMeta, ReflectStruct};
use super::{StructField, TypeAttributes};

/// The parsed input of `#[derive(Reflect)]`, classified by kind.
pub(crate) enum ReflectDerive<'a> {
    /// `struct T { ... }`
    Struct(ReflectStruct<'a>),
    /// `struct T;`, reflected as an opaque type.
    UnitStruct(ReflectMeta<'a>),
    /// `enum T { A, B, ... }`
    Enum(ReflectEnum<'a>),
}

impl<'a> ReflectDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        if !input.generics.params.is_empty() {
            return Err(syn::Error::new(
                input.generics.span(),
                "`#[derive(Reflect)]` does not support generic types",
            ));
        }

        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let meta = ReflectMeta::new(attrs, &input.ident);

        match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(fields) => {
                    let fields = fields
                        .named
                        .iter()
                        .map(|field| {
                            Ok(StructField {
                                data: field,
                                attrs: FieldAttributes::parse_field_attrs(&field.attrs)?,
                            })
                        })
                        .collect::<syn::Result<Vec<_>>>()?;
                    Ok(Self::Struct(ReflectStruct::new(meta, fields)?))
                }
                Fields::Unit => Ok(Self::UnitStruct(meta)),
                Fields::Unnamed(fields) => Err(syn::Error::new(
                    fields.span(),
                    "`#[derive(Reflect)]` does not support tuple structs",
                )),
            },
            Data::Enum(data) => {
                let variants = data
                    .variants
                    .iter()
                    .map(|variant| {
                        if !matches!(variant.fields, Fields::Unit) {
                            return Err(syn::Error::new(
                                variant.fields.span(),
                                "`#[derive(Reflect)]` only supports enums with unit variants",
                            ));
                        }
                        Ok(EnumVariant {
                            data: variant,
                            attrs: FieldAttributes::parse_variant_attrs(&variant.attrs)?,
                        })
                    })
                    .collect::<syn::Result<Vec<_>>>()?;
                Ok(Self::Enum(ReflectEnum::new(meta, variants)))
            }
            Data::Union(data) => Err(syn::Error::new(
                data.union_token.span,
                "`#[derive(Reflect)]` does not support unions",
            )),
        }
    }
}
