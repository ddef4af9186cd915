//! Provide some tools for parsing attributes.
//!
//! This includes all the attributes required to generate code,
//! not just reflect custom attributes.

// -----------------------------------------------------------------------------
// Modules

mod attribute_attributes;
mod custom_attributes;
mod field_attributes;
mod reflect_docs;
mod type_attributes;

// -----------------------------------------------------------------------------
// Internal API

use custom_attributes::CustomAttributes;
use reflect_docs::ReflectDocs;

pub(crate) use attribute_attributes::{AttributeFieldAttributes, AttributeTypeAttributes};
pub(crate) use field_attributes::FieldAttributes;
pub(crate) use type_attributes::{CustomTypePath, TypeAttributes};

// -----------------------------------------------------------------------------
// Shared parser

use syn::{Ident, Token, parse::ParseStream};

/// Parse a comma separated list of `#[reflect(...)]` items.
///
/// `@expr` items go to `custom_attributes`, identifiers are handed
/// to `on_ident` with the remaining stream.
fn parse_reflect_items(
    input: ParseStream,
    custom_attributes: &mut CustomAttributes,
    mut on_ident: impl FnMut(Ident, ParseStream) -> syn::Result<()>,
) -> syn::Result<()> {
    while !input.is_empty() {
        if input.peek(Token![@]) {
            custom_attributes.parse_inner_stream(input)?;
        } else {
            let ident = input.parse::<Ident>()?;
            on_ident(ident, input)?;
        }

        if input.is_empty() {
            break;
        }
        input.parse::<Token![,]>()?;
    }
    Ok(())
}
