use proc_macro2::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Index, Member};

use crate::derive_data::{AttributeFieldAttributes, AttributeTypeAttributes};
use crate::path::fp::{OptionFP, TypeIdFP};

/// Implement `Attribute`.
///
/// The attribute's own type is always a matching category. A field marked
/// `#[attribute(base)]` forwards the remaining lookups to the embedded base.
pub(crate) fn impl_attribute(input: &DeriveInput) -> syn::Result<TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new(
            input.generics.span(),
            "`#[derive(Attribute)]` does not support generic types",
        ));
    }

    let type_attrs = AttributeTypeAttributes::parse_attrs(&input.attrs)?;

    let mut base: Option<(Member, &syn::Type)> = None;
    if let Data::Struct(data) = &input.data {
        for (index, field) in data.fields.iter().enumerate() {
            let Some(span) = AttributeFieldAttributes::parse_attrs(&field.attrs)?.base else {
                continue;
            };
            if base.is_some() {
                return Err(syn::Error::new(
                    span,
                    "an attribute can have only one `base` field",
                ));
            }
            let member = match &field.ident {
                Some(ident) => Member::Named(ident.clone()),
                None => Member::Unnamed(Index::from(index)),
            };
            base = Some((member, &field.ty));
        }
    }

    let fc_reflect_path = crate::path::fc_reflect();
    let attribute_ = crate::path::attribute_(&fc_reflect_path);
    let reflect_ = crate::path::reflect_(&fc_reflect_path);

    let base_tokens = match base {
        Some((member, ty)) => quote! {
            <#ty as #attribute_>::as_category(&self.#member, category)
        },
        None => quote! {
            #OptionFP::None
        },
    };

    let inheritable_tokens = if type_attrs.inherited {
        crate::utils::empty()
    } else {
        quote! {
            #[inline]
            fn inheritable(&self) -> bool {
                false
            }
        }
    };

    let real_ident = &input.ident;

    Ok(quote! {
        impl #attribute_ for #real_ident {
            fn as_category(&self, category: #TypeIdFP) -> #OptionFP<&dyn #reflect_> {
                if category == #TypeIdFP::of::<Self>() {
                    return #OptionFP::Some(self as &dyn #reflect_);
                }
                #base_tokens
            }

            #inheritable_tokens
        }
    })
}
