use proc_macro2::TokenStream;
use quote::quote;
use syn::{Expr, Lit, MetaNameValue, spanned::Spanned};

use crate::path::fp::OptionFP;

/// The documentation of a type, field or variant.
///
/// Collected from `#[doc = "..."]`, including the standard `/// ...` format.
/// Nothing is emitted unless the `reflect_docs` feature is enabled.
pub(crate) struct ReflectDocs {
    enabled: bool,
    docs: Vec<String>,
}

impl Default for ReflectDocs {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ReflectDocs {
    #[inline]
    pub const fn new() -> Self {
        Self {
            enabled: cfg!(feature = "reflect_docs"),
            docs: Vec::new(),
        }
    }

    /// Parse one `#[doc = "..."]` line.
    ///
    /// This function do **not** check if the key is `doc`,
    /// it is guaranteed by the caller.
    pub fn parse_doc(&mut self, pair: &MetaNameValue) -> syn::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        if let Expr::Lit(syn::ExprLit {
            lit: Lit::Str(lit_str),
            ..
        }) = &pair.value
        {
            self.docs.push(lit_str.value());
            Ok(())
        } else {
            Err(syn::Error::new(
                pair.value.span(),
                "`#[doc = ...]` expected a string literal value",
            ))
        }
    }

    fn doc_string(&self) -> Option<String> {
        if !self.enabled || self.docs.iter().all(String::is_empty) {
            return None;
        }

        let capacity = self.docs.iter().map(String::len).sum::<usize>() + self.docs.len();
        let mut res = String::with_capacity(capacity);
        for s in &self.docs {
            res.push_str(s);
            res.push('\n');
        }
        res.pop(); // delete the last `\n`

        Some(res)
    }

    /// If `reflect_docs` feature is disabled or no docs are present,
    /// this function will return an empty token stream.
    ///
    /// Otherwise, it will return content similar to this:
    ///
    /// ```ignore
    /// .with_docs(::core::option::Option::Some("......"))
    /// ```
    pub fn get_expression_with(&self) -> TokenStream {
        match self.doc_string() {
            Some(doc) => quote! {
                .with_docs(#OptionFP::Some(#doc))
            },
            None => crate::utils::empty(),
        }
    }
}
