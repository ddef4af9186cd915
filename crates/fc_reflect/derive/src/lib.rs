//! See following macros:
//!
//! - [`Reflect`]
//! - [`Attribute`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";
static ATTRIBUTE_ATTRIBUTE_NAME: &str = "attribute";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` automatically implements the following traits:
///
/// - `TypePath`
/// - `Typed`
/// - `Reflect`
/// - `Struct` (for `struct T { ... }`)
/// - `Enum` (for `enum T { A, B }`)
///
/// Note: Unit structs (`struct T;`) are treated as `Opaque` rather than as `Struct`.
///
/// Generic types, tuple structs, unions and enums with data-carrying
/// variants are rejected.
///
/// ## Custom Type Path
///
/// The default path is `module_path!()` followed by the type name.
/// An attribute is provided to override it:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(type_path = "you::me::Foo")]
/// struct Foo { /* ... */ }
/// ```
///
/// The last segment becomes the type name, the rest is the module path.
///
/// This attribute can only be applied at the type level.
///
/// ## Custom Attributes
///
/// Attributes are written as `@expr`, where `expr` evaluates to a value
/// implementing `Attribute`. They are accepted on the type, its fields and
/// its variants, in declaration order:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(@Table::new("users"))]
/// struct User {
///     #[reflect(@"required", @MaxLength(64))]
///     name: String,
/// }
///
/// #[derive(Reflect)]
/// enum Role {
///     #[reflect(@"default")]
///     Member,
///     Admin,
/// }
/// ```
///
/// ## Base Declarations
///
/// A field marked `base` holds the base declaration of the struct. Its
/// members are visible through the derived struct during property path
/// resolution and member lookup, and its attributes take part in inherited
/// attribute queries.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Entity {
///     id: u64,
/// }
///
/// #[derive(Reflect)]
/// struct Player {
///     #[reflect(base)]
///     entity: Entity,
///     name: String,
/// }
/// ```
///
/// At most one field may be the base.
///
/// ## Ignored Fields
///
/// `#[reflect(ignore)]` hides a field from reflection. Its type does not
/// need to implement `Reflect`.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Cache {
///     name: String,
///     #[reflect(ignore)]
///     handle: std::fs::File,
/// }
/// ```
///
/// ## Docs Reflection
///
/// With the `reflect_docs` feature, `///` comments on the type, its fields
/// and its variants are captured and returned by the `docs` method of the
/// corresponding info.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    let reflect_derive = match derive_data::ReflectDerive::from_input(&ast) {
        Ok(data) => data,
        Err(err) => return err.into_compile_error().into(),
    };

    match reflect_derive {
        derive_data::ReflectDerive::Struct(info) => impls::impl_struct(&info),
        derive_data::ReflectDerive::UnitStruct(meta) => impls::impl_unit(&meta),
        derive_data::ReflectDerive::Enum(info) => impls::impl_enum(&info),
    }
    .into()
}

/// # Attribute Derivation
///
/// `#[derive(Attribute)]` implements `Attribute`, so that values of the type
/// can be attached with `#[reflect(@expr)]`. The type must also implement
/// `Reflect`, usually through `#[derive(Reflect)]`.
///
/// ## Categories
///
/// The type itself is the attribute's category. A field marked `base`
/// embeds a base category, and queries for the base category (or any of
/// its own bases) see the embedded value:
///
/// ```rust, ignore
/// #[derive(Reflect, Attribute)]
/// struct Validation {
///     message: &'static str,
/// }
///
/// #[derive(Reflect, Attribute)]
/// struct Range {
///     #[attribute(base)]
///     validation: Validation,
///     min: i64,
///     max: i64,
/// }
/// ```
///
/// ## Inheritance
///
/// By default an attribute declared on a base declaration is also visible
/// through inherited queries on the derived one. This can be disabled:
///
/// ```rust, ignore
/// #[derive(Reflect, Attribute)]
/// #[attribute(inherited = false)]
/// struct Sealed;
/// ```
#[proc_macro_derive(Attribute, attributes(attribute))]
pub fn derive_attribute(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::impl_attribute(&ast)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
