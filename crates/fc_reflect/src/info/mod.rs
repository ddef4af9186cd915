//! Compile-time type information.
//!
//! ## Menu
//!
//! - [`TypePath`]: A trait for obtaining type names, without prefix `::`.
//! - [`DynamicTypePath`]: Dynamic dispatch for `TypePath`.
//! - [`Type`]: A `TypeId` together with a [`TypePathTable`].
//! - [`Attribute`]: A metadata record attached to a type, field or variant.
//! - [`CustomAttributes`]: An ordered list of boxed attributes.
//! - [`TypeInfo`]: An enum of the type information of each kind:
//!     - [`StructInfo`]: named fields and an optional base declaration.
//!     - [`EnumInfo`]: the variants of a fieldless enum.
//!     - [`NullableInfo`]: a value that may be null, such as `Option<T>`.
//!     - [`OpaqueInfo`]: a type whose internals are not reflected.
//! - [`NamedField`], [`VariantInfo`]: member information.
//! - [`MemberInfo`]: a located member and the type declaring it.
//! - [`Typed`]: A trait for obtaining `TypeInfo`.
//! - [`DynamicTyped`]: Dynamic dispatch for `Typed`.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod docs_macro;
mod enum_info;
mod field_info;
mod member_info;
mod nullable_info;
mod opaque_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;
mod variant_info;

// -----------------------------------------------------------------------------
// Internal API

use attributes::impl_with_custom_attributes;
use docs_macro::impl_docs_fn;

pub(crate) use attributes::impl_custom_attributes_fn;
pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use attributes::{Attribute, CustomAttributes, is_assignable, is_exact};
pub use enum_info::EnumInfo;
pub use field_info::NamedField;
pub use member_info::{Member, MemberInfo};
pub use nullable_info::NullableInfo;
pub use opaque_info::OpaqueInfo;
pub use struct_info::StructInfo;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath, TypePathTable};
pub use typed::{DynamicTyped, Typed};
pub use variant_info::VariantInfo;

