//! Locate members of reflected values and read the attributes declared on
//! them.
//!
//! The entry point is [`AttributeQuery`]. The free functions below and the
//! [`ReflectAttributes`] extension trait are shortcuts for it.
//!
//! Absence is never an error here: a null target, an unknown member or a
//! member without attributes all give an empty result. The only exception is
//! the opt-in [`AttributeQuery::required`].
//!
//! # Examples
//!
//! ```
//! use fc_reflect::{derive::{Attribute, Reflect}, meta};
//!
//! #[derive(Reflect, Attribute)]
//! struct Column {
//!     name: &'static str,
//! }
//!
//! #[derive(Reflect)]
//! struct Row {
//!     #[reflect(@Column { name: "row_id" })]
//!     id: u64,
//! }
//!
//! let row = Row { id: 1 };
//! let column = meta::get_attribute::<Column>(&row, "id", false).unwrap();
//! assert_eq!(column.name, "row_id");
//!
//! assert!(meta::get_attributes(&row, "missing", false).is_empty());
//! assert!(meta::get_attributes(&None::<Row>, "id", false).is_empty());
//! ```

// -----------------------------------------------------------------------------
// Modules

mod display_name;
mod error;
mod ext;
mod query;

// -----------------------------------------------------------------------------
// Exports

pub use display_name::DisplayName;
pub use error::AttributeError;
pub use ext::ReflectAttributes;
pub use query::AttributeQuery;

pub use crate::info::{is_assignable, is_exact};

use alloc::vec::Vec;

use crate::Reflect;
use crate::info::Attribute;

// -----------------------------------------------------------------------------
// Functions

/// Returns the attributes declared on `member` of `target`.
///
/// See [`AttributeQuery::attributes`].
#[inline]
pub fn get_attributes(
    target: &dyn Reflect,
    member: &str,
    inherited: bool,
) -> Vec<&'static dyn Attribute> {
    AttributeQuery::new()
        .member(member)
        .inherited(inherited)
        .attributes(target)
}

/// Returns the attributes of category `T` declared on `member` of `target`.
///
/// See [`AttributeQuery::attributes_of`].
#[inline]
pub fn get_attributes_of<T: Reflect>(
    target: &dyn Reflect,
    member: &str,
    inherited: bool,
) -> Vec<&'static T> {
    AttributeQuery::new()
        .member(member)
        .inherited(inherited)
        .attributes_of::<T>(target)
}

/// Returns `true` if `member` of `target` declares an attribute of
/// category `T`.
///
/// See [`AttributeQuery::has`].
#[inline]
pub fn has_attribute<T: Reflect>(target: &dyn Reflect, member: &str, inherited: bool) -> bool {
    AttributeQuery::new()
        .member(member)
        .inherited(inherited)
        .has::<T>(target)
}

/// Returns the first attribute of category `T` declared on `member` of
/// `target`.
///
/// See [`AttributeQuery::attribute`].
#[inline]
pub fn get_attribute<T: Reflect>(
    target: &dyn Reflect,
    member: &str,
    inherited: bool,
) -> Option<&'static T> {
    AttributeQuery::new()
        .member(member)
        .inherited(inherited)
        .attribute::<T>(target)
}

/// Returns `true` if the type of `target` has a field named `name`,
/// including the fields of its base declarations.
///
/// A null target has no properties.
///
/// ```
/// # use fc_reflect::{derive::Reflect, meta};
/// #[derive(Reflect)]
/// struct Point { x: f32, y: f32 }
///
/// let point = Point { x: 0.0, y: 1.0 };
/// assert!(meta::has_property(&point, "x"));
/// assert!(!meta::has_property(&point, "z"));
/// assert!(!meta::has_property(&None::<Point>, "x"));
/// ```
pub fn has_property(target: &dyn Reflect, name: &str) -> bool {
    target
        .dereference()
        .and_then(|object| object.reflect_type_info().member(name))
        .is_some_and(|member| member.as_field().is_some())
}

/// Returns the [`DisplayName`] declared on `member`, or the member name
/// itself.
///
/// Returns `None` if the member does not exist or declares more than one
/// [`DisplayName`]. Enum values resolve to their current variant, like every
/// attribute query.
pub fn display_name(target: &dyn Reflect, member: &str) -> Option<&'static str> {
    let query = AttributeQuery::new().member(member);
    let info = query.member_info(target)?;
    match query.required::<DisplayName>(target) {
        Ok(display) => Some(display.name()),
        Err(AttributeError::Missing { .. }) => Some(info.name()),
        Err(AttributeError::Ambiguous { .. }) => None,
    }
}
