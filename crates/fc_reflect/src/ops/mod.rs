//! Provide interfaces for kind-specific data access.
//!
//! The following are subtraits of [`Reflect`]:
//!
//! - [`Struct`]: For struct with named fields (e.g. `A{ .. }`).
//! - [`Enum`]: For fieldless enums (e.g. `Color::Red`).
//! - [`Nullable`]: For values that may be null (e.g. `Option<T>`).
//!
//! [`ReflectRef`] casts a `dyn Reflect` to one of them.
//!
//! [`Reflect`]: crate::Reflect

// -----------------------------------------------------------------------------
// Modules

mod enum_ops;
mod kind;
mod nullable_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use enum_ops::Enum;
pub use kind::ReflectRef;
pub use nullable_ops::Nullable;
pub use struct_ops::{Struct, StructFieldIter};
