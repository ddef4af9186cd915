use crate::Reflect;
use crate::info::ReflectKind;
use crate::ops::{Enum, Nullable, Struct};

/// An immutable, kind-specific view of a reflected value.
///
/// Obtained from [`Reflect::reflect_ref`].
///
/// # Examples
///
/// ```
/// use fc_reflect::{Reflect, info::ReflectKind, ops::ReflectRef};
///
/// let value = Some(String::from("id"));
/// let view = value.reflect_ref();
/// assert_eq!(view.kind(), ReflectKind::Nullable);
/// assert!(matches!(view, ReflectRef::Nullable(_)));
/// ```
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    Enum(&'a dyn Enum),
    Nullable(&'a dyn Nullable),
    Opaque(&'a dyn Reflect),
}

impl ReflectRef<'_> {
    /// Returns the [`ReflectKind`] of this view.
    #[inline]
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Enum(_) => ReflectKind::Enum,
            Self::Nullable(_) => ReflectKind::Nullable,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }
}
