use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};
use crate::ops::Nullable;

/// Type information for a value that may be null, such as `Option<T>`.
///
/// # Examples
///
/// ```
/// use fc_reflect::info::Typed;
///
/// let info = <Option<u16> as Typed>::type_info().as_nullable().unwrap();
/// assert!(info.inner().is::<u16>());
/// assert_eq!(info.inner_info().type_path(), "u16");
/// ```
#[derive(Debug, Clone)]
pub struct NullableInfo {
    ty: Type,
    inner: Type,
    inner_info: fn() -> &'static TypeInfo,
}

impl NullableInfo {
    impl_type_fn!(ty);

    /// Creates a new [`NullableInfo`] for `T` holding a `TInner`.
    #[inline]
    pub const fn new<T: Nullable + TypePath, TInner: Typed>() -> Self {
        Self {
            ty: Type::of::<T>(),
            inner: Type::of::<TInner>(),
            inner_info: TInner::type_info,
        }
    }

    /// Returns the [`Type`] of the held value.
    #[inline]
    pub const fn inner(&self) -> &Type {
        &self.inner
    }

    /// Returns the [`TypeInfo`] of the held value.
    #[inline]
    pub fn inner_info(&self) -> &'static TypeInfo {
        (self.inner_info)()
    }
}
