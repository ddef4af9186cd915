use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Automatically implemented by [`#[derive(Reflect)]`](crate::derive::Reflect),
/// allowing access to type information without an instance of the type.
///
/// # Examples
///
/// ```
/// use fc_reflect::{derive::Reflect, info::{Typed, TypeInfo}};
///
/// #[derive(Reflect)]
/// struct Account {
///     owner: String,
/// }
///
/// let info: &'static TypeInfo = <Account as Typed>::type_info();
/// assert!(info.as_struct().unwrap().field("owner").is_some());
/// ```
///
/// # Manually Impl
///
/// Use [`NonGenericTypeInfoCell`] or [`GenericTypeInfoCell`] to store the
/// info; both build it once on first access.
///
/// ```
/// use fc_reflect::{
///     Reflect,
///     info::{Typed, TypeInfo, TypePath, OpaqueInfo, ReflectKind},
///     impls::NonGenericTypeInfoCell,
///     ops::ReflectRef,
/// };
///
/// struct Handle;
///
/// impl Reflect for Handle {
///     fn reflect_kind(&self) -> ReflectKind { ReflectKind::Opaque }
///     fn reflect_ref(&self) -> ReflectRef<'_> { ReflectRef::Opaque(self) }
/// }
///
/// impl TypePath for Handle {
///     fn type_path() -> &'static str { "demo::Handle" }
///     fn type_name() -> &'static str { "Handle" }
///     fn type_ident() -> &'static str { "Handle" }
/// }
///
/// impl Typed for Handle {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
///
/// assert!(Handle::type_info().type_is::<Handle>());
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: TypePath {
    /// Returns the compile-time type information.
    ///
    /// Use [`DynamicTyped`] for dynamic dispatch.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Provide dynamic dispatch for types that implement [`Typed`].
///
/// Auto impl for all types that implemented [`Typed`].
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use fc_reflect::{Reflect, info::DynamicTyped};
    /// let value: Box<dyn Reflect> = Box::new(1_u64);
    /// assert!(value.reflect_type_info().type_is::<u64>());
    /// ```
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
