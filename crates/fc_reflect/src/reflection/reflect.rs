use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{DynamicTypePath, DynamicTyped, ReflectKind};
use crate::ops::ReflectRef;

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for runtime reflection in [`fc_reflect`].
///
/// A `dyn Reflect` is the "target object" of every query in this crate: the
/// [path resolver](crate::access) walks its fields by name and the
/// [metadata locator](crate::meta) reads the attributes declared on its
/// members.
///
/// # Recommendations
///
/// Use [`#[derive(Reflect)]`](crate::derive::Reflect) instead of implementing
/// this trait by hand. The derive also implements [`TypePath`], [`Typed`] and
/// the kind-specific trait ([`Struct`] or [`Enum`]).
///
/// # Type Identification
///
/// [`Any::type_id`] on a `Box<dyn Reflect>` returns the id of the box.
/// Use [`Reflect::ty_id`] instead:
///
/// ```
/// # use fc_reflect::Reflect;
/// # use core::any::{Any, TypeId};
/// let x: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
///
/// assert!(x.type_id() != TypeId::of::<i32>());
/// assert!(x.ty_id() == TypeId::of::<i32>());
/// ```
///
/// # Kinds
///
/// [`reflect_ref`](Reflect::reflect_ref) casts to the kind-specific view:
///
/// ```
/// # use fc_reflect::{Reflect, ops::ReflectRef};
/// let value: Option<u8> = None;
/// let ReflectRef::Nullable(nullable) = value.reflect_ref() else { unreachable!() };
/// assert!(nullable.value().is_none());
/// ```
///
/// [`fc_reflect`]: crate
/// [`TypePath`]: crate::info::TypePath
/// [`Typed`]: crate::info::Typed
/// [`Struct`]: crate::ops::Struct
/// [`Enum`]: crate::ops::Enum
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    /// Casts this type to a fully-reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a boxed, fully-reflected value.
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Returns the [`TypeId`] of the underlying type.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns the [kind](ReflectKind) of this value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fc_reflect::{Reflect, info::ReflectKind};
    /// assert_eq!(7_u32.reflect_kind(), ReflectKind::Opaque);
    /// assert_eq!(Some(7_u32).reflect_kind(), ReflectKind::Nullable);
    /// ```
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns a kind-specific view of this value.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Debug formatter for the value.
    ///
    /// The default implementation formats by kind; opaque values only print
    /// their type path.
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::impls;
        match self.reflect_ref() {
            ReflectRef::Struct(data) => impls::struct_debug(data, f),
            ReflectRef::Enum(data) => impls::enum_debug(data, f),
            ReflectRef::Nullable(data) => impls::nullable_debug(data, f),
            ReflectRef::Opaque(_) => write!(f, "Opaque({})", self.reflect_type_path()),
        }
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fc_reflect::Reflect;
    /// let value: &dyn Reflect = &10_i64;
    /// assert_eq!(value.downcast_ref::<i64>(), Some(&10));
    /// assert!(value.downcast_ref::<i32>().is_none());
    /// ```
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Follows [`Nullable`](crate::ops::Nullable) values down to the object
    /// they hold.
    ///
    /// Returns `None` for a null value (`Option::None` at any depth). Any
    /// other value is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fc_reflect::Reflect;
    /// let nested: Option<Option<u8>> = Some(Some(3));
    /// let inner = nested.as_reflect().dereference().unwrap();
    /// assert_eq!(inner.downcast_ref::<u8>(), Some(&3));
    ///
    /// let null: Option<u8> = None;
    /// assert!(null.as_reflect().dereference().is_none());
    /// ```
    pub fn dereference(&self) -> Option<&dyn Reflect> {
        let mut it: &dyn Reflect = self;
        while let ReflectRef::Nullable(nullable) = it.reflect_ref() {
            it = nullable.value()?;
        }
        Some(it)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implements `reflect_kind` and `reflect_ref` for a kind.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;
