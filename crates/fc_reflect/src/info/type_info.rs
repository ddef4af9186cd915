use core::fmt;
use core::iter;

use thiserror::Error;

use crate::info::{CustomAttributes, Member, MemberInfo, Type};
use crate::info::{EnumInfo, NullableInfo, OpaqueInfo, StructInfo};

// -----------------------------------------------------------------------------
// ReflectKind

/// An enumeration of the "kinds" of a reflected type.
///
/// Each kind corresponds to a specific reflection trait, such as
/// [`Struct`](crate::ops::Struct) or [`Nullable`](crate::ops::Nullable).
///
/// A [`ReflectKind`] is obtained via [`Reflect::reflect_kind`],
/// [`ReflectRef::kind`] or [`TypeInfo::kind`].
///
/// [`Reflect::reflect_kind`]: crate::Reflect::reflect_kind
/// [`ReflectRef::kind`]: crate::ops::ReflectRef::kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Struct,
    Enum,
    Nullable,
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::Enum => f.pad("Enum"),
            Self::Nullable => f.pad("Nullable"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// Error returned when a `TypeInfo` value is not the expected `ReflectKind`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("reflect kind mismatch: expected {expected}, received {received}")]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information for reflected types.
///
/// # Content
///
/// - **kind**: same as [`ReflectKind`].
/// - **type**: [`TypeId`](core::any::TypeId) and names, see [`Type`].
/// - **attributes**: [`CustomAttributes`] declared on the type itself.
/// - **members**: fields of a struct (including its base chain) or the
///   variants of an enum, see [`member`](TypeInfo::member).
/// - **docs**: type documentation, needs the **reflect_docs** feature.
///
/// # Obtain
///
/// - [`Typed::type_info`] if the type is known at compile time.
/// - [`DynamicTyped::reflect_type_info`] from a `dyn Reflect`.
///
/// [`Typed::type_info`]: crate::info::Typed::type_info
/// [`DynamicTyped::reflect_type_info`]: crate::info::DynamicTyped::reflect_type_info
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Struct(StructInfo),
    Enum(EnumInfo),
    Nullable(NullableInfo),
    Opaque(OpaqueInfo),
}

// Helper macro that implements type-safe accessor methods like `as_struct`.
macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Convert [`TypeInfo`] to specific type information.
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_enum: Enum => EnumInfo);
    impl_cast_method!(as_nullable: Nullable => NullableInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    /// Returns the underlying [`Type`] metadata for this `TypeInfo`.
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Struct(info) => info.ty(),
            Self::Enum(info) => info.ty(),
            Self::Nullable(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    crate::info::impl_type_fn!();

    /// Returns the [`ReflectKind`] for this `TypeInfo`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fc_reflect::info::{Typed, ReflectKind};
    ///
    /// assert_eq!(i32::type_info().kind(), ReflectKind::Opaque);
    /// assert_eq!(<Option<i32>>::type_info().kind(), ReflectKind::Nullable);
    /// ```
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Enum(_) => ReflectKind::Enum,
            Self::Nullable(_) => ReflectKind::Nullable,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Returns the custom attributes attached to this type.
    ///
    /// Nullable types carry no attributes of their own and return a shared
    /// empty collection.
    ///
    /// ```
    /// # use fc_reflect::{derive::Reflect, info::Typed};
    /// #[derive(Reflect)]
    /// #[reflect(@"table:orders")]
    /// struct Order {
    ///     id: u64,
    /// }
    ///
    /// let info = Order::type_info();
    /// assert!(info.has_attribute::<&str>());
    /// assert_eq!(info.get_attribute::<&str>(), Some(&"table:orders"));
    /// ```
    pub fn custom_attributes(&self) -> &CustomAttributes {
        match self {
            Self::Struct(info) => info.custom_attributes(),
            Self::Enum(info) => info.custom_attributes(),
            Self::Opaque(info) => info.custom_attributes(),
            Self::Nullable(_) => CustomAttributes::EMPTY,
        }
    }

    crate::info::impl_custom_attributes_fn!();

    /// Returns the documentation string for the type, if `reflect_docs` is
    /// enabled and docs are present.
    #[cfg_attr(not(feature = "reflect_docs"), inline(always))]
    pub const fn docs(&self) -> Option<&'static str> {
        #[cfg(not(feature = "reflect_docs"))]
        return None;
        #[cfg(feature = "reflect_docs")]
        match self {
            Self::Struct(info) => info.docs(),
            Self::Enum(info) => info.docs(),
            Self::Opaque(info) => info.docs(),
            Self::Nullable(_) => None,
        }
    }

    /// Returns the base declaration of a struct, if any.
    #[inline]
    pub fn base(&self) -> Option<&'static TypeInfo> {
        match self {
            Self::Struct(info) => info.base_info(),
            _ => None,
        }
    }

    /// Returns the chain of base declarations, nearest base first.
    ///
    /// ```
    /// # use fc_reflect::{derive::Reflect, info::Typed};
    /// #[derive(Reflect)]
    /// struct A { a: u8 }
    ///
    /// #[derive(Reflect)]
    /// struct B { #[reflect(base)] a: A }
    ///
    /// #[derive(Reflect)]
    /// struct C { #[reflect(base)] b: B }
    ///
    /// let chain: Vec<_> = C::type_info().bases().map(|t| t.type_name()).collect();
    /// assert_eq!(chain, ["B", "A"]);
    /// ```
    pub fn bases(&self) -> impl Iterator<Item = &'static TypeInfo> {
        iter::successors(self.base(), |info| info.base())
    }

    /// Returns the member declared directly on this type with the given name.
    ///
    /// The base chain is not searched.
    pub fn declared_member(&'static self, name: &str) -> Option<MemberInfo> {
        let member = match self {
            Self::Struct(info) => Member::Field(info.field(name)?),
            Self::Enum(info) => Member::Variant(info.variant(name)?),
            Self::Nullable(_) | Self::Opaque(_) => return None,
        };
        Some(MemberInfo::new(member, self))
    }

    /// Returns the member with the given name.
    ///
    /// Fields declared on the struct itself come first, then the fields of
    /// each base declaration. A field therefore overrides a base field with
    /// the same name.
    pub fn member(&'static self, name: &str) -> Option<MemberInfo> {
        self.declared_member(name)
            .or_else(|| self.bases().find_map(|base| base.declared_member(name)))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::derive::Reflect;
    use crate::info::{Member, ReflectKind, Typed};

    #[derive(Reflect)]
    struct Base {
        #[reflect(@"base")]
        name: String,
        code: u32,
    }

    #[derive(Reflect)]
    struct Derived {
        #[reflect(base)]
        base: Base,
        #[reflect(@"derived")]
        name: String,
    }

    #[test]
    fn derived_field_overrides_base() {
        let member = Derived::type_info().member("name").unwrap();
        assert!(member.declaring_type().type_is::<Derived>());
        assert_eq!(member.get_attribute::<&str>(), Some(&"derived"));
    }

    #[test]
    fn base_field_is_visible() {
        let member = Derived::type_info().member("code").unwrap();
        assert!(member.declaring_type().type_is::<Base>());
        assert!(matches!(member.member(), Member::Field(f) if f.type_is::<u32>()));
        assert!(Derived::type_info().declared_member("code").is_none());
    }

    #[test]
    fn kind_mismatch() {
        let err = u8::type_info().as_struct().unwrap_err();
        assert_eq!(err.expected, ReflectKind::Struct);
        assert_eq!(err.received, ReflectKind::Opaque);
        assert_eq!(
            err.to_string(),
            "reflect kind mismatch: expected Struct, received Opaque"
        );
    }
}
