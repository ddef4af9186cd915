use alloc::string::String;
use core::any::TypeId;
use core::fmt;

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{Attribute, OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::reflection::impl_reflect_cast_fn;

/// Implements opaque reflection for a type with a `Debug` implementation.
///
/// Every opaque value is also usable as an [`Attribute`] without base
/// categories, so `#[reflect(@"text")]` or `#[reflect(@3_u8)]` work.
macro_rules! impl_reflect_opaque {
    ($ty:ty) => {
        impl_reflect_opaque!($ty, stringify!($ty), stringify!($ty), None);
    };
    ($ty:ty, $path:expr, $name:expr, $module:expr) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }

            #[inline]
            fn type_ident() -> &'static str {
                $name
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                $module
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
            }
        }

        impl Reflect for $ty {
            impl_reflect_cast_fn!(Opaque);

            #[inline]
            fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(self, f)
            }
        }

        impl Attribute for $ty {
            #[inline]
            fn as_category(&self, category: TypeId) -> Option<&dyn Reflect> {
                if category == TypeId::of::<Self>() {
                    Some(self as &dyn Reflect)
                } else {
                    None
                }
            }
        }
    };
}

impl_reflect_opaque!(bool);
impl_reflect_opaque!(char);
impl_reflect_opaque!(i8);
impl_reflect_opaque!(i16);
impl_reflect_opaque!(i32);
impl_reflect_opaque!(i64);
impl_reflect_opaque!(i128);
impl_reflect_opaque!(isize);
impl_reflect_opaque!(u8);
impl_reflect_opaque!(u16);
impl_reflect_opaque!(u32);
impl_reflect_opaque!(u64);
impl_reflect_opaque!(u128);
impl_reflect_opaque!(usize);
impl_reflect_opaque!(f32);
impl_reflect_opaque!(f64);
impl_reflect_opaque!(&'static str, "&str", "&str", None);
impl_reflect_opaque!(
    String,
    "alloc::string::String",
    "String",
    Some("alloc::string")
);

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use core::any::TypeId;

    use crate::Reflect;
    use crate::info::{Attribute, ReflectKind, TypePath, Typed};

    #[test]
    fn type_path() {
        assert_eq!(i32::type_path(), "i32");
        assert_eq!(<&str>::type_name(), "&str");
        assert_eq!(String::type_path(), "alloc::string::String");
        assert_eq!(String::module_path(), Some("alloc::string"));
        assert_eq!(u8::module_path(), None);
    }

    #[test]
    fn opaque_kind() {
        assert_eq!(true.reflect_kind(), ReflectKind::Opaque);
        assert_eq!(f64::type_info().kind(), ReflectKind::Opaque);
        assert_eq!(alloc::format!("{:?}", 'x'.as_reflect()), "'x'");
    }

    #[test]
    fn primitive_attribute_category() {
        let attr: &dyn Attribute = &"label";
        assert!(attr.as_category(TypeId::of::<&str>()).is_some());
        assert!(attr.as_category(TypeId::of::<String>()).is_none());
        assert!(attr.inheritable());
    }
}
