use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{NullableInfo, TypeInfo, TypePath, Typed};
use crate::ops::Nullable;
use crate::reflection::impl_reflect_cast_fn;

impl<T: TypePath> TypePath for Option<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["core::option::Option<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Option<", T::type_name(), ">"]))
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Option"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("core::option")
    }
}

impl<T: Typed + Reflect> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Nullable(NullableInfo::new::<Self, T>()))
    }
}

impl<T: Typed + Reflect> Reflect for Option<T> {
    impl_reflect_cast_fn!(Nullable);
}

impl<T: Typed + Reflect> Nullable for Option<T> {
    #[inline]
    fn value(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(|value| value as &dyn Reflect)
    }
}

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::{TypePath, Typed};

    #[test]
    fn type_path() {
        assert_eq!(<Option<u8>>::type_path(), "core::option::Option<u8>");
        assert_eq!(<Option<Option<u8>>>::type_name(), "Option<Option<u8>>");
        assert_eq!(<Option<u8>>::type_ident(), "Option");
    }

    #[test]
    fn type_info_per_instantiation() {
        let a = <Option<u8>>::type_info().as_nullable().unwrap();
        let b = <Option<i8>>::type_info().as_nullable().unwrap();
        assert!(a.inner().is::<u8>());
        assert!(b.inner().is::<i8>());
        assert!(core::ptr::eq(a, <Option<u8>>::type_info().as_nullable().unwrap()));
    }

    #[test]
    fn dereference_nested() {
        let value: Option<Option<u32>> = Some(None);
        assert!(value.as_reflect().dereference().is_none());

        let value: Option<Option<u32>> = Some(Some(9));
        let inner = value.as_reflect().dereference().unwrap();
        assert_eq!(inner.downcast_ref::<u32>(), Some(&9));
    }
}
