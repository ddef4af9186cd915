//! Containers for static storage of type information.
//!
//! This is usually used to implement [`Typed`](crate::info::Typed).
//!
//! ## NonGenericTypeCell
//!
//! For non generic types, [`NonGenericTypeInfoCell`] stores the [`TypeInfo`]
//! in a [`OnceLock<T>`].
//!
//! There is no `NonGenericTypePathCell` because a static string literal does
//! the same job.
//!
//! ## GenericTypeCell
//!
//! For generic types:
//! - [`GenericTypeInfoCell`]: Storage [`TypeInfo`]
//! - [`GenericTypePathCell`]: Storage [`String`]
//!
//! The `static CELL` inside a generic function is shared by every
//! instantiation, so the cell holds a [`TypeIdMap<T>`] behind a [`RwLock`].

use alloc::{boxed::Box, string::String};
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use fc_utils::TypeIdMap;

use crate::info::TypeInfo;

mod sealed {
    use super::TypeInfo;
    use alloc::string::String;
    pub trait TypedProperty: 'static {}

    impl TypedProperty for String {}
    impl TypedProperty for TypeInfo {}
}

use sealed::TypedProperty;

/// Container for static storage of non-generic type information.
///
/// See [`NonGenericTypeInfoCell`].
pub struct NonGenericTypeCell<T: TypedProperty>(OnceLock<T>);

/// Container for static storage of non-generic type information.
///
/// ## Example
///
/// ```
/// use fc_reflect::Reflect;
/// use fc_reflect::impls::NonGenericTypeInfoCell;
/// use fc_reflect::info::{TypeInfo, TypePath, Typed, OpaqueInfo, ReflectKind};
/// use fc_reflect::ops::ReflectRef;
///
/// struct Token;
///
/// impl Reflect for Token {
///     fn reflect_kind(&self) -> ReflectKind { ReflectKind::Opaque }
///     fn reflect_ref(&self) -> ReflectRef<'_> { ReflectRef::Opaque(self) }
/// }
///
/// impl TypePath for Token {
///     fn type_path() -> &'static str { "auth::Token" }
///     fn type_name() -> &'static str { "Token" }
///     fn type_ident() -> &'static str { "Token" }
/// }
///
/// impl Typed for Token {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Token>()))
///     }
/// }
///
/// assert!(core::ptr::eq(Token::type_info(), Token::type_info()));
/// ```
pub type NonGenericTypeInfoCell = NonGenericTypeCell<TypeInfo>;

impl<T: TypedProperty> NonGenericTypeCell<T> {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns a reference to the value stored in the cell.
    ///
    /// If the cell is empty, the value is generated from the given function.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.0.get_or_init(f)
    }
}

/// Container for static storage of type information with generics.
///
/// See [`GenericTypeInfoCell`] and [`GenericTypePathCell`].
pub struct GenericTypeCell<T: TypedProperty>(RwLock<TypeIdMap<&'static T>>);

/// Container for static storage of type information with generics.
///
/// See the `Typed` implementation of `Option<T>` in this crate.
pub type GenericTypeInfoCell = GenericTypeCell<TypeInfo>;

/// Container for static storage of type path with generics.
///
/// ## Example
///
/// ```
/// use fc_reflect::impls::{self, GenericTypePathCell};
/// use fc_reflect::info::TypePath;
///
/// struct Wrapper<T>(T);
///
/// impl<T: TypePath> TypePath for Wrapper<T> {
///     fn type_path() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| {
///             impls::concat(&["demo::Wrapper", "<", T::type_path(), ">"])
///         })
///     }
///     fn type_name() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| impls::concat(&["Wrapper", "<", T::type_name(), ">"]))
///     }
///     fn type_ident() -> &'static str { "Wrapper" }
/// }
///
/// assert_eq!(<Wrapper<i32>>::type_path(), "demo::Wrapper<i32>");
/// assert_eq!(<Wrapper<u8>>::type_name(), "Wrapper<u8>");
/// ```
pub type GenericTypePathCell = GenericTypeCell<String>;

impl<T: TypedProperty> GenericTypeCell<T> {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the value stored for the type `G`.
    ///
    /// If there is no entry found, a new one will be generated from the given function.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> T) -> &T {
        // Separate to reduce code compilation times
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> T) -> &T {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static T> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    // A concurrent insert for the same type may win the race; its value is kept.
    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: T) -> &'static T {
        *self
            .0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(type_id, || Box::leak(Box::new(value)))
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;
    use std::sync::Barrier;
    use std::thread;

    use crate::access::ReflectPropertyPath;
    use crate::derive::Reflect;
    use crate::info::{TypeInfo, TypePath, Typed};
    use crate::meta::AttributeQuery;

    #[derive(Reflect)]
    struct User {
        name: String,
    }

    #[derive(Reflect)]
    struct Session {
        #[reflect(@"secret")]
        token: String,
        user: Option<User>,
    }

    const THREADS: usize = 8;

    #[test]
    fn generic_cells_shared_across_threads() {
        let barrier = Barrier::new(THREADS);
        let results: Vec<(&'static TypeInfo, &'static str, bool, bool)> = thread::scope(|scope| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    scope.spawn(|| {
                        barrier.wait();
                        let info = <Option<Session>>::type_info();
                        let path = <Option<Session>>::type_path();

                        let session = Session {
                            token: String::from("t"),
                            user: Some(User {
                                name: String::from("ada"),
                            }),
                        };
                        let resolved = session
                            .resolve_as::<String>("user.name")
                            .is_ok_and(|name| name == "ada");
                        let has = AttributeQuery::new().member("token").has::<&str>(&session);
                        (info, path, resolved, has)
                    })
                })
                .collect();
            handles.into_iter().map(|handle| handle.join().unwrap()).collect()
        });

        let (info, path, _, _) = results[0];
        assert!(info.type_is::<Option<Session>>());
        assert!(path.starts_with("core::option::Option<"));
        assert!(path.ends_with("::Session>"));
        for &(other_info, other_path, resolved, has) in &results {
            assert!(core::ptr::eq(info, other_info));
            assert!(core::ptr::eq(path, other_path));
            assert!(resolved);
            assert!(has);
        }
    }
}
