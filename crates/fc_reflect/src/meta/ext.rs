use alloc::vec::Vec;

use crate::Reflect;
use crate::info::Attribute;
use crate::meta::AttributeQuery;
use crate::ops::{Enum, Struct};

/// Attribute queries as methods of reflected values.
///
/// Every method is a shortcut for an [`AttributeQuery`] or a function of
/// [`meta`](crate::meta).
///
/// # Examples
///
/// ```
/// use fc_reflect::{derive::Reflect, meta::ReflectAttributes};
///
/// #[derive(Reflect)]
/// enum Priority {
///     #[reflect(@"low")]
///     Low,
///     #[reflect(@"high")]
///     High,
/// }
///
/// // The member name does not matter for enum values.
/// assert_eq!(Priority::High.member_attribute::<&str>("", false), Some(&"high"));
/// assert!(Priority::Low.has_member_attribute::<&str>("whatever", false));
/// ```
pub trait ReflectAttributes {
    /// See [`AttributeQuery::attributes`].
    fn member_attributes(&self, member: &str, inherited: bool) -> Vec<&'static dyn Attribute>;

    /// See [`AttributeQuery::attribute`].
    fn member_attribute<T: Reflect>(&self, member: &str, inherited: bool) -> Option<&'static T>;

    /// See [`AttributeQuery::has`].
    fn has_member_attribute<T: Reflect>(&self, member: &str, inherited: bool) -> bool;

    /// See [`has_property`](crate::meta::has_property).
    fn has_property(&self, name: &str) -> bool;

    /// See [`display_name`](crate::meta::display_name).
    fn display_name(&self, member: &str) -> Option<&'static str>;
}

impl ReflectAttributes for dyn Reflect {
    #[inline]
    fn member_attributes(&self, member: &str, inherited: bool) -> Vec<&'static dyn Attribute> {
        query(member, inherited).attributes(self)
    }

    #[inline]
    fn member_attribute<T: Reflect>(&self, member: &str, inherited: bool) -> Option<&'static T> {
        query(member, inherited).attribute::<T>(self)
    }

    #[inline]
    fn has_member_attribute<T: Reflect>(&self, member: &str, inherited: bool) -> bool {
        query(member, inherited).has::<T>(self)
    }

    #[inline]
    fn has_property(&self, name: &str) -> bool {
        crate::meta::has_property(self, name)
    }

    #[inline]
    fn display_name(&self, member: &str) -> Option<&'static str> {
        crate::meta::display_name(self, member)
    }
}

#[inline]
fn query(member: &str, inherited: bool) -> AttributeQuery<'_> {
    AttributeQuery::new().member(member).inherited(inherited)
}

macro_rules! impl_reflect_attributes {
    () => {
        #[inline(always)]
        fn member_attributes(&self, member: &str, inherited: bool) -> Vec<&'static dyn Attribute> {
            <dyn Reflect as ReflectAttributes>::member_attributes(self, member, inherited)
        }

        #[inline(always)]
        fn member_attribute<T: Reflect>(
            &self,
            member: &str,
            inherited: bool,
        ) -> Option<&'static T> {
            <dyn Reflect as ReflectAttributes>::member_attribute::<T>(self, member, inherited)
        }

        #[inline(always)]
        fn has_member_attribute<T: Reflect>(&self, member: &str, inherited: bool) -> bool {
            <dyn Reflect as ReflectAttributes>::has_member_attribute::<T>(self, member, inherited)
        }

        #[inline(always)]
        fn has_property(&self, name: &str) -> bool {
            <dyn Reflect as ReflectAttributes>::has_property(self, name)
        }

        #[inline(always)]
        fn display_name(&self, member: &str) -> Option<&'static str> {
            <dyn Reflect as ReflectAttributes>::display_name(self, member)
        }
    };
    (dyn $name:ident) => {
        impl ReflectAttributes for dyn $name {
            impl_reflect_attributes!();
        }
    };
    (T: $name:ident) => {
        impl<P: Sized + $name> ReflectAttributes for P {
            impl_reflect_attributes!();
        }
    };
}

impl_reflect_attributes!(T: Reflect);
impl_reflect_attributes!(dyn Struct);
impl_reflect_attributes!(dyn Enum);
