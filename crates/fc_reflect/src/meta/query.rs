use alloc::string::ToString;
use alloc::vec::Vec;
use core::any::TypeId;

use crate::Reflect;
use crate::info::{Attribute, MemberInfo, TypePath, is_assignable, is_exact};
use crate::meta::AttributeError;
use crate::ops::ReflectRef;

/// A query for the attributes declared on a member of a target object.
///
/// The target is any `&dyn Reflect`. A null target (`Option::None`) has no
/// members, so every query on it returns an empty result.
///
/// # Member resolution
///
/// - If the target is an enum value, the member is **always** the variant
///   holding its current value. The member name of the query is ignored.
/// - Otherwise the member named by [`member`](Self::member) is looked up on
///   the target's type: its own fields first, then the fields of its base
///   declarations. An empty name matches nothing.
///
/// # Inheritance
///
/// With [`inherited(true)`](Self::inherited), the attributes declared on
/// the same-named member of each base declaration are appended, nearest
/// base first. Attributes whose [`inheritable`](Attribute::inheritable) is
/// `false` are not collected from bases.
///
/// It also selects the predicate of [`has`](Self::has): an attribute
/// *assignable* to the category when inherited, an *exact* type match
/// otherwise.
///
/// # Examples
///
/// ```
/// use fc_reflect::{derive::Reflect, meta::AttributeQuery};
///
/// #[derive(Reflect)]
/// struct Form {
///     #[reflect(@"required", @"trim")]
///     email: String,
/// }
///
/// let form = Form { email: String::new() };
/// let query = AttributeQuery::new().member("email");
///
/// assert_eq!(query.attributes(&form).len(), 2);
/// assert_eq!(query.attributes_of::<&str>(&form), [&"required", &"trim"]);
/// assert_eq!(query.attribute::<&str>(&form), Some(&"required"));
/// assert!(!query.has::<bool>(&form));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttributeQuery<'n> {
    member: &'n str,
    inherited: bool,
}

impl<'n> AttributeQuery<'n> {
    /// Creates a query with an empty member name and without inheritance.
    #[inline]
    pub const fn new() -> Self {
        Self {
            member: "",
            inherited: false,
        }
    }

    /// Sets the member name.
    #[inline]
    pub const fn member(self, member: &'n str) -> Self {
        Self { member, ..self }
    }

    /// Sets whether attributes of base declarations are considered.
    #[inline]
    pub const fn inherited(self, inherited: bool) -> Self {
        Self { inherited, ..self }
    }

    /// Locates the queried member on `target`.
    ///
    /// Returns `None` for a null target, an unknown member, or an empty
    /// member name on a non-enum target.
    pub fn member_info(&self, target: &dyn Reflect) -> Option<MemberInfo> {
        let object = target.dereference()?;
        let info = object.reflect_type_info();

        let name = match object.reflect_ref() {
            // An enum value is described by its current variant, whatever
            // member name the caller asked for.
            ReflectRef::Enum(value) => {
                let variant = value.variant_name();
                if !self.member.is_empty() && self.member != variant {
                    log::trace!(
                        "ignoring member `{}` on enum `{}`, using variant `{variant}`",
                        self.member,
                        object.reflect_type_path(),
                    );
                }
                variant
            }
            _ => self.member,
        };

        if name.is_empty() {
            return None;
        }
        info.member(name)
    }

    /// Returns the attributes declared on the member, in declaration order.
    ///
    /// When inherited, the inheritable attributes of the overridden base
    /// members follow, nearest base first.
    pub fn attributes(&self, target: &dyn Reflect) -> Vec<&'static dyn Attribute> {
        let Some(member) = self.member_info(target) else {
            return Vec::new();
        };

        let mut attributes: Vec<_> = member.custom_attributes().iter().collect();
        if self.inherited {
            for base in member.declaring_type().bases() {
                if let Some(overridden) = base.declared_member(member.name()) {
                    let inherited = overridden.custom_attributes().iter();
                    attributes.extend(inherited.filter(|attr| attr.inheritable()));
                }
            }
        }
        attributes
    }

    /// Returns the attributes assignable to the category `T`, viewed as `T`.
    ///
    /// Declaration order is preserved.
    pub fn attributes_of<T: Reflect>(&self, target: &dyn Reflect) -> Vec<&'static T> {
        let category = TypeId::of::<T>();
        self.attributes(target)
            .into_iter()
            .filter_map(|attr| attr.as_category(category))
            .filter_map(<dyn Reflect>::downcast_ref::<T>)
            .collect()
    }

    /// Returns the first attribute assignable to the category `T`.
    #[inline]
    pub fn attribute<T: Reflect>(&self, target: &dyn Reflect) -> Option<&'static T> {
        self.attributes_of::<T>(target).into_iter().next()
    }

    /// Returns `true` if the member declares an attribute of category `T`.
    ///
    /// Inherited queries accept any attribute assignable to `T`, others
    /// require the exact type `T`.
    pub fn has<T: Reflect>(&self, target: &dyn Reflect) -> bool {
        let predicate: fn(&dyn Attribute) -> bool = if self.inherited {
            is_assignable::<T>
        } else {
            is_exact::<T>
        };
        self.attributes(target).into_iter().any(predicate)
    }

    /// Returns the single attribute assignable to the category `T` declared
    /// on the member itself, viewed as `T`.
    ///
    /// Base declarations are never considered.
    ///
    /// # Errors
    ///
    /// - [`AttributeError::Missing`] if there is none.
    /// - [`AttributeError::Ambiguous`] if there are several.
    pub fn required<T: Reflect + TypePath>(
        &self,
        target: &dyn Reflect,
    ) -> Result<&'static T, AttributeError> {
        match self.inherited(false).attributes_of::<T>(target).as_slice() {
            [attr] => Ok(*attr),
            [] => Err(AttributeError::Missing {
                attribute: T::type_path(),
                member: self.member.to_string(),
            }),
            found => Err(AttributeError::Ambiguous {
                attribute: T::type_path(),
                member: self.member.to_string(),
                count: found.len(),
            }),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::AttributeQuery;
    use crate::derive::{Attribute, Reflect};
    use crate::meta::{self, AttributeError, ReflectAttributes};

    #[derive(Reflect, Attribute, Debug, PartialEq)]
    struct Color {
        name: &'static str,
    }

    #[derive(Reflect, Attribute, Debug, PartialEq)]
    struct Shade {
        #[attribute(base)]
        color: Color,
        depth: u8,
    }

    #[derive(Reflect, Attribute, Debug, PartialEq)]
    #[attribute(inherited = false)]
    struct Sealed;

    #[derive(Reflect)]
    enum Paint {
        #[reflect(@Color { name: "red" })]
        Red,
        #[reflect(@Shade { color: Color { name: "navy" }, depth: 3 })]
        Blue,
        Clear,
    }

    #[derive(Reflect)]
    struct Widget {
        #[reflect(@Color { name: "base" }, @Sealed)]
        tint: String,
        #[reflect(@"widget")]
        kind: String,
    }

    #[derive(Reflect)]
    struct Button {
        #[reflect(base)]
        widget: Widget,
        #[reflect(@Shade { color: Color { name: "button" }, depth: 1 })]
        tint: String,
    }

    fn button() -> Button {
        Button {
            widget: Widget {
                tint: String::new(),
                kind: String::new(),
            },
            tint: String::new(),
        }
    }

    #[test]
    fn enum_member_is_current_variant() {
        let query = AttributeQuery::new().member("anything");
        let colors = query.attributes_of::<Color>(&Paint::Red);
        assert_eq!(colors, [&Color { name: "red" }]);

        assert_eq!(query.member_info(&Paint::Clear).unwrap().name(), "Clear");
        assert!(query.attributes(&Paint::Clear).is_empty());
    }

    #[test]
    fn enum_with_empty_member_name() {
        let query = AttributeQuery::new();
        assert_eq!(query.attributes(&Paint::Red).len(), 1);
        assert!(AttributeQuery::new().attributes(&button()).is_empty());
    }

    #[test]
    fn null_target_is_empty() {
        let null: Option<Paint> = None;
        for inherited in [false, true] {
            let query = AttributeQuery::new().member("Red").inherited(inherited);
            assert!(query.attributes(&null).is_empty());
            assert!(query.attributes_of::<Color>(&null).is_empty());
            assert!(!query.has::<Color>(&null));
            assert!(query.attribute::<Color>(&null).is_none());
            assert!(query.member_info(&null).is_none());
        }
    }

    #[test]
    fn nullable_target_is_unwrapped() {
        let value = Some(Paint::Blue);
        let shade = AttributeQuery::new().attribute::<Shade>(&value).unwrap();
        assert_eq!(shade.depth, 3);
    }

    #[test]
    fn has_uses_assignability_only_when_inherited() {
        let target = Paint::Blue;
        let query = AttributeQuery::new();
        assert!(query.inherited(true).has::<Color>(&target));
        assert!(!query.inherited(false).has::<Color>(&target));
        assert!(query.inherited(false).has::<Shade>(&target));
    }

    #[test]
    fn attributes_of_yields_base_views() {
        let colors = AttributeQuery::new().attributes_of::<Color>(&Paint::Blue);
        assert_eq!(colors, [&Color { name: "navy" }]);
    }

    #[test]
    fn attribute_is_first_of_attributes_of() {
        let target = button();
        for inherited in [false, true] {
            let query = AttributeQuery::new().member("tint").inherited(inherited);
            let first = query.attributes_of::<Color>(&target).first().copied();
            assert_eq!(query.attribute::<Color>(&target), first);
        }
    }

    #[test]
    fn inherited_collects_overridden_members() {
        let target = button();
        let query = AttributeQuery::new().member("tint");

        let own: Vec<_> = query.attributes_of::<Color>(&target);
        assert_eq!(own, [&Color { name: "button" }]);

        let all = query.inherited(true).attributes_of::<Color>(&target);
        assert_eq!(all, [&Color { name: "button" }, &Color { name: "base" }]);

        // `Sealed` opts out of inheritance.
        assert!(!query.inherited(true).has::<Sealed>(&target));
        assert_eq!(query.inherited(true).attributes(&target).len(), 2);
    }

    #[test]
    fn base_members_are_found() {
        let target = button();
        let query = AttributeQuery::new().member("kind");
        assert_eq!(query.attribute::<&str>(&target), Some(&"widget"));
        assert!(
            query
                .member_info(&target)
                .unwrap()
                .declaring_type()
                .type_is::<Widget>()
        );
        assert!(query.attributes(&target).into_iter().all(meta::is_exact::<&str>));
    }

    #[test]
    fn required_attribute() {
        let target = button();
        let query = AttributeQuery::new().member("tint");
        assert_eq!(query.required::<Shade>(&target).unwrap().depth, 1);
        assert!(matches!(
            query.required::<Sealed>(&target),
            Err(AttributeError::Missing { .. })
        ));

        let widget = &target.widget;
        assert!(query.required::<Sealed>(widget).is_ok());
        assert_eq!(query.required::<Color>(widget).unwrap().name, "base");
    }

    #[test]
    fn required_attribute_accepts_derived_category() {
        let target = button();
        let query = AttributeQuery::new().member("tint");

        // `tint` only carries a `Shade`, which embeds a `Color`.
        let color = query.required::<Color>(&target).unwrap();
        assert_eq!(color, &Color { name: "button" });
        assert!(core::ptr::eq(
            color,
            &query.required::<Shade>(&target).unwrap().color
        ));
    }

    #[test]
    fn required_attribute_counts_derived_category() {
        #[derive(Reflect)]
        struct Swatch {
            #[reflect(@Color { name: "plain" }, @Shade { color: Color { name: "deep" }, depth: 2 })]
            fill: String,
        }

        let target = Swatch {
            fill: String::new(),
        };
        let query = AttributeQuery::new().member("fill");
        assert!(matches!(
            query.required::<Color>(&target),
            Err(AttributeError::Ambiguous { count: 2, .. })
        ));
        assert_eq!(query.required::<Shade>(&target).unwrap().depth, 2);
    }

    #[test]
    fn required_attribute_ambiguous() {
        #[derive(Reflect)]
        struct Labels {
            #[reflect(@"a", @"b")]
            text: String,
        }

        let target = Labels {
            text: String::new(),
        };
        let err = AttributeQuery::new()
            .member("text")
            .required::<&str>(&target)
            .unwrap_err();
        assert_eq!(
            err,
            AttributeError::Ambiguous {
                attribute: "&str",
                member: String::from("text"),
                count: 2,
            }
        );
    }

    #[test]
    fn extension_and_free_functions() {
        let target = button();
        assert!(target.has_property("kind"));
        assert!(!target.has_property("Red"));
        assert!(!Paint::Red.has_property("Red"));
        assert_eq!(target.display_name("tint"), Some("tint"));
        assert_eq!(Paint::Blue.display_name("ignored"), Some("Blue"));
        assert_eq!(
            meta::get_attributes_of::<Color>(&target, "tint", true).len(),
            2
        );
        assert!(meta::has_attribute::<Color>(&Paint::Blue, "", true));
        assert!(!target.has_member_attribute::<Sealed>("tint", false));
    }
}
