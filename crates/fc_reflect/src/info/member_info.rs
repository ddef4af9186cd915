use crate::info::{CustomAttributes, NamedField, TypeInfo, VariantInfo};

// -----------------------------------------------------------------------------
// Member

/// A member of a reflected type: a struct field or an enum variant.
#[derive(Debug, Clone, Copy)]
pub enum Member {
    Field(&'static NamedField),
    Variant(&'static VariantInfo),
}

impl Member {
    /// Returns the member name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Field(field) => field.name(),
            Self::Variant(variant) => variant.name(),
        }
    }

    /// Returns the attributes declared on the member.
    #[inline]
    pub fn custom_attributes(&self) -> &'static CustomAttributes {
        match *self {
            Self::Field(field) => field.custom_attributes(),
            Self::Variant(variant) => variant.custom_attributes(),
        }
    }
}

// -----------------------------------------------------------------------------
// MemberInfo

/// A located member together with the type that declares it.
///
/// Returned by [`TypeInfo::member`]. For an inherited field the declaring
/// type is the base struct, not the queried one.
///
/// # Examples
///
/// ```
/// use fc_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Shape {
///     #[reflect(@"px")]
///     width: u32,
/// }
///
/// #[derive(Reflect)]
/// struct Button {
///     #[reflect(base)]
///     shape: Shape,
///     label: String,
/// }
///
/// let member = Button::type_info().member("width").unwrap();
/// assert_eq!(member.name(), "width");
/// assert!(member.declaring_type().type_is::<Shape>());
/// assert_eq!(member.get_attribute::<&str>(), Some(&"px"));
///
/// assert!(Button::type_info().member("height").is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MemberInfo {
    member: Member,
    declaring_type: &'static TypeInfo,
}

impl MemberInfo {
    /// Creates a new [`MemberInfo`].
    #[inline]
    pub const fn new(member: Member, declaring_type: &'static TypeInfo) -> Self {
        Self {
            member,
            declaring_type,
        }
    }

    /// Returns the member itself.
    #[inline]
    pub const fn member(&self) -> Member {
        self.member
    }

    /// Returns the member name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.member.name()
    }

    /// Returns the type that declares this member.
    #[inline]
    pub const fn declaring_type(&self) -> &'static TypeInfo {
        self.declaring_type
    }

    /// Returns the field, if the member is a struct field.
    #[inline]
    pub const fn as_field(&self) -> Option<&'static NamedField> {
        match self.member {
            Member::Field(field) => Some(field),
            Member::Variant(_) => None,
        }
    }

    /// Returns the variant, if the member is an enum variant.
    #[inline]
    pub const fn as_variant(&self) -> Option<&'static VariantInfo> {
        match self.member {
            Member::Variant(variant) => Some(variant),
            Member::Field(_) => None,
        }
    }

    /// Returns the attributes declared on the member.
    #[inline]
    pub fn custom_attributes(&self) -> &'static CustomAttributes {
        self.member.custom_attributes()
    }

    crate::info::impl_custom_attributes_fn!();
}
