use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::TypeId;
use core::fmt;

use crate::Reflect;

// -----------------------------------------------------------------------------
// Attribute

/// A metadata record that can be attached to a type, field or variant.
///
/// The Rust type of an attribute is its *category*. A category may extend
/// another one by embedding it: the derived attribute is then *assignable*
/// to the base category, and [`as_category`](Attribute::as_category) yields
/// the embedded base value.
///
/// Implement it with [`#[derive(Attribute)]`](crate::derive::Attribute):
///
/// ```
/// use core::any::TypeId;
/// use fc_reflect::{Reflect, info::Attribute};
/// use fc_reflect::derive::{Attribute, Reflect};
///
/// #[derive(Reflect, Attribute)]
/// struct Validation {
///     message: &'static str,
/// }
///
/// #[derive(Reflect, Attribute)]
/// struct Range {
///     #[attribute(base)]
///     validation: Validation,
///     min: i64,
///     max: i64,
/// }
///
/// let range = Range {
///     validation: Validation { message: "out of range" },
///     min: 0,
///     max: 10,
/// };
///
/// let base = range.as_category(TypeId::of::<Validation>()).unwrap();
/// assert_eq!(base.downcast_ref::<Validation>().unwrap().message, "out of range");
/// assert!(range.as_category(TypeId::of::<Range>()).is_some());
/// assert!(range.as_category(TypeId::of::<u8>()).is_none());
/// ```
///
/// Primitive values such as `&'static str`, `bool` or `i32` are attributes
/// too, without any base category.
pub trait Attribute: Reflect {
    /// Returns this attribute viewed as the given category.
    ///
    /// Returns `self` when `category` is the attribute's own type, the
    /// embedded base value when `category` is one of its base categories,
    /// and `None` otherwise.
    fn as_category(&self, category: TypeId) -> Option<&dyn Reflect>;

    /// Returns `false` if the attribute must not be collected from base
    /// declarations during inherited lookup.
    #[inline]
    fn inheritable(&self) -> bool {
        true
    }
}

impl fmt::Debug for dyn Attribute {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

/// Returns `true` if `attribute` is assignable to the category `T`.
#[inline]
pub fn is_assignable<T: Reflect>(attribute: &dyn Attribute) -> bool {
    attribute.as_category(TypeId::of::<T>()).is_some()
}

/// Returns `true` if `attribute` is exactly of type `T`.
#[inline]
pub fn is_exact<T: Reflect>(attribute: &dyn Attribute) -> bool {
    attribute.ty_id() == TypeId::of::<T>()
}

// -----------------------------------------------------------------------------
// CustomAttributes

/// An ordered collection of custom attributes for a type, field, or variant.
///
/// These attributes can be created with [`#[derive(Reflect)]`](crate::derive::Reflect).
///
/// Attributes keep their declaration order, and several attributes of the
/// same type may coexist.
///
/// # Example
///
/// ```
/// # use fc_reflect::{derive::Reflect, info::Typed};
/// #[derive(Reflect)]
/// #[reflect(@false)]
/// struct Slider {
///     #[reflect(@"volume", @"master")]
///     value: f32,
///     name: String,
/// }
///
/// let info = Slider::type_info().as_struct().unwrap();
/// assert!(info.has_attribute::<bool>());
///
/// let field = info.field("value").unwrap();
/// assert!(!field.has_attribute::<i32>());
/// assert_eq!(*field.get_attribute::<&str>().unwrap(), "volume");
/// assert_eq!(field.custom_attributes().len(), 2);
///
/// let field = info.field("name").unwrap();
/// assert!(field.custom_attributes().is_empty());
/// ```
#[derive(Default)]
pub struct CustomAttributes {
    attributes: Vec<Box<dyn Attribute>>,
}

impl CustomAttributes {
    /// A static reference to an empty [`CustomAttributes`].
    ///
    /// Infos store custom attributes as `Option<Arc<..>>` so that members
    /// without attributes need no allocation.
    pub(crate) const EMPTY: &'static Self = &Self::new();

    /// Creates an empty [`CustomAttributes`].
    #[inline]
    pub const fn new() -> Self {
        Self {
            attributes: Vec::new(),
        }
    }

    /// Creates an empty [`CustomAttributes`] with specific capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            attributes: Vec::with_capacity(capacity),
        }
    }

    /// Appends an attribute.
    #[inline]
    pub fn with_attribute<T: Attribute>(mut self, value: T) -> Self {
        self.attributes.push(Box::new(value));
        self
    }

    /// Returns an iterator over the attributes in declaration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &dyn Attribute> {
        self.attributes.iter().map(|attr| &**attr)
    }

    /// Returns the first attribute of exactly type `T`.
    pub fn get<T: Reflect>(&self) -> Option<&T> {
        self.iter()
            .find(|attr| is_exact::<T>(*attr))
            .and_then(|attr| <dyn Reflect>::downcast_ref(attr))
    }

    /// Returns `true` if an attribute of exactly type `T` is present.
    #[inline]
    pub fn contains<T: Reflect>(&self) -> bool {
        self.iter().any(is_exact::<T>)
    }

    /// Returns every attribute assignable to the category `T`, viewed as `T`.
    ///
    /// ```
    /// # use fc_reflect::{derive::{Attribute, Reflect}, info::CustomAttributes};
    /// #[derive(Reflect, Attribute)]
    /// struct Hint {
    ///     text: &'static str,
    /// }
    ///
    /// #[derive(Reflect, Attribute)]
    /// struct Warning {
    ///     #[attribute(base)]
    ///     hint: Hint,
    /// }
    ///
    /// let attrs = CustomAttributes::new()
    ///     .with_attribute(Warning { hint: Hint { text: "careful" } })
    ///     .with_attribute(Hint { text: "plain" });
    ///
    /// let texts: Vec<_> = attrs.iter_category::<Hint>().map(|h| h.text).collect();
    /// assert_eq!(texts, ["careful", "plain"]);
    /// assert!(attrs.get::<Hint>().is_some_and(|h| h.text == "plain"));
    /// ```
    pub fn iter_category<T: Reflect>(&self) -> impl Iterator<Item = &T> {
        let category = TypeId::of::<T>();
        self.iter()
            .filter_map(move |attr| attr.as_category(category))
            .filter_map(<dyn Reflect>::downcast_ref::<T>)
    }

    /// Returns the number of stored attributes.
    #[inline]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns `true` if no attributes are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl fmt::Debug for CustomAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implement `custom_attributes` and some methods like `get_attribute`.
macro_rules! impl_custom_attributes_fn {
    ($field:ident) => {
        /// Returns the attached [`CustomAttributes`](crate::info::CustomAttributes).
        #[inline]
        pub fn custom_attributes(&self) -> &$crate::info::CustomAttributes {
            match &self.$field {
                Some(ptr) => &**ptr,
                None => $crate::info::CustomAttributes::EMPTY,
            }
        }

        $crate::info::impl_custom_attributes_fn!();
    };
    () => {
        /// Returns the first attribute of type `T`, if present.
        pub fn get_attribute<T: $crate::Reflect>(&self) -> Option<&T> {
            self.custom_attributes().get::<T>()
        }

        /// Returns `true` if it contains an attribute of type `T`.
        pub fn has_attribute<T: $crate::Reflect>(&self) -> bool {
            self.custom_attributes().contains::<T>()
        }
    };
}

/// Implement `with_custom_attributes`.
macro_rules! impl_with_custom_attributes {
    ($field:ident) => {
        /// Replaces stored attributes (overwrite, do not merge).
        ///
        /// Used by the proc-macro crate.
        pub fn with_custom_attributes(self, attributes: CustomAttributes) -> Self {
            if attributes.is_empty() {
                Self {
                    $field: None,
                    ..self
                }
            } else {
                Self {
                    $field: Some(Arc::new(attributes)),
                    ..self
                }
            }
        }
    };
}

pub(crate) use impl_custom_attributes_fn;
pub(crate) use impl_with_custom_attributes;
