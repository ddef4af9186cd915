use alloc::sync::Arc;

use crate::info::{CustomAttributes, impl_docs_fn};
use crate::info::{impl_custom_attributes_fn, impl_with_custom_attributes};

/// Information for a unit enum variant, the declared constant of an enum.
///
/// # Examples
///
/// ```
/// use fc_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// enum Level {
///     Low,
///     #[reflect(@"!")]
///     High,
/// }
///
/// let info = Level::type_info().as_enum().unwrap();
/// let high = info.variant("High").unwrap();
///
/// assert_eq!(high.name(), "High");
/// assert_eq!(high.get_attribute::<&str>(), Some(&"!"));
/// assert!(info.variant_at(0).unwrap().custom_attributes().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct VariantInfo {
    name: &'static str,
    custom_attributes: Option<Arc<CustomAttributes>>,
    #[cfg(feature = "reflect_docs")]
    docs: Option<&'static str>,
}

impl VariantInfo {
    impl_docs_fn!(docs);
    impl_custom_attributes_fn!(custom_attributes);
    impl_with_custom_attributes!(custom_attributes);

    /// Creates a new [`VariantInfo`].
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            custom_attributes: None,
            #[cfg(feature = "reflect_docs")]
            docs: None,
        }
    }

    /// Returns the variant name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}
