use alloc::boxed::Box;
use alloc::sync::Arc;

use fc_utils::hash::HashMap;

use crate::info::{CustomAttributes, Type, TypePath, VariantInfo};
use crate::info::{impl_custom_attributes_fn, impl_with_custom_attributes};
use crate::info::{impl_docs_fn, impl_type_fn};
use crate::ops::Enum;

/// A container for compile-time enum info.
///
/// Only fieldless enums are reflected, every variant is a named constant.
///
/// # Examples
///
/// ```rust
/// use fc_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// enum Status {
///     Draft,
///     Published,
/// }
///
/// let info = Status::type_info().as_enum().unwrap();
/// assert!(info.contains_variant("Draft"));
/// assert_eq!(info.index_of("Published"), Some(1));
/// assert_eq!(info.variant_len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct EnumInfo {
    ty: Type,
    variants: Box<[VariantInfo]>,
    variant_indices: HashMap<&'static str, usize>,
    custom_attributes: Option<Arc<CustomAttributes>>,
    #[cfg(feature = "reflect_docs")]
    docs: Option<&'static str>,
}

impl EnumInfo {
    impl_type_fn!(ty);
    impl_docs_fn!(docs);
    impl_custom_attributes_fn!(custom_attributes);
    impl_with_custom_attributes!(custom_attributes);

    /// Creates a new [`EnumInfo`].
    ///
    /// The order of internal variants is fixed, depends on the input order.
    pub fn new<TEnum: Enum + TypePath>(variants: &[VariantInfo]) -> Self {
        let variant_indices = variants
            .iter()
            .enumerate()
            .map(|(index, variant)| (variant.name(), index))
            .collect();

        Self {
            ty: Type::of::<TEnum>(),
            variants: variants.into(),
            variant_indices,
            custom_attributes: None,
            #[cfg(feature = "reflect_docs")]
            docs: None,
        }
    }

    /// Returns the [`VariantInfo`] for the given variant name, if present.
    pub fn variant(&self, name: &str) -> Option<&VariantInfo> {
        self.variants.get(*self.variant_indices.get(name)?)
    }

    /// Returns the [`VariantInfo`] at the given index, if present.
    #[inline]
    pub fn variant_at(&self, index: usize) -> Option<&VariantInfo> {
        self.variants.get(index)
    }

    /// Returns an iterator over the variants in **declaration order**.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &VariantInfo> {
        self.variants.iter()
    }

    /// Returns an iterator over the variant names in declaration order.
    #[inline]
    pub fn variant_names(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.variants.iter().map(VariantInfo::name)
    }

    /// Returns the index for the given variant `name`, if present.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.variant_indices.get(name).copied()
    }

    /// Returns `true` if a variant with the given name exists.
    #[inline]
    pub fn contains_variant(&self, name: &str) -> bool {
        self.variant_indices.contains_key(name)
    }

    /// Returns the number of variants.
    #[inline]
    pub fn variant_len(&self) -> usize {
        self.variants.len()
    }
}
