use alloc::boxed::Box;
use alloc::sync::Arc;

use fc_utils::hash::HashMap;

use crate::info::{CustomAttributes, NamedField, Type, TypeInfo, TypePath};
use crate::info::{impl_custom_attributes_fn, impl_with_custom_attributes};
use crate::info::{impl_docs_fn, impl_type_fn};
use crate::ops::Struct;

/// A container for compile-time named struct info.
///
/// A struct may declare one of its fields as its *base*. Members of the
/// base struct are then visible as members of this struct, see
/// [`TypeInfo::member`].
///
/// # Examples
///
/// ```rust
/// use fc_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Entity {
///     id: u64,
/// }
///
/// #[derive(Reflect)]
/// struct User {
///     #[reflect(base)]
///     entity: Entity,
///     name: String,
/// }
///
/// let info = <User as Typed>::type_info().as_struct().unwrap();
///
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.index_of("name"), Some(1));
/// assert_eq!(info.base_field().map(|f| f.name()), Some("entity"));
/// assert!(info.base_info().unwrap().type_is::<Entity>());
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[NamedField]>,
    field_indices: HashMap<&'static str, usize>,
    base: Option<usize>,
    custom_attributes: Option<Arc<CustomAttributes>>,
    #[cfg(feature = "reflect_docs")]
    docs: Option<&'static str>,
}

impl StructInfo {
    impl_docs_fn!(docs);
    impl_type_fn!(ty);
    impl_custom_attributes_fn!(custom_attributes);
    impl_with_custom_attributes!(custom_attributes);

    /// Create a new [`StructInfo`].
    ///
    /// The order of internal fields is fixed, depends on the input order.
    pub fn new<T: Struct + TypePath>(fields: &[NamedField]) -> Self {
        let field_indices = fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.name(), index))
            .collect();

        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
            field_indices,
            base: None,
            custom_attributes: None,
            #[cfg(feature = "reflect_docs")]
            docs: None,
        }
    }

    /// Marks the field `name` as the base declaration of this struct.
    ///
    /// Unknown names leave the struct without a base.
    ///
    /// Used by the proc-macro crate.
    pub fn with_base(self, name: &str) -> Self {
        let base = self.index_of(name);
        Self { base, ..self }
    }

    /// Returns the [`NamedField`] for the given `name`, if present.
    ///
    /// Only fields declared on this struct are searched.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.get(*self.field_indices.get(name)?)
    }

    /// Returns the [`NamedField`] at the given index, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Returns an iterator over the fields in **declaration order**.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        self.fields.iter()
    }

    /// Returns an iterator over the field names in declaration order.
    #[inline]
    pub fn field_names(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.fields.iter().map(NamedField::name)
    }

    /// Returns the index for the given field `name`, if present.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_indices.get(name).copied()
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Returns the index of the base field, if the struct declares one.
    #[inline]
    pub const fn base_index(&self) -> Option<usize> {
        self.base
    }

    /// Returns the field holding the base declaration, if any.
    #[inline]
    pub fn base_field(&self) -> Option<&NamedField> {
        self.fields.get(self.base?)
    }

    /// Returns the [`TypeInfo`] of the base declaration, if any.
    #[inline]
    pub fn base_info(&self) -> Option<&'static TypeInfo> {
        self.base_field().map(NamedField::type_info)
    }
}
