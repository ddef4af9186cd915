use core::iter::FusedIterator;

use crate::Reflect;

// -----------------------------------------------------------------------------
// Struct trait

/// A trait for type-erased struct operations via reflection.
///
/// When using [`#[derive(Reflect)]`](crate::derive::Reflect) on a struct with
/// named fields, this trait will be automatically implemented.
///
/// # Note
///
/// This includes `struct T{}`, but not `struct T;`.
/// The latter is reflected as an [`Opaque`](crate::info::OpaqueInfo) type.
///
/// # Examples
///
/// ```
/// use fc_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Foo {
///     a: i32,
///     b: bool,
/// }
///
/// let foo = Foo { a: 10_i32, b: true };
/// let foo_ref: &dyn Struct = &foo;
///
/// assert_eq!(foo_ref.field_len(), 2);
/// assert_eq!(foo_ref.field("a").unwrap().downcast_ref::<i32>(), Some(&10));
/// assert_eq!(foo_ref.name_at(1), Some("b"));
/// ```
pub trait Struct: Reflect {
    /// Returns a reference to the value of the field named `name`.
    ///
    /// Only fields declared on the struct itself are visible here.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns a reference to the value of the field at `index`.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the name of the field at `index`.
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Returns the number of fields in the struct.
    fn field_len(&self) -> usize;

    /// Returns an iterator over the values of the struct's fields.
    fn iter_fields(&self) -> StructFieldIter<'_>;
}

// -----------------------------------------------------------------------------
// StructFieldIter

/// An iterator over the field values of a struct.
pub struct StructFieldIter<'a> {
    value: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    /// Creates a new [`StructFieldIter`].
    #[inline(always)]
    pub const fn new(value: &'a dyn Struct) -> Self {
        StructFieldIter { value, index: 0 }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.value.field_at(self.index);
        if value.is_some() {
            self.index += 1;
        }
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.value.field_len() - self.index;
        (size, Some(size))
    }
}

impl FusedIterator for StructFieldIter<'_> {}

impl ExactSizeIterator for StructFieldIter<'_> {}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::Struct;
    use crate::derive::Reflect;
    use crate::info::Typed;

    #[derive(Reflect)]
    struct Sample {
        id: u32,
        #[reflect(ignore)]
        _scratch: Vec<u8>,
        label: String,
    }

    fn sample() -> Sample {
        Sample {
            id: 7,
            _scratch: Vec::new(),
            label: String::from("seven"),
        }
    }

    #[test]
    fn derived_field_access() {
        let value = sample();
        let value: &dyn Struct = &value;

        assert_eq!(value.field_len(), 2);
        assert_eq!(value.field("id").unwrap().downcast_ref::<u32>(), Some(&7));
        assert!(value.field("_scratch").is_none());
        assert!(value.field("missing").is_none());

        assert_eq!(value.name_at(0), Some("id"));
        assert_eq!(value.name_at(1), Some("label"));
        assert_eq!(value.name_at(2), None);
        assert!(value.field_at(1).unwrap().is::<String>());
        assert!(value.field_at(2).is_none());
    }

    #[test]
    fn derived_field_iter() {
        let value = sample();
        let iter = value.iter_fields();
        assert_eq!(iter.len(), 2);

        let names: Vec<_> = iter.map(|field| field.reflect_type_path()).collect();
        assert_eq!(names, ["u32", "alloc::string::String"]);

        let info = Sample::type_info().as_struct().unwrap();
        assert_eq!(info.field_names().collect::<Vec<_>>(), ["id", "label"]);
    }
}
