use crate::Reflect;

/// A value that may be null.
///
/// Implemented for `Option<T>`: `None` is the null value and `Some(v)`
/// stands for `v`.
///
/// # Examples
///
/// ```
/// use fc_reflect::ops::Nullable;
///
/// let value: &dyn Nullable = &Some(5_i16);
/// assert_eq!(value.value().unwrap().downcast_ref::<i16>(), Some(&5));
///
/// let null: &dyn Nullable = &None::<i16>;
/// assert!(null.is_null());
/// ```
pub trait Nullable: Reflect {
    /// Returns the held value, `None` if null.
    fn value(&self) -> Option<&dyn Reflect>;

    /// Returns `true` if no value is held.
    #[inline]
    fn is_null(&self) -> bool {
        self.value().is_none()
    }
}
