use crate::Reflect;

/// A trait for type-erased operations on fieldless enums.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect) on enums
/// whose variants are all units.
///
/// # Examples
///
/// ```
/// use fc_reflect::{derive::Reflect, ops::Enum};
///
/// #[derive(Reflect)]
/// enum Direction {
///     North,
///     South,
/// }
///
/// let value: &dyn Enum = &Direction::South;
/// assert_eq!(value.variant_name(), "South");
/// assert_eq!(value.variant_index(), 1);
/// ```
pub trait Enum: Reflect {
    /// Returns the name of the current variant.
    fn variant_name(&self) -> &str;

    /// Returns the declaration index of the current variant.
    fn variant_index(&self) -> usize;
}
