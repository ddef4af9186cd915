use alloc::borrow::Cow;
use core::fmt;

use crate::Reflect;
use crate::ops::ReflectRef;

/// A single property name in a [`PropertyPath`](crate::access::PropertyPath),
/// with its byte offset in the source path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment<'a> {
    name: Cow<'a, str>,
    offset: usize,
}

impl<'a> Segment<'a> {
    /// Creates a new [`Segment`].
    #[inline]
    pub const fn new(name: Cow<'a, str>, offset: usize) -> Self {
        Self { name, offset }
    }

    /// Returns the property name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the byte offset of the segment in its path.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Converts to a segment that owns its name.
    #[inline]
    pub fn into_owned(self) -> Segment<'static> {
        Segment {
            name: Cow::Owned(self.name.into_owned()),
            offset: self.offset,
        }
    }
}

impl fmt::Display for Segment<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Splits `path` on `.`, yielding each name with its byte offset.
///
/// Always yields at least one item; an empty path yields one empty name.
pub(crate) fn split(path: &str) -> impl Iterator<Item = (&str, usize)> {
    let mut offset = 0;
    path.split('.').map(move |name| {
        let start = offset;
        offset += name.len() + 1;
        (name, start)
    })
}

/// Looks up the property `name` on `object`.
///
/// Fields declared on the struct come first, then the fields reachable
/// through its base declarations. Anything other than a struct has no
/// properties.
pub(crate) fn lookup<'r>(object: &'r dyn Reflect, name: &str) -> Option<&'r dyn Reflect> {
    let ReflectRef::Struct(value) = object.reflect_ref() else {
        return None;
    };
    if let Some(field) = value.field(name) {
        return Some(field);
    }
    let base = value.reflect_type_info().as_struct().ok()?.base_index()?;
    lookup(value.field_at(base)?, name)
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::split;

    #[test]
    fn split_offsets() {
        let parts: Vec<_> = split("ab.c..def").collect();
        assert_eq!(parts, [("ab", 0), ("c", 3), ("", 5), ("def", 6)]);
        assert_eq!(split("").collect::<Vec<_>>(), [("", 0)]);
    }
}
