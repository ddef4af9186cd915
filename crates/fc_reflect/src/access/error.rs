use thiserror::Error;

/// An error returned from a failed property path resolution.
///
/// Borrows the path that was being resolved.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PathError<'a> {
    /// A null object was dereferenced while resolving `segment`.
    ///
    /// The null object is either an `Option::None`, a missing intermediate
    /// property, or the absence of any property to dereference (an empty path
    /// or an empty final segment).
    #[error("null reference while resolving `{segment}` at offset {offset}")]
    NullReference {
        /// The segment being resolved.
        segment: &'a str,
        /// Byte offset of the segment in the path.
        offset: usize,
    },
    /// The final property does not exist on the resolved parent.
    #[error("`{type_path}` has no property `{member}` (offset {offset})")]
    MemberNotFound {
        /// Type path of the parent object.
        type_path: &'static str,
        /// The missing property name.
        member: &'a str,
        /// Byte offset of the segment in the path.
        offset: usize,
    },
    /// The resolved value is not of the requested type.
    #[error("cannot downcast `{actual}` to `{expected}`")]
    InvalidDowncast {
        /// Type path of the requested type.
        expected: &'static str,
        /// Type path of the resolved value.
        actual: &'static str,
    },
}

impl PathError<'_> {
    /// Returns the byte offset of the failing segment, if any.
    #[inline]
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::NullReference { offset, .. } | Self::MemberNotFound { offset, .. } => {
                Some(*offset)
            }
            Self::InvalidDowncast { .. } => None,
        }
    }
}
