use alloc::boxed::Box;
use core::fmt;
use core::iter::Peekable;

use crate::Reflect;
use crate::access::segment::{lookup, split};
use crate::access::{PathError, Segment};
use crate::info::TypePath;
use crate::ops::Struct;

// -----------------------------------------------------------------------------
// Walk

/// Walks `segments` from `root`.
///
/// Intermediate segments that name no property produce a null marker; the
/// failure surfaces as [`PathError::NullReference`] when the next segment
/// dereferences it. The final segment is resolved once, against the last
/// non-null parent.
fn walk<'r, 'p, I>(root: &'r dyn Reflect, segments: I) -> Result<&'r dyn Reflect, PathError<'p>>
where
    I: Iterator<Item = (&'p str, usize)>,
{
    let mut segments: Peekable<I> = segments.peekable();
    let mut parent: Option<&'r dyn Reflect> = Some(root);

    while let Some((name, offset)) = segments.next() {
        let Some(object) = parent.and_then(<dyn Reflect>::dereference) else {
            return Err(PathError::NullReference {
                segment: name,
                offset,
            });
        };

        if segments.peek().is_some() {
            parent = lookup(object, name);
            continue;
        }

        // The final segment needs a property to read; an empty name has none.
        if name.is_empty() {
            return Err(PathError::NullReference {
                segment: name,
                offset,
            });
        }
        return lookup(object, name).ok_or(PathError::MemberNotFound {
            type_path: object.reflect_type_path(),
            member: name,
            offset,
        });
    }

    // `split` and `PropertyPath` always yield at least one segment.
    Err(PathError::NullReference {
        segment: "",
        offset: 0,
    })
}

fn downcast<'r, 'p, T: Reflect + TypePath>(
    value: &'r dyn Reflect,
) -> Result<&'r T, PathError<'p>> {
    value
        .downcast_ref::<T>()
        .ok_or_else(|| PathError::InvalidDowncast {
            expected: T::type_path(),
            actual: value.reflect_type_path(),
        })
}

#[inline(never)]
fn log_failure(root: &dyn Reflect, path: &dyn fmt::Display, err: &PathError<'_>) {
    log::debug!(
        "failed to resolve `{path}` on `{}`: {err}",
        root.reflect_type_path()
    );
}

// -----------------------------------------------------------------------------
// PropertyPath

/// A parsed, reusable dotted property path, e.g. `"customer.address.city"`.
///
/// Unlike [`ReflectPropertyPath`], the path is split only once.
///
/// # Examples
///
/// ```
/// use fc_reflect::{derive::Reflect, access::PropertyPath};
///
/// #[derive(Reflect)]
/// struct Address {
///     city: String,
/// }
///
/// #[derive(Reflect)]
/// struct Customer {
///     address: Option<Address>,
/// }
///
/// let path = PropertyPath::parse("address.city");
/// assert_eq!(path.len(), 2);
///
/// let customer = Customer {
///     address: Some(Address { city: "Lyon".into() }),
/// };
/// assert_eq!(path.resolve_as::<String>(&customer).unwrap(), "Lyon");
///
/// let nobody = Customer { address: None };
/// assert!(path.resolve(&nobody).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyPath<'a>(Box<[Segment<'a>]>);

impl<'a> PropertyPath<'a> {
    /// Splits `path` on `.`.
    ///
    /// Parsing never fails; an empty path or empty segments fail on
    /// resolution instead.
    pub fn parse(path: &'a str) -> Self {
        Self(
            split(path)
                .map(|(name, offset)| Segment::new(name.into(), offset))
                .collect(),
        )
    }

    /// Converts to a path that owns its segment names.
    pub fn into_owned(self) -> PropertyPath<'static> {
        PropertyPath(self.0.into_iter().map(Segment::into_owned).collect())
    }

    /// Returns the segments in path order.
    #[inline]
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.0
    }

    /// Returns the number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the value of the final property.
    ///
    /// The path itself does not change and can be reused.
    pub fn resolve<'r>(&self, root: &'r dyn Reflect) -> Result<&'r dyn Reflect, PathError<'_>> {
        let segments = self.0.iter().map(|seg| (seg.name(), seg.offset()));
        walk(root, segments).inspect_err(|err| log_failure(root, self, err))
    }

    /// Returns the value of the final property, downcast to `T`.
    #[inline]
    pub fn resolve_as<'r, T: Reflect + TypePath>(
        &self,
        root: &'r dyn Reflect,
    ) -> Result<&'r T, PathError<'_>> {
        downcast(self.resolve(root)?)
    }
}

impl<'a> From<&'a str> for PropertyPath<'a> {
    #[inline]
    fn from(path: &'a str) -> Self {
        Self::parse(path)
    }
}

impl fmt::Display for PropertyPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            fmt::Display::fmt(segment, f)?;
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// ReflectPropertyPath

/// Resolve a dotted property path in a single call.
///
/// The path is split during resolution without any allocation. For a path
/// used many times, consider [`PropertyPath`].
///
/// # Examples
///
/// ```
/// use fc_reflect::{derive::Reflect, access::{PathError, ReflectPropertyPath}};
///
/// #[derive(Reflect)]
/// struct Engine {
///     power: u32,
/// }
///
/// #[derive(Reflect)]
/// struct Car {
///     engine: Engine,
///     trailer: Option<Engine>,
/// }
///
/// let car = Car { engine: Engine { power: 90 }, trailer: None };
///
/// assert_eq!(car.resolve_as::<u32>("engine.power"), Ok(&90));
///
/// // A null final value is a value.
/// assert!(car.resolve("trailer").is_ok());
///
/// assert_eq!(
///     car.resolve("trailer.power").unwrap_err(),
///     PathError::NullReference { segment: "power", offset: 8 },
/// );
/// assert!(matches!(
///     car.resolve("engine.torque"),
///     Err(PathError::MemberNotFound { member: "torque", .. }),
/// ));
/// ```
pub trait ReflectPropertyPath {
    /// Returns the value of the final property named by `path`.
    fn resolve<'a, 'p>(&'a self, path: &'p str) -> Result<&'a dyn Reflect, PathError<'p>>;

    /// Returns the value of the final property named by `path`, downcast
    /// to `T`.
    fn resolve_as<'a, 'p, T: Reflect + TypePath>(
        &'a self,
        path: &'p str,
    ) -> Result<&'a T, PathError<'p>>;
}

impl ReflectPropertyPath for dyn Reflect {
    #[inline(never)]
    fn resolve<'a, 'p>(&'a self, path: &'p str) -> Result<&'a dyn Reflect, PathError<'p>> {
        walk(self, split(path)).inspect_err(|err| log_failure(self, &path, err))
    }

    #[inline]
    fn resolve_as<'a, 'p, T: Reflect + TypePath>(
        &'a self,
        path: &'p str,
    ) -> Result<&'a T, PathError<'p>> {
        // Not Inline `resolve`: it is compiled once, independent of T.
        downcast(ReflectPropertyPath::resolve(self, path)?)
    }
}

macro_rules! impl_reflect_property_path {
    () => {
        #[inline(always)]
        fn resolve<'a, 'p>(&'a self, path: &'p str) -> Result<&'a dyn Reflect, PathError<'p>> {
            <dyn Reflect as ReflectPropertyPath>::resolve(self, path)
        }

        #[inline(always)]
        fn resolve_as<'a, 'p, T: Reflect + TypePath>(
            &'a self,
            path: &'p str,
        ) -> Result<&'a T, PathError<'p>> {
            <dyn Reflect as ReflectPropertyPath>::resolve_as::<T>(self, path)
        }
    };
    (dyn $name:ident) => {
        impl ReflectPropertyPath for dyn $name {
            impl_reflect_property_path!();
        }
    };
    (T: $name:ident) => {
        impl<P: Sized + $name> ReflectPropertyPath for P {
            impl_reflect_property_path!();
        }
    };
}

impl_reflect_property_path!(T: Reflect);
impl_reflect_property_path!(dyn Struct);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::{PropertyPath, ReflectPropertyPath};
    use crate::Reflect;
    use crate::access::PathError;
    use crate::derive::Reflect;
    use crate::info::TypePath;

    #[derive(Reflect)]
    struct Node {
        label: String,
        next: Option<Leaf>,
    }

    #[derive(Reflect)]
    struct Leaf {
        weight: u32,
        tag: Option<String>,
    }

    #[derive(Reflect)]
    struct Entity {
        id: u64,
    }

    #[derive(Reflect)]
    struct Player {
        #[reflect(base)]
        entity: Entity,
        node: Node,
    }

    fn sample() -> Node {
        Node {
            label: String::from("root"),
            next: Some(Leaf {
                weight: 7,
                tag: None,
            }),
        }
    }

    #[test]
    fn matches_direct_access() {
        let node = sample();
        assert_eq!(node.resolve_as::<String>("label"), Ok(&node.label));
        let weight = node.resolve_as::<u32>("next.weight").unwrap();
        assert!(core::ptr::eq(weight, &node.next.as_ref().unwrap().weight));
    }

    #[test]
    fn null_final_value_is_returned() {
        let node = sample();
        let tag = node.resolve("next.tag").unwrap();
        assert!(tag.is::<Option<String>>());
    }

    #[test]
    fn empty_path_is_null_reference() {
        let node = sample();
        assert_eq!(
            node.resolve("").unwrap_err(),
            PathError::NullReference {
                segment: "",
                offset: 0
            }
        );
        assert_eq!(
            node.resolve("next.").unwrap_err(),
            PathError::NullReference {
                segment: "",
                offset: 5
            }
        );
    }

    #[test]
    fn null_intermediate() {
        let node = Node {
            label: String::new(),
            next: None,
        };
        assert_eq!(
            node.resolve("next.weight").unwrap_err(),
            PathError::NullReference {
                segment: "weight",
                offset: 5
            }
        );
    }

    #[test]
    fn missing_intermediate_fails_on_next_segment() {
        let node = sample();
        assert_eq!(
            node.resolve("prev.weight.value").unwrap_err(),
            PathError::NullReference {
                segment: "weight",
                offset: 5
            }
        );
    }

    #[test]
    fn missing_final_member() {
        let node = sample();
        assert_eq!(
            node.resolve("next.height").unwrap_err(),
            PathError::MemberNotFound {
                type_path: Leaf::type_path(),
                member: "height",
                offset: 5
            }
        );
    }

    #[test]
    fn null_root() {
        let root: Option<Node> = None;
        assert!(matches!(
            root.resolve("label"),
            Err(PathError::NullReference { segment: "label", .. })
        ));
        let root = Some(sample());
        assert!(root.resolve_as::<String>("label").is_ok());
    }

    #[test]
    fn base_properties() {
        let player = Player {
            entity: Entity { id: 42 },
            node: sample(),
        };
        assert_eq!(player.resolve_as::<u64>("id"), Ok(&42));
        assert_eq!(player.resolve_as::<u32>("node.next.weight"), Ok(&7));
    }

    #[test]
    fn invalid_downcast() {
        let node = sample();
        assert_eq!(
            node.resolve_as::<u8>("next.weight").unwrap_err(),
            PathError::InvalidDowncast {
                expected: "u8",
                actual: "u32"
            }
        );
    }

    #[test]
    fn reusable_path() {
        let path = PropertyPath::parse("next.weight").into_owned();
        assert_eq!(path.to_string(), "next.weight");

        let mut node = sample();
        assert_eq!(path.resolve_as::<u32>(&node), Ok(&7));
        node.next = None;
        assert!(path.resolve(&node).is_err());
    }

    #[test]
    fn resolve_through_dyn() {
        let node = sample();
        let value: &dyn Reflect = &node;
        assert_eq!(value.resolve_as::<u32>("next.weight"), Ok(&7));
    }
}
