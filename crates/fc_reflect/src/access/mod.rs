//! Resolve dotted property paths on reflected values.
//!
//! A path such as `"order.customer.name"` is split on `.` and walked from a
//! root object, one property per segment:
//!
//! - Properties are the fields of a struct, then the fields of its
//!   `#[reflect(base)]` chain.
//! - `Option::None` is a null object, `Some(v)` stands for `v`.
//! - Dereferencing a null object fails with [`PathError::NullReference`].
//!   A missing intermediate property is a null object too, so that failure
//!   is reported at the next segment.
//! - A missing final property fails with [`PathError::MemberNotFound`].
//!
//! Two complementary APIs:
//!
//! - [`ReflectPropertyPath`]: parse-and-walk in a single call.
//! - [`PropertyPath`]: a parsed, reusable path.
//!
//! # Examples
//!
//! ```
//! use fc_reflect::{derive::Reflect, access::ReflectPropertyPath};
//!
//! #[derive(Reflect)]
//! struct Customer { name: String }
//!
//! #[derive(Reflect)]
//! struct Order { customer: Option<Customer> }
//!
//! let order = Order { customer: Some(Customer { name: "Ada".into() }) };
//! assert_eq!(order.resolve_as::<String>("customer.name").unwrap(), "Ada");
//! ```

// -----------------------------------------------------------------------------
// Modules

mod error;
mod property_path;
mod segment;

// -----------------------------------------------------------------------------
// Exports

pub use error::PathError;
pub use property_path::{PropertyPath, ReflectPropertyPath};
pub use segment::Segment;
