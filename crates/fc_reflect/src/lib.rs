#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Derive output names `::fc_reflect`, which has to resolve inside this crate
// too (unit tests and doc tests).
extern crate self as fc_reflect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod access;
pub mod impls;
pub mod info;
pub mod meta;
pub mod ops;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use fc_reflect_derive as derive;
pub use reflection::Reflect;
