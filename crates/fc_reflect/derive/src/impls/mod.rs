// -----------------------------------------------------------------------------
// Modules

mod enum_kind;
mod struct_kind;
mod trait_attribute;
mod trait_reflect;
mod trait_type_path;
mod trait_typed;
mod unit_kind;

// -----------------------------------------------------------------------------
// Internal API

use trait_reflect::impl_trait_reflect;
use trait_type_path::impl_trait_type_path;
use trait_typed::impl_trait_typed;

pub(crate) use enum_kind::impl_enum;
pub(crate) use struct_kind::impl_struct;
pub(crate) use trait_attribute::impl_attribute;
pub(crate) use unit_kind::impl_unit;
