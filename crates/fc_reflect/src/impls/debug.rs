use core::fmt;

use crate::ops::{Enum, Nullable, Struct};

/// A function used for implementing [`Reflect::reflect_debug`] on structs.
///
/// [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
pub fn struct_debug(dyn_struct: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(dyn_struct.reflect_type_name());
    for (index, field) in dyn_struct.iter_fields().enumerate() {
        let name = dyn_struct.name_at(index).unwrap_or("?");
        debug.field(name, &field as &dyn fmt::Debug);
    }
    debug.finish()
}

/// A function used for implementing [`Reflect::reflect_debug`] on enums.
///
/// [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
#[inline]
pub fn enum_debug(dyn_enum: &dyn Enum, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(dyn_enum.variant_name())
}

/// A function used for implementing [`Reflect::reflect_debug`] on nullable values.
///
/// Formats like `Option`: `None` or `Some(..)`.
///
/// [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
pub fn nullable_debug(dyn_nullable: &dyn Nullable, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match dyn_nullable.value() {
        Some(value) => f.debug_tuple("Some").field(&value as &dyn fmt::Debug).finish(),
        None => f.write_str("None"),
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use crate::Reflect;
    use crate::derive::Reflect;

    #[derive(Reflect)]
    enum Mode {
        Fast,
    }

    #[derive(Reflect)]
    struct Config {
        mode: Mode,
        retries: Option<u8>,
        name: Option<String>,
    }

    #[test]
    fn formats_by_kind() {
        let config = Config {
            mode: Mode::Fast,
            retries: Some(3),
            name: None,
        };
        let text = format!("{:?}", config.as_reflect());
        assert_eq!(text, "Config { mode: Fast, retries: Some(3), name: None }");
    }
}
