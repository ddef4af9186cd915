/// Implement `docs` and `with_docs`.
macro_rules! impl_docs_fn {
    ($field:ident) => {
        /// Returns the documentation string, if `reflect_docs` is enabled and
        /// docs are present.
        ///
        /// Always `None` without the `reflect_docs` feature.
        #[inline(always)]
        pub const fn docs(&self) -> Option<&'static str> {
            #[cfg(not(feature = "reflect_docs"))]
            return None;
            #[cfg(feature = "reflect_docs")]
            return self.$field;
        }

        /// Replaces docs (overwrite, do not merge).
        ///
        /// Used by the proc-macro crate.
        #[cfg(feature = "reflect_docs")]
        #[inline]
        pub fn with_docs(self, $field: Option<&'static str>) -> Self {
            Self { $field, ..self }
        }
    };
}

pub(crate) use impl_docs_fn;
