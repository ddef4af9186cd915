use alloc::string::String;

use thiserror::Error;

/// An error returned by [`AttributeQuery::required`](crate::meta::AttributeQuery::required).
///
/// Every other attribute query treats absence as an empty result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AttributeError {
    /// No attribute of the requested type is declared on the member.
    #[error("member `{member}` has no `{attribute}` attribute")]
    Missing {
        /// Type path of the requested attribute.
        attribute: &'static str,
        /// The queried member name.
        member: String,
    },
    /// More than one attribute of the requested type is declared on the member.
    #[error("member `{member}` has {count} `{attribute}` attributes, expected one")]
    Ambiguous {
        /// Type path of the requested attribute.
        attribute: &'static str,
        /// The queried member name.
        member: String,
        /// Number of matching attributes.
        count: usize,
    },
}
