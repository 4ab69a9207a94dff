//! Error type for categorical selector parsing.
//!
//! The evaluation functions themselves are infallible: model selectors are
//! enums, so an illegal value cannot reach the arithmetic. Errors arise only
//! when parsing selector strings (e.g. from configuration) via `FromStr`.

use thiserror::Error;

/// Errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FragilityError {
    /// A categorical selector string did not match any legal value for its
    /// field. Raised before any arithmetic is attempted.
    #[error("invalid value {value:?} for selector {field:?}")]
    InvalidSelector {
        /// The selector field being parsed (e.g. `"moment"`, `"corr"`).
        field: &'static str,
        /// The offending input.
        value: String,
    },
}

impl FragilityError {
    pub(crate) fn invalid_selector(field: &'static str, value: &str) -> Self {
        Self::InvalidSelector {
            field,
            value: value.to_owned(),
        }
    }
}
