//! Errors raised when a builder or widget precondition is violated.

use facet::Facet;

/// Errors that can occur while building or rendering markup.
///
/// All of them are argument or configuration checks: nothing is rendered
/// when one is returned.
#[derive(Facet, Debug, PartialEq)]
#[facet(derive(Error))]
#[repr(u8)]
pub enum Error {
    /// argument `{argument}` must not be empty
    InvalidArgument { argument: String },

    /// at least one field must be configured to enable sorting
    NoSortingFields,

    /// sorting info must be provided before rendering
    MissingSortingInfo,

    /// a url generator for {target} must be configured before rendering
    MissingUrlGenerator { target: String },

    /// name of collection must be provided before rendering
    MissingCollectionName,

    /// route value `{key}` is not available
    MissingRouteValue { key: String },

    /// could not serialize to JSON: {reason}
    Serialization { reason: String },
}

impl Error {
    pub(crate) fn invalid_argument(argument: &str) -> Self {
        Error::InvalidArgument {
            argument: argument.to_owned(),
        }
    }
}

/// Result alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Fails with [`Error::InvalidArgument`] when `value` is empty.
pub(crate) fn require_non_empty(value: &str, argument: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::invalid_argument(argument));
    }
    Ok(())
}
