use crate::text::StoreError;
use thiserror::Error;

/// Result type for metadata operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the dragon-meta library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("duplicate item name(s): {}", .names.join(", "))]
    DuplicateName { names: Vec<String> },

    #[error("item '{item}' is not declared as {expected} with the requested value")]
    TypeMismatch { item: String, expected: &'static str },

    #[error("item not found: {0}")]
    KeyNotFound(String),

    #[error("string store error: {0}")]
    Store(#[from] StoreError),
}

impl Error {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
