use thiserror::Error;

/// Errors that can occur while setting up token authentication
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenAuthError {
    /// The caller supplied a missing, empty or otherwise unusable argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl TokenAuthError {
    /// Returns `true` if this is an [`TokenAuthError::InvalidArgument`] error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, TokenAuthError::InvalidArgument(_))
    }
}

/// Result type alias for token authentication operations
pub type Result<T> = std::result::Result<T, TokenAuthError>;
