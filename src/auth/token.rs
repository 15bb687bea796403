use std::fmt;
use std::future::{self, Future};

use super::shared::*;
use crate::{classify_token, AuthStrategy, Authentication, Result, TokenType};

/// Create a token authentication strategy
///
/// The token is validated immediately: an empty string is rejected with
/// [`TokenAuthError::InvalidArgument`](crate::TokenAuthError::InvalidArgument)
/// before any [`TokenAuth`] exists.
///
/// # Example
///
/// ```
/// use github_token_auth::{create_token_auth, TokenType};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let auth = create_token_auth("v1.d3d433526f780fbcc3129004e2731b3904ad0b86")?;
/// let authentication = auth.auth().await;
///
/// assert_eq!(authentication.token_type(), TokenType::Installation);
/// assert_eq!(
///     authentication.headers().authorization(),
///     "token v1.d3d433526f780fbcc3129004e2731b3904ad0b86"
/// );
/// # Ok(())
/// # }
/// ```
pub fn create_token_auth(token: &str) -> Result<TokenAuth> {
    TokenAuth::new(token)
}

/// Token authentication strategy
///
/// Holds a validated token and produces an [`Authentication`] for it on
/// demand. Producing a descriptor is pure string work, so it can be called any
/// number of times, from any thread, and always yields an equal value.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenAuth {
    token: String,
    token_type: TokenType,
}

impl TokenAuth {
    /// Create a new token authentication strategy
    ///
    /// # Errors
    ///
    /// Returns [`TokenAuthError::InvalidArgument`](crate::TokenAuthError::InvalidArgument)
    /// if the token is empty
    pub fn new(token: &str) -> Result<Self> {
        validate_token(token)?;

        let token_type = classify_token(token);
        tracing::debug!(
            token_type = %token_type,
            token_len = token.len(),
            "created token authentication"
        );

        Ok(Self {
            token: token.to_string(),
            token_type,
        })
    }

    /// Create a token authentication strategy from a token that may be absent
    ///
    /// Useful when the token comes from an optional source such as a config
    /// field. `None` and `Some("")` are both rejected.
    ///
    /// # Errors
    ///
    /// Returns [`TokenAuthError::InvalidArgument`](crate::TokenAuthError::InvalidArgument)
    /// if the token is missing or empty
    pub fn from_optional(token: Option<&str>) -> Result<Self> {
        Self::new(require_token(token)?)
    }

    /// Type of the captured token
    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    /// Build the authentication descriptor synchronously
    pub fn authentication(&self) -> Authentication {
        tracing::trace!(token_type = %self.token_type, "producing token authentication");
        Authentication::new(&self.token, self.token_type)
    }

    /// Produce the authentication descriptor
    ///
    /// This never waits on anything; it is `async` so that it can be used
    /// interchangeably with strategies that need network access.
    pub async fn auth(&self) -> Authentication {
        self.authentication()
    }
}

impl AuthStrategy for TokenAuth {
    fn auth(&self) -> impl Future<Output = Result<Authentication>> + Send {
        future::ready(Ok(self.authentication()))
    }
}

// Keep the token itself out of logs and panic messages
impl fmt::Debug for TokenAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenAuth")
            .field("token", &"[redacted]")
            .field("token_type", &self.token_type)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_token() {
        let err = create_token_auth("").unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn rejects_missing_token() {
        assert!(TokenAuth::from_optional(None).unwrap_err().is_invalid_argument());
        assert!(TokenAuth::from_optional(Some("")).unwrap_err().is_invalid_argument());
        assert!(TokenAuth::from_optional(Some("secret123")).is_ok());
    }

    #[test]
    fn classifies_at_creation() {
        let auth = create_token_auth("v1.d3d433526f780fbcc3129004e2731b3904ad0b86").unwrap();
        assert_eq!(auth.token_type(), TokenType::Installation);

        let auth = create_token_auth("secret123").unwrap();
        assert_eq!(auth.token_type(), TokenType::OAuth);
    }

    #[test]
    fn authentication_is_idempotent() {
        let auth = create_token_auth("secret123").unwrap();
        assert_eq!(auth.authentication(), auth.authentication());
    }

    #[test]
    fn debug_redacts_token() {
        let auth = create_token_auth("secret123").unwrap();
        let debug = format!("{:?}", auth);
        assert!(!debug.contains("secret123"));
        assert!(debug.contains("OAuth"));
    }
}
