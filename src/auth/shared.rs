use crate::{Result, TokenAuthError};

/// Validate that a token was supplied at all
pub(super) fn require_token(token: Option<&str>) -> Result<&str> {
    token.ok_or_else(|| {
        TokenAuthError::InvalidArgument(
            "[github-token-auth] No token passed to create_token_auth".to_string(),
        )
    })
}

/// Validate token format
pub(super) fn validate_token(token: &str) -> Result<()> {
    if token.is_empty() {
        return Err(TokenAuthError::InvalidArgument(
            "[github-token-auth] Token passed to create_token_auth is an empty string".to_string(),
        ));
    }
    Ok(())
}
