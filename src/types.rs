use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::TokenAuthError;

/// Scheme prefix used for the `authorization` header, whatever the token type
pub(crate) const AUTHORIZATION_SCHEME: &str = "token";

/// Kind of GitHub token, as inferred from its shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// Personal access token or OAuth token
    OAuth,
    /// GitHub App installation token or CI-provided action token
    Installation,
}

impl TokenType {
    /// The lowercase tag for this token type (`"oauth"` or `"installation"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::OAuth => "oauth",
            TokenType::Installation => "installation",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenType {
    type Err = TokenAuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "oauth" => Ok(TokenType::OAuth),
            "installation" => Ok(TokenType::Installation),
            other => Err(TokenAuthError::InvalidArgument(format!(
                "unknown token type: {:?}",
                other
            ))),
        }
    }
}

/// Authentication strategy tag carried by every descriptor
///
/// Only the token strategy exists in this crate; the tag lets consumers that
/// juggle several strategies tell descriptors apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthenticationType {
    Token,
}

/// Request headers contributed by an [`Authentication`]
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AuthHeaders {
    authorization: String,
}

impl AuthHeaders {
    /// Value of the `authorization` header, e.g. `"token ghp_..."`
    pub fn authorization(&self) -> &str {
        &self.authorization
    }

    /// Iterate over `(name, value)` pairs, ready to be merged into a request
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        std::iter::once(("authorization", self.authorization.as_str()))
    }
}

/// Authentication descriptor for a single token
///
/// Serializes to
/// `{"type":"token","token":…,"tokenType":…,"headers":{"authorization":…},"query":{}}`.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Authentication {
    #[serde(rename = "type")]
    auth_type: AuthenticationType,
    token: String,
    token_type: TokenType,
    headers: AuthHeaders,
    query: BTreeMap<String, String>,
}

impl Authentication {
    pub(crate) fn new(token: &str, token_type: TokenType) -> Self {
        Self {
            auth_type: AuthenticationType::Token,
            token: token.to_string(),
            token_type,
            headers: AuthHeaders {
                authorization: format!("{} {}", AUTHORIZATION_SCHEME, token),
            },
            query: BTreeMap::new(),
        }
    }

    /// Strategy tag, always [`AuthenticationType::Token`]
    pub fn auth_type(&self) -> AuthenticationType {
        self.auth_type
    }

    /// The token exactly as it was supplied
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    pub fn headers(&self) -> &AuthHeaders {
        &self.headers
    }

    /// Query parameters to add to requests; always empty for token auth
    pub fn query(&self) -> &BTreeMap<String, String> {
        &self.query
    }
}

// Tokens and the headers carrying them stay out of logs and panic messages
impl fmt::Debug for AuthHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthHeaders")
            .field("authorization", &"token [redacted]")
            .finish()
    }
}

impl fmt::Debug for Authentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authentication")
            .field("type", &self.auth_type)
            .field("token", &"[redacted]")
            .field("token_type", &self.token_type)
            .field("headers", &self.headers)
            .field("query", &self.query)
            .finish()
    }
}
