//! # github-token-auth
//!
//! GitHub token authentication strategy: turns a bare token string into an
//! authentication descriptor carrying a ready-to-use `authorization` header.
//!
//! The library does no network I/O. It only looks at the shape of the token to
//! tell installation tokens (`v1.<40 hex chars>`) from personal access and
//! OAuth tokens, and builds the header value `"token <token>"` for either.
//!
//! ## Features
//!
//! - **Token classification**: [`classify_token`] sniffs the token shape
//! - **Async strategy interface**: [`TokenAuth::auth`] and the [`AuthStrategy`] trait
//! - **Request hook** (optional, `reqwest` feature): apply the headers to a
//!   `reqwest::RequestBuilder`
//!
//! ## Quick Start
//!
//! ```
//! use github_token_auth::{create_token_auth, TokenType};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let auth = create_token_auth("1234567890abcdef1234567890abcdef12345678")?;
//! let authentication = auth.auth().await;
//!
//! assert_eq!(authentication.token_type(), TokenType::OAuth);
//! assert_eq!(
//!     authentication.headers().authorization(),
//!     "token 1234567890abcdef1234567890abcdef12345678"
//! );
//! assert!(authentication.query().is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! Empty tokens are rejected up front:
//!
//! ```
//! use github_token_auth::create_token_auth;
//!
//! let err = create_token_auth("").unwrap_err();
//! assert!(err.is_invalid_argument());
//! ```

mod auth;
mod classify;
mod error;
mod strategy;
mod types;

#[cfg(feature = "reqwest")]
mod hook;

// Public API exports
pub use auth::{create_token_auth, TokenAuth};
pub use classify::classify_token;
pub use error::{Result, TokenAuthError};
pub use strategy::AuthStrategy;
pub use types::{AuthHeaders, Authentication, AuthenticationType, TokenType};
