use std::future::Future;

use crate::{Authentication, Result};

/// An authentication strategy
///
/// Strategies hand out an [`Authentication`] describing how to authenticate a
/// request. Some strategies need network access to do that (exchanging a key
/// for a token, say), so the interface is asynchronous and fallible even
/// though [`TokenAuth`](crate::TokenAuth) resolves immediately and never fails.
///
/// # Example
///
/// ```
/// use github_token_auth::{create_token_auth, AuthStrategy};
///
/// async fn authorization_header(strategy: &impl AuthStrategy) -> github_token_auth::Result<String> {
///     let authentication = strategy.auth().await?;
///     Ok(authentication.headers().authorization().to_string())
/// }
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let auth = create_token_auth("secret123")?;
/// assert_eq!(authorization_header(&auth).await?, "token secret123");
/// # Ok(())
/// # }
/// ```
pub trait AuthStrategy {
    /// Produce the authentication descriptor for the next request
    fn auth(&self) -> impl Future<Output = Result<Authentication>> + Send;
}
