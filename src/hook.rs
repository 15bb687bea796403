use reqwest::RequestBuilder;

use crate::{Authentication, TokenAuth};

impl Authentication {
    /// Merge this authentication's headers into an outgoing request
    ///
    /// Nothing is sent; the caller still owns the request.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use github_token_auth::create_token_auth;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let auth = create_token_auth("ghp_somecustomshape")?;
    /// let client = reqwest::Client::new();
    ///
    /// let request = auth
    ///     .authentication()
    ///     .apply(client.get("https://api.github.com/user"))
    ///     .build()?;
    /// assert_eq!(request.headers()["authorization"], "token ghp_somecustomshape");
    /// # Ok(())
    /// # }
    /// ```
    pub fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        self.headers()
            .iter()
            .fold(request, |request, (name, value)| request.header(name, value))
    }
}

impl TokenAuth {
    /// Authenticate an outgoing request with the captured token
    pub fn hook(&self, request: RequestBuilder) -> RequestBuilder {
        self.authentication().apply(request)
    }
}
