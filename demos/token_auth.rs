//! Build authentication for a token (from argv or GITHUB_TOKEN)
//!
//! Run with: cargo run --example token_auth -- <token>

use github_token_auth::create_token_auth;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let token = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("GITHUB_TOKEN").ok())
        .unwrap_or_default();

    let auth = create_token_auth(&token)?;
    let authentication = auth.auth().await;

    println!("Token type: {}", authentication.token_type());
    println!("{}", serde_json::to_string_pretty(&authentication)?);

    Ok(())
}
