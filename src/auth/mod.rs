mod shared;
mod token;

pub use token::{create_token_auth, TokenAuth};
