//! Domain layer for the JWT guard.

pub mod claims;
pub mod client;
pub mod guard;
pub mod key;
pub mod source;
pub mod token;

pub use guard::JwtGuard;
pub use key::SigningKey;
pub use source::{StaticTokenSource, TokenSource};
pub use token::Token;
