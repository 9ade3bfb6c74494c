#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! JWT `AuthN` Guard Plugin
//!
//! Stateless bearer-token authentication: identities are issued HMAC-signed
//! JWTs, and callers presenting one are verified and resolved back to an
//! application identity.
//!
//! ## Flow
//!
//! - **Issuance** (`auth`): build the claim set (`iss`, `jti`, `sub`, `iat`,
//!   `exp`, random `aud`, plus custom claims), sign it, keep it as the current token.
//! - **Verification** (`check`): read the raw token from the [`TokenSource`],
//!   verify signature and expiry, resolve `sub` through the
//!   [`IdentityResolver`](authn_guard_sdk::IdentityResolver), cache the identity.
//!
//! ## Configuration
//!
//! ```yaml
//! jwt_guard:
//!   signing_key: "change-me"
//!   algorithm: hs512
//!   expire_seconds: 1800
//!   issuer: ""
//!   leeway_seconds: 0
//! ```

pub mod config;
pub mod domain;

pub use config::{JwtGuardConfig, SigningAlgorithm};
pub use domain::{JwtGuard, SigningKey, StaticTokenSource, Token, TokenSource};
