//! `AuthN` Guard SDK
//!
//! This crate provides the strategy-independent authentication contract:
//!
//! - [`Identifier`] - Normalized identity value (integer or text)
//! - [`Identity`] / [`ClaimsIdentity`] - Application principals and the optional custom-claims capability
//! - [`IdentityResolver`] - Collaborator contract resolving an identifier to a full identity
//! - [`Guard`] - The `check` / `user` / `auth` contract every strategy implements
//! - [`GuardError`] - Error types
//!
//! ## Usage
//!
//! Request-handling code depends on [`Guard`] only, so a signed-token guard
//! can be swapped for another strategy without touching callers:
//!
//! ```ignore
//! use authn_guard_sdk::{Guard, GuardError};
//!
//! fn current_user<G: Guard>(guard: &mut G) -> Result<&G::Identity, GuardError> {
//!     guard.check()
//! }
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod error;
pub mod guard;
pub mod identifier;
pub mod identity;

// Re-export main types at crate root
pub use error::GuardError;
pub use guard::Guard;
pub use identifier::Identifier;
pub use identity::{ClaimsIdentity, Identity, IdentityResolver};
