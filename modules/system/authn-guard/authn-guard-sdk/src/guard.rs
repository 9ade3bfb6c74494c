//! Public contract for authentication strategies.
//!
//! A guard authenticates the caller of a single request or operation. The
//! signed-token guard is one implementation; session-cookie or mutual-TLS
//! strategies can implement the same trait without changing callers.

use crate::error::GuardError;
use crate::identity::Identity;

/// Authentication strategy contract.
///
/// A guard is single-owner state scoped to one request/operation: it is
/// not shared across concurrent callers and holds no internal locking.
///
/// ```ignore
/// let mut guard = JwtGuard::new(&source, &resolver, key);
///
/// // Verify the caller
/// let user = guard.check()?;
///
/// // Later reads are served from the cache
/// assert!(guard.user().is_some());
/// ```
pub trait Guard {
    /// Identity type produced by verification.
    type Identity;

    /// Return the verified identity of the current caller.
    ///
    /// Once an identity has been resolved it is cached for the lifetime of
    /// the guard and returned without re-verification.
    ///
    /// # Errors
    ///
    /// - `InvalidToken` if the presented credential does not verify
    /// - `Configuration` if the guard cannot verify credentials at all
    /// - `Collaborator` for errors raised by the credential source or the identity resolver
    fn check(&mut self) -> Result<&Self::Identity, GuardError>;

    /// Return the identity cached by the most recent successful [`Guard::check`], if any.
    fn user(&self) -> Option<&Self::Identity>;

    /// Issue a new credential for `identity`.
    ///
    /// # Errors
    ///
    /// - `Configuration` if the guard cannot issue credentials
    /// - `Signing` if the credential could not be produced
    fn auth(&mut self, identity: &dyn Identity) -> Result<(), GuardError>;
}
