//! Application identities and the collaborator contract that resolves them.

use serde_json::{Map, Value};

use crate::identifier::Identifier;

/// An application-level principal.
///
/// Concrete identity types belong to the surrounding application; guards
/// only ever look at the identifier and, optionally, custom claims.
pub trait Identity {
    /// The identifier of this principal.
    fn identifier(&self) -> Identifier;

    /// Capability query for [`ClaimsIdentity`].
    ///
    /// Identities that contribute custom claims override this to return
    /// `Some(self)`.
    fn as_claims_identity(&self) -> Option<&dyn ClaimsIdentity> {
        None
    }
}

/// An identity that contributes custom claims to issued credentials.
///
/// Custom claims never override the standard timing and identity claims
/// (`jti`, `sub`, `iat`, `exp`, `aud`).
///
/// ```ignore
/// impl Identity for Admin {
///     fn identifier(&self) -> Identifier { Identifier::from(self.id) }
///     fn as_claims_identity(&self) -> Option<&dyn ClaimsIdentity> { Some(self) }
/// }
///
/// impl ClaimsIdentity for Admin {
///     fn custom_claims(&self) -> Map<String, Value> { ... }
/// }
/// ```
pub trait ClaimsIdentity: Identity {
    /// Custom claims merged into each credential issued for this identity.
    fn custom_claims(&self) -> Map<String, Value>;
}

/// Resolves a verified identifier to a full application identity.
///
/// Implementations may perform blocking I/O; the guard imposes no timeout,
/// so callers apply their own deadlines around guard calls.
pub trait IdentityResolver {
    /// Identity type produced by this resolver.
    type Identity;

    /// Look up the identity with the given identifier.
    ///
    /// # Errors
    ///
    /// Any lookup failure. Guards forward it unchanged.
    fn find_user_by_id(&self, id: &Identifier) -> anyhow::Result<Self::Identity>;
}
