//! Claim set construction for issued tokens.

use authn_guard_sdk::Identity;
use rand::Rng;
use rand::distr::Alphanumeric;
use serde_json::{Map, Value};

/// Registered claim names read or written by the guard.
pub mod names {
    pub const ISSUER: &str = "iss";
    pub const TOKEN_ID: &str = "jti";
    pub const SUBJECT: &str = "sub";
    pub const ISSUED_AT: &str = "iat";
    pub const EXPIRES_AT: &str = "exp";
    pub const NOT_BEFORE: &str = "nbf";
    pub const AUDIENCE: &str = "aud";
}

/// Length of the random `aud` nonce.
pub const NONCE_LEN: usize = 16;

/// Build the claim set for `identity`.
///
/// Custom claims may replace `iss`, but `jti`, `sub`, `iat`, `exp` and `aud`
/// are written after the merge and always win.
#[must_use]
pub fn build(
    identity: &dyn Identity,
    issuer: &str,
    issued_at: i64,
    expires_at: i64,
) -> Map<String, Value> {
    let mut claims = Map::new();
    claims.insert(names::ISSUER.to_owned(), Value::String(issuer.to_owned()));

    if let Some(extended) = identity.as_claims_identity() {
        claims.extend(extended.custom_claims());
    }

    let id = identity.identifier().value();
    claims.insert(names::TOKEN_ID.to_owned(), id.clone());
    claims.insert(names::SUBJECT.to_owned(), id);
    claims.insert(names::ISSUED_AT.to_owned(), Value::from(issued_at));
    claims.insert(names::EXPIRES_AT.to_owned(), Value::from(expires_at));
    claims.insert(names::AUDIENCE.to_owned(), Value::String(nonce()));
    claims
}

/// Random alphanumeric nonce. Only guarantees uniqueness between tokens.
#[must_use]
pub fn nonce() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(NONCE_LEN)
        .map(char::from)
        .collect()
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use authn_guard_sdk::{ClaimsIdentity, Identifier};
    use serde_json::json;

    use super::*;

    struct Plain;

    impl Identity for Plain {
        fn identifier(&self) -> Identifier {
            Identifier::from(42)
        }
    }

    /// Tries to smuggle every standard claim in through custom claims.
    struct Greedy;

    impl Identity for Greedy {
        fn identifier(&self) -> Identifier {
            Identifier::from("alice")
        }

        fn as_claims_identity(&self) -> Option<&dyn ClaimsIdentity> {
            Some(self)
        }
    }

    impl ClaimsIdentity for Greedy {
        fn custom_claims(&self) -> Map<String, Value> {
            let Value::Object(claims) = json!({
                "iss": "custom-issuer",
                "jti": "forged",
                "sub": "root",
                "iat": 0,
                "exp": i64::MAX,
                "aud": "fixed",
                "role": "admin",
            }) else {
                unreachable!()
            };
            claims
        }
    }

    #[test]
    fn seeds_standard_claims() {
        let claims = build(&Plain, "", 1_000, 2_800);

        assert_eq!(claims.get("iss"), Some(&json!("")));
        assert_eq!(claims.get("sub"), Some(&json!(42)));
        assert_eq!(claims.get("jti"), Some(&json!(42)));
        assert_eq!(claims.get("iat"), Some(&json!(1_000)));
        assert_eq!(claims.get("exp"), Some(&json!(2_800)));
        assert_eq!(claims.get("aud").and_then(Value::as_str).map(str::len), Some(NONCE_LEN));
        assert_eq!(claims.len(), 6);
    }

    #[test]
    fn standard_claims_win_over_custom_claims() {
        let claims = build(&Greedy, "", 1_000, 2_800);

        assert_eq!(claims.get("sub"), Some(&json!("alice")));
        assert_eq!(claims.get("jti"), Some(&json!("alice")));
        assert_eq!(claims.get("iat"), Some(&json!(1_000)));
        assert_eq!(claims.get("exp"), Some(&json!(2_800)));
        assert_ne!(claims.get("aud"), Some(&json!("fixed")));
        assert_eq!(claims.get("role"), Some(&json!("admin")));
    }

    #[test]
    fn custom_claims_may_replace_issuer() {
        let claims = build(&Greedy, "configured", 1_000, 2_800);
        assert_eq!(claims.get("iss"), Some(&json!("custom-issuer")));
    }

    #[test]
    fn nonces_are_alphanumeric_and_distinct() {
        let a = nonce();
        let b = nonce();

        assert_eq!(a.len(), NONCE_LEN);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(a, b);
    }
}
