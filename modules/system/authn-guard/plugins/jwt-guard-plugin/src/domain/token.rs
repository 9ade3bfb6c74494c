//! Credential record produced by issuance and verification.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::claims::names;

/// Type tag of every token produced by the guard.
pub const BEARER: &str = "bearer";

/// Signed bearer token plus its decoded claims.
///
/// Only `access_token`, `expire_in` and `type` are serialized. The claims
/// are a decoded cache and are rebuilt by parsing the token again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    /// Absolute expiry, Unix seconds.
    pub expire_in: i64,
    #[serde(rename = "type")]
    pub token_type: String,
    #[serde(skip)]
    claims: Option<Map<String, Value>>,
}

impl Token {
    #[must_use]
    pub fn new(access_token: String, expire_in: i64, claims: Map<String, Value>) -> Self {
        Self {
            access_token,
            expire_in,
            token_type: BEARER.to_owned(),
            claims: Some(claims),
        }
    }

    /// Decoded claims; `None` for a record that was deserialized rather
    /// than issued or verified.
    #[must_use]
    pub fn claims(&self) -> Option<&Map<String, Value>> {
        self.claims.as_ref()
    }

    #[must_use]
    pub fn claim(&self, name: &str) -> Option<&Value> {
        self.claims.as_ref()?.get(name)
    }

    #[must_use]
    pub fn subject(&self) -> Option<&Value> {
        self.claim(names::SUBJECT)
    }

    #[must_use]
    pub fn audience(&self) -> Option<&str> {
        self.claim(names::AUDIENCE)?.as_str()
    }

    #[must_use]
    pub fn issued_at(&self) -> Option<i64> {
        self.claim(names::ISSUED_AT)?.as_i64()
    }

    #[must_use]
    pub fn expires_at(&self) -> Option<i64> {
        self.claim(names::EXPIRES_AT)?.as_i64()
    }
}
