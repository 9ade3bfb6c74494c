//! Configuration for the JWT guard.

use authn_guard_sdk::GuardError;
use figment::Figment;
use jsonwebtoken::Algorithm;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::domain::SigningKey;

/// Lifetime of issued tokens when nothing else is configured (30 minutes).
pub const DEFAULT_EXPIRE_SECONDS: u64 = 60 * 30;

/// Guard configuration.
///
/// Applied once when a guard is built and never mutated afterwards, so
/// unrelated guards never share hidden defaults.
///
/// ```yaml
/// jwt_guard:
///   signing_key: "change-me"
///   algorithm: hs512
///   expire_seconds: 1800
///   issuer: ""
///   leeway_seconds: 0
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JwtGuardConfig {
    /// HMAC secret. Issuing and verifying fail with a configuration error
    /// when it is missing or empty.
    pub signing_key: Option<SecretString>,

    /// HMAC variant used to sign and accepted when verifying.
    pub algorithm: SigningAlgorithm,

    /// Token lifetime. `0` falls back to [`DEFAULT_EXPIRE_SECONDS`].
    pub expire_seconds: u64,

    /// Value of the `iss` claim. When non-empty, verification also requires it.
    pub issuer: String,

    /// Clock skew tolerated when checking `exp`.
    pub leeway_seconds: u64,
}

impl Default for JwtGuardConfig {
    fn default() -> Self {
        Self {
            signing_key: None,
            algorithm: SigningAlgorithm::default(),
            expire_seconds: DEFAULT_EXPIRE_SECONDS,
            issuer: String::new(),
            leeway_seconds: 0,
        }
    }
}

impl JwtGuardConfig {
    /// Extract the configuration from an assembled figment.
    ///
    /// Providers (YAML files, environment) are chosen by the caller.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the figment cannot be deserialized.
    pub fn from_figment(figment: &Figment) -> Result<Self, GuardError> {
        figment
            .extract()
            .map_err(|e| GuardError::Configuration(e.to_string()))
    }

    /// Effective token lifetime in seconds.
    #[must_use]
    pub fn effective_expire_seconds(&self) -> u64 {
        if self.expire_seconds == 0 {
            DEFAULT_EXPIRE_SECONDS
        } else {
            self.expire_seconds
        }
    }

    /// The configured signing key, or an empty key when none is set.
    #[must_use]
    pub fn signing_key(&self) -> SigningKey {
        self.signing_key
            .as_ref()
            .map(|secret| SigningKey::new(secret.expose_secret().as_bytes()))
            .unwrap_or_default()
    }
}

/// Supported HMAC variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SigningAlgorithm {
    /// HMAC with SHA-256.
    Hs256,
    /// HMAC with SHA-384.
    Hs384,
    /// HMAC with SHA-512.
    #[default]
    Hs512,
}

impl From<SigningAlgorithm> for Algorithm {
    fn from(alg: SigningAlgorithm) -> Self {
        match alg {
            SigningAlgorithm::Hs256 => Self::HS256,
            SigningAlgorithm::Hs384 => Self::HS384,
            SigningAlgorithm::Hs512 => Self::HS512,
        }
    }
}
