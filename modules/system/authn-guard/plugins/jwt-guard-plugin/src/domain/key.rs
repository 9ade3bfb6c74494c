//! HMAC signing key.

use std::fmt;
use std::sync::Arc;

use authn_guard_sdk::GuardError;
use secrecy::{ExposeSecret, SecretSlice};

/// Immutable HMAC key material.
///
/// Cloning is cheap and shares the same bytes, so one key can back any
/// number of guards. The bytes are zeroized on drop and never printed.
#[derive(Clone)]
pub struct SigningKey(Arc<SecretSlice<u8>>);

impl SigningKey {
    /// Wrap raw key bytes. An empty key is accepted here and rejected on use.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(Arc::new(SecretSlice::from(bytes.into())))
    }

    /// Whether the key holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().is_empty()
    }

    /// Key bytes for signing or verification.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the key is empty.
    pub fn bytes(&self) -> Result<&[u8], GuardError> {
        let bytes = self.0.expose_secret();
        if bytes.is_empty() {
            return Err(GuardError::Configuration("jwt key not provided".to_owned()));
        }
        Ok(bytes)
    }
}

impl Default for SigningKey {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey([REDACTED])")
    }
}

impl From<&str> for SigningKey {
    fn from(key: &str) -> Self {
        Self::new(key.as_bytes())
    }
}

impl From<&[u8]> for SigningKey {
    fn from(key: &[u8]) -> Self {
        Self::new(key)
    }
}

impl From<Vec<u8>> for SigningKey {
    fn from(key: Vec<u8>) -> Self {
        Self::new(key)
    }
}
