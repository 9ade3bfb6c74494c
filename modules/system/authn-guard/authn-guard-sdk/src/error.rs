//! Error types for authentication guards.

use thiserror::Error;

/// Errors that can occur when issuing or verifying credentials.
#[derive(Debug, Error)]
pub enum GuardError {
    /// The guard is misconfigured (e.g. the signing key is missing).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The presented token is malformed, unsigned, badly signed, or expired.
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// The credential could not be signed.
    #[error("signing error: {0}")]
    Signing(String),

    /// An error raised by a collaborator (token source, identity resolver).
    ///
    /// Forwarded unchanged; callers may downcast the inner error.
    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),
}

impl GuardError {
    /// Returns `true` for [`GuardError::InvalidToken`].
    #[must_use]
    pub fn is_invalid_token(&self) -> bool {
        matches!(self, Self::InvalidToken(_))
    }

    /// Returns `true` for [`GuardError::Configuration`].
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
