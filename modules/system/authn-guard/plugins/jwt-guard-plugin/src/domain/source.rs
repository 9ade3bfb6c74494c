//! Where the guard gets the raw bearer token of the current request.
//!
//! Extracting the token from headers or cookies is the job of the
//! request-handling layer; the guard only sees bytes.

use std::fmt;

use anyhow::bail;

/// Supplies the raw signed token for the current operation.
pub trait TokenSource {
    /// Return the raw token bytes.
    ///
    /// # Errors
    ///
    /// Any extraction failure. The guard forwards it unchanged.
    fn access_token(&self) -> anyhow::Result<Vec<u8>>;
}

impl<F> TokenSource for F
where
    F: Fn() -> anyhow::Result<Vec<u8>>,
{
    fn access_token(&self) -> anyhow::Result<Vec<u8>> {
        self()
    }
}

/// Token source returning a fixed token.
///
/// Useful for development, tests, and callers that already extracted the
/// token themselves. An empty token is reported as missing.
#[derive(Clone, Default)]
pub struct StaticTokenSource {
    token: Vec<u8>,
}

impl StaticTokenSource {
    #[must_use]
    pub fn new(token: impl Into<Vec<u8>>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl TokenSource for StaticTokenSource {
    fn access_token(&self) -> anyhow::Result<Vec<u8>> {
        if self.token.is_empty() {
            bail!("no access token provided");
        }
        Ok(self.token.clone())
    }
}

impl fmt::Debug for StaticTokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticTokenSource")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn static_source_returns_token() {
        let source = StaticTokenSource::new("abc.def.ghi");
        assert_eq!(source.access_token().unwrap(), b"abc.def.ghi");
    }

    #[test]
    fn static_source_rejects_empty_token() {
        let err = StaticTokenSource::default().access_token().unwrap_err();
        assert_eq!(err.to_string(), "no access token provided");
    }

    #[test]
    fn closures_are_token_sources() {
        let source = || -> anyhow::Result<Vec<u8>> { Ok(b"header-token".to_vec()) };
        assert_eq!(source.access_token().unwrap(), b"header-token");
    }

    #[test]
    fn debug_redacts_token() {
        let source = StaticTokenSource::new("abc.def.ghi");
        assert!(!format!("{source:?}").contains("abc"));
    }
}
