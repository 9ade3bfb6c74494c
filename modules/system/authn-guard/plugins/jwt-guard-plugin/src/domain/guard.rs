//! Signed bearer-token guard.

use std::sync::Arc;

use aliri_clock::{Clock, System};
use authn_guard_sdk::{GuardError, Identifier, Identity, IdentityResolver};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde_json::{Map, Value};
use tracing::debug;

use super::claims::{self, names};
use super::key::SigningKey;
use super::source::TokenSource;
use super::token::Token;
use crate::config::{DEFAULT_EXPIRE_SECONDS, JwtGuardConfig, SigningAlgorithm};

/// Guard issuing and verifying HMAC-signed JWTs.
///
/// One guard serves one request or operation. It borrows its collaborators,
/// owns the key and settings, and caches at most one resolved identity for
/// its own lifetime.
pub struct JwtGuard<'a, I> {
    token_source: &'a dyn TokenSource,
    resolver: &'a dyn IdentityResolver<Identity = I>,
    key: SigningKey,
    algorithm: SigningAlgorithm,
    expire_seconds: u64,
    issuer: String,
    leeway_seconds: u64,
    clock: Arc<dyn Clock>,
    token: Option<Token>,
    user: Option<I>,
}

impl<'a, I> JwtGuard<'a, I> {
    /// Create a guard with the default settings (HS512, 30 minute tokens).
    #[must_use]
    pub fn new(
        token_source: &'a dyn TokenSource,
        resolver: &'a dyn IdentityResolver<Identity = I>,
        key: impl Into<SigningKey>,
    ) -> Self {
        Self {
            token_source,
            resolver,
            key: key.into(),
            algorithm: SigningAlgorithm::default(),
            expire_seconds: DEFAULT_EXPIRE_SECONDS,
            issuer: String::new(),
            leeway_seconds: 0,
            clock: Arc::new(System),
            token: None,
            user: None,
        }
    }

    /// Create a guard whose key and settings all come from `cfg`.
    #[must_use]
    pub fn from_config(
        token_source: &'a dyn TokenSource,
        resolver: &'a dyn IdentityResolver<Identity = I>,
        cfg: &JwtGuardConfig,
    ) -> Self {
        Self::new(token_source, resolver, cfg.signing_key()).with_config(cfg)
    }

    /// Apply algorithm, expiry, issuer and leeway from `cfg`. The key is left untouched.
    #[must_use]
    pub fn with_config(mut self, cfg: &JwtGuardConfig) -> Self {
        self.algorithm = cfg.algorithm;
        self.expire_seconds = cfg.effective_expire_seconds();
        self.issuer.clone_from(&cfg.issuer);
        self.leeway_seconds = cfg.leeway_seconds;
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// The token from the last successful issuance or verification.
    #[must_use]
    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    /// # Errors
    ///
    /// Returns `Configuration` if the key is empty.
    pub fn key(&self) -> Result<&[u8], GuardError> {
        self.key.bytes()
    }

    #[must_use]
    pub fn algorithm(&self) -> SigningAlgorithm {
        self.algorithm
    }

    #[must_use]
    pub fn expire_seconds(&self) -> u64 {
        self.expire_seconds
    }

    /// The identity cached by the last successful [`JwtGuard::check`].
    #[must_use]
    pub fn user(&self) -> Option<&I> {
        self.user.as_ref()
    }

    /// Issue a token for `identity` and keep it as the current token.
    ///
    /// Does not touch the cached identity.
    ///
    /// # Errors
    ///
    /// - `Configuration` if the key is empty
    /// - `Signing` if the claims cannot be signed
    #[tracing::instrument(skip_all, fields(alg = ?self.algorithm))]
    pub fn auth(&mut self, identity: &dyn Identity) -> Result<(), GuardError> {
        let issued_at = self.now();
        let expires_at = issued_at.saturating_add(to_i64(self.expire_seconds));
        let claims = claims::build(identity, &self.issuer, issued_at, expires_at);

        let key = EncodingKey::from_secret(self.key()?);
        let access_token = jsonwebtoken::encode(&Header::new(self.algorithm.into()), &claims, &key)
            .map_err(|e| GuardError::Signing(e.to_string()))?;

        debug!(subject = %identity.identifier(), expires_at, "issued bearer token");
        self.token = Some(Token::new(access_token, expires_at, claims));
        Ok(())
    }

    /// Fetch the raw token from the token source, verify it, and keep the
    /// decoded claims as the current token.
    ///
    /// # Errors
    ///
    /// - `Collaborator` if the token source fails
    /// - `Configuration` if the key is empty
    /// - `InvalidToken` if the token is malformed, badly signed, signed with
    ///   another algorithm, issued by another issuer, expired, not valid yet,
    ///   or issued in the future
    #[tracing::instrument(skip_all)]
    pub fn parse_token(&mut self) -> Result<(), GuardError> {
        let raw = self.token_source.access_token()?;
        let access_token = String::from_utf8(raw)
            .map_err(|_| rejected("token is not valid UTF-8".to_owned()))?;

        let key = DecodingKey::from_secret(self.key()?);
        let data = jsonwebtoken::decode::<Map<String, Value>>(&access_token, &key, &self.validation())
            .map_err(|e| rejected(e.to_string()))?;

        let now = self.now();
        let leeway = to_i64(self.leeway_seconds);
        let expires_at = time_claim(&data.claims, names::EXPIRES_AT)?
            .ok_or_else(|| rejected("exp claim is missing".to_owned()))?;
        if now > expires_at.saturating_add(leeway) {
            return Err(rejected("token has expired".to_owned()));
        }
        if let Some(not_before) = time_claim(&data.claims, names::NOT_BEFORE)?
            && now.saturating_add(leeway) < not_before
        {
            return Err(rejected("token is not valid yet".to_owned()));
        }
        if let Some(issued_at) = time_claim(&data.claims, names::ISSUED_AT)?
            && now.saturating_add(leeway) < issued_at
        {
            return Err(rejected("token used before issued".to_owned()));
        }

        self.token = Some(Token::new(access_token, expires_at, data.claims));
        Ok(())
    }

    /// Return the verified identity of the caller, resolving and caching it
    /// on first use.
    ///
    /// # Errors
    ///
    /// Everything [`JwtGuard::parse_token`] returns, `InvalidToken` when the
    /// subject claim is not a usable identifier, and `Collaborator` when the
    /// identity resolver fails.
    pub fn check(&mut self) -> Result<&I, GuardError> {
        let user = match self.user.take() {
            Some(user) => user,
            None => self.resolve()?,
        };
        Ok(&*self.user.insert(user))
    }

    fn resolve(&mut self) -> Result<I, GuardError> {
        self.parse_token()?;

        let id = self
            .token
            .as_ref()
            .and_then(Token::subject)
            .and_then(Identifier::from_claim)
            .ok_or_else(|| rejected("sub claim is not a valid identifier".to_owned()))?;

        let user = self.resolver.find_user_by_id(&id)?;
        debug!(subject = %id, "resolved identity");
        Ok(user)
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(self.algorithm.into());
        // `exp` is checked against the guard clock, `aud` is only a nonce
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&[names::EXPIRES_AT]);
        if !self.issuer.is_empty() {
            validation.set_issuer(&[self.issuer.as_str()]);
        }
        validation
    }

    fn now(&self) -> i64 {
        to_i64(self.clock.now().0)
    }
}

fn to_i64(secs: u64) -> i64 {
    i64::try_from(secs).unwrap_or(i64::MAX)
}

/// Read a `NumericDate` claim. Integral floats are accepted; any other
/// non-integer value rejects the token.
fn time_claim(claims: &Map<String, Value>, name: &str) -> Result<Option<i64>, GuardError> {
    let Some(value) = claims.get(name) else {
        return Ok(None);
    };
    Identifier::from_claim(value)
        .filter(Identifier::is_integer)
        .map(|secs| Some(secs.to_int64()))
        .ok_or_else(|| rejected(format!("{name} claim is not a numeric date")))
}

fn rejected(reason: String) -> GuardError {
    debug!(%reason, "rejected bearer token");
    GuardError::InvalidToken(reason)
}
