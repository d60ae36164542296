//! Signed bearer tokens (HS256 compact JWS)
//!
//! [`TokenCodec`] issues tokens carrying a subject, an optional role
//! authority and an `iat`/`exp` window, and verifies them through two entry
//! points: [`TokenCodec::decode`] surfaces the failure kind, while
//! [`TokenCodec::validate`] collapses every failure into `false` for the
//! request filter.

use crate::config::JwtConfig;
use crate::constants::{JWT_DEVELOPMENT_SECRET, JWT_SECRET_MIN_LENGTH};
use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::{debug, warn};
use userapi_domain::constants::{CLAIM_EXPIRATION, CLAIM_SUBJECT};
use userapi_domain::error::{Error, Result, TokenError};
use userapi_domain::value_objects::TokenClaims;

/// Issues and verifies authentication tokens
///
/// Stateless after construction; share it behind an `Arc`.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: u64,
    development_secret: bool,
}

impl TokenCodec {
    /// Create a codec, substituting the development secret when `secret` is
    /// missing or shorter than 32 bytes
    ///
    /// The fallback is unsafe outside local runs and is logged as such.
    pub fn new(secret: Option<&str>, ttl_secs: u64) -> Self {
        match secret {
            Some(secret) if secret.len() >= JWT_SECRET_MIN_LENGTH => {
                Self::with_key(secret.as_bytes(), ttl_secs, false)
            }
            _ => {
                warn!(
                    "No JWT secret of at least {JWT_SECRET_MIN_LENGTH} bytes configured; \
                     using the built-in development secret. Do not use this in production"
                );
                Self::with_key(JWT_DEVELOPMENT_SECRET.as_bytes(), ttl_secs, true)
            }
        }
    }

    /// Create a codec that refuses to fall back to the development secret
    pub fn strict(secret: Option<&str>, ttl_secs: u64) -> Result<Self> {
        match secret {
            Some(secret) if secret.len() >= JWT_SECRET_MIN_LENGTH => {
                Ok(Self::with_key(secret.as_bytes(), ttl_secs, false))
            }
            _ => Err(Error::configuration(format!(
                "JWT secret must be configured and at least {JWT_SECRET_MIN_LENGTH} bytes long"
            ))),
        }
    }

    /// Create a codec from configuration, honoring `require_secret`
    pub fn from_config(config: &JwtConfig) -> Result<Self> {
        if config.require_secret {
            Self::strict(config.secret.as_deref(), config.expiration_secs)
        } else {
            Ok(Self::new(config.secret.as_deref(), config.expiration_secs))
        }
    }

    fn with_key(secret: &[u8], ttl_secs: u64, development_secret: bool) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked by `decode` against the wall clock with no leeway
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&[CLAIM_EXPIRATION, CLAIM_SUBJECT]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl_secs,
            development_secret,
        }
    }

    /// Token time-to-live in seconds
    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }

    /// Whether the built-in development secret is in use
    pub fn uses_development_secret(&self) -> bool {
        self.development_secret
    }

    /// Issue a token for `username` carrying the `role` authority
    pub fn issue(&self, username: &str, role: &str) -> std::result::Result<String, TokenError> {
        self.issue_at(username, Some(role), Utc::now())
    }

    /// Issue a token for `username` without a role claim
    pub fn issue_without_role(&self, username: &str) -> std::result::Result<String, TokenError> {
        self.issue_at(username, None, Utc::now())
    }

    /// Issue a token as of `issued_at`
    pub fn issue_at(
        &self,
        username: &str,
        role: Option<&str>,
        issued_at: DateTime<Utc>,
    ) -> std::result::Result<String, TokenError> {
        if username.trim().is_empty() {
            return Err(TokenError::InvalidSubject);
        }

        let claims = TokenClaims::new(
            username,
            role.map(str::to_string),
            issued_at,
            self.ttl_secs,
        );

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::malformed(format!("Failed to encode token: {e}")))
    }

    /// Lenient check: signature verifies and the token is unexpired
    ///
    /// Never fails; every decoding error yields `false`.
    pub fn validate(&self, token: &str) -> bool {
        match self.decode(token) {
            Ok(_) => true,
            Err(e) => {
                debug!(error = %e, "Rejected bearer token");
                false
            }
        }
    }

    /// Strict check that the token is valid and was issued to `expected_username`
    pub fn validate_strict(
        &self,
        token: &str,
        expected_username: &str,
    ) -> std::result::Result<bool, TokenError> {
        let claims = self.decode(token)?;
        Ok(claims.sub == expected_username)
    }

    /// Decode claims, verifying both signature and expiry
    pub fn decode(&self, token: &str) -> std::result::Result<TokenClaims, TokenError> {
        self.decode_at(token, Utc::now())
    }

    /// Decode claims, checking expiry against `now`
    pub fn decode_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> std::result::Result<TokenClaims, TokenError> {
        let claims = self.decode_claims(token)?;
        if claims.is_expired_at(now) {
            return Err(TokenError::Expired);
        }
        Ok(claims)
    }

    /// Decode claims, verifying the signature only
    pub fn decode_claims(&self, token: &str) -> std::result::Result<TokenClaims, TokenError> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::Signature,
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::malformed(e.to_string()),
            })
    }

    /// Subject of a signature-valid token
    pub fn extract_username(&self, token: &str) -> std::result::Result<String, TokenError> {
        self.decode_claims(token).map(|claims| claims.sub)
    }

    /// Role authority of a signature-valid token, `None` when issued without one
    pub fn extract_role(&self, token: &str) -> std::result::Result<Option<String>, TokenError> {
        self.decode_claims(token).map(|claims| claims.role)
    }

    /// Expiration instant of a signature-valid token
    pub fn extract_expiration(
        &self,
        token: &str,
    ) -> std::result::Result<DateTime<Utc>, TokenError> {
        self.decode_claims(token).map(|claims| claims.expires_at())
    }
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("ttl_secs", &self.ttl_secs)
            .field("development_secret", &self.development_secret)
            .finish_non_exhaustive()
    }
}
