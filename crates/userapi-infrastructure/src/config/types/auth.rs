//! Authentication configuration types

use crate::constants::{JWT_DEFAULT_EXPIRATION_SECS, JWT_SECRET_MIN_LENGTH};
use serde::{Deserialize, Serialize};

/// JWT configuration
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JwtConfig {
    /// Signing secret
    ///
    /// Configure via `USERAPI__AUTH__JWT__SECRET` or `auth.jwt.secret`.
    /// Must be at least 32 bytes; otherwise the development fallback is used
    /// (or startup fails when `require_secret` is set).
    pub secret: Option<String>,

    /// Token time-to-live in seconds
    pub expiration_secs: u64,

    /// Refuse to start without an adequate secret
    pub require_secret: bool,
}

impl JwtConfig {
    /// Whether the configured secret is long enough to be used as-is
    pub fn has_adequate_secret(&self) -> bool {
        self.secret
            .as_deref()
            .is_some_and(|s| s.len() >= JWT_SECRET_MIN_LENGTH)
    }
}

/// Returns default JWT configuration with:
/// - No secret (development fallback applies)
/// - 24 hour expiration
/// - Fallback permitted
impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: None,
            expiration_secs: JWT_DEFAULT_EXPIRATION_SECS,
            require_secret: false,
        }
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("expiration_secs", &self.expiration_secs)
            .field("require_secret", &self.require_secret)
            .finish()
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,
}
