//! Token claims

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Claims carried by an authentication token
///
/// Timestamps are seconds since the Unix epoch. `role` is omitted from the
/// payload when the token was issued without one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (username)
    pub sub: String,
    /// Role authority label (e.g. `ROLE_USER`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Issued at
    pub iat: i64,
    /// Expiration
    pub exp: i64,
}

impl TokenClaims {
    /// Build claims valid for `ttl_secs` starting at `issued_at`
    pub fn new(
        subject: impl Into<String>,
        role: Option<String>,
        issued_at: DateTime<Utc>,
        ttl_secs: u64,
    ) -> Self {
        let iat = issued_at.timestamp();
        let ttl = i64::try_from(ttl_secs).unwrap_or(i64::MAX);
        Self {
            sub: subject.into(),
            role,
            iat,
            exp: iat.saturating_add(ttl),
        }
    }

    /// Expiration as a timestamp
    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.exp, 0)
            .single()
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Whether the token is expired at `now`
    ///
    /// No clock skew is tolerated: the token stops being valid at the exact
    /// expiration instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }
}
