//! Request-scoped identity

use crate::entities::Role;
use crate::error::{Error, Result};

/// Identity resolved from a validated bearer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Authenticated username
    pub username: String,
    /// Single role authority carried by the token, if any
    pub authority: Option<String>,
}

impl Identity {
    /// Create an identity
    pub fn new(username: impl Into<String>, authority: Option<String>) -> Self {
        Self {
            username: username.into(),
            authority,
        }
    }

    /// Role resolved from the authority label
    pub fn role(&self) -> Option<Role> {
        self.authority.as_deref().and_then(Role::from_authority)
    }

    /// Succeeds when the identity holds one of `allowed`
    pub fn require_any(&self, allowed: &[Role]) -> Result<()> {
        match self.role() {
            Some(role) if allowed.contains(&role) => Ok(()),
            _ => Err(Error::forbidden(format!(
                "{} lacks a required role",
                self.username
            ))),
        }
    }
}

/// Per-request authentication context
///
/// Built once per request by the authentication filter and passed
/// explicitly to whatever needs it. `None` means no valid bearer token was
/// presented; rejecting such requests is left to authorization policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext(Option<Identity>);

impl AuthContext {
    /// Context for an authenticated request
    pub fn authenticated(identity: Identity) -> Self {
        Self(Some(identity))
    }

    /// Context for an anonymous request
    pub fn anonymous() -> Self {
        Self(None)
    }

    /// The resolved identity
    pub fn identity(&self) -> Option<&Identity> {
        self.0.as_ref()
    }

    /// Whether an identity was established
    pub fn is_authenticated(&self) -> bool {
        self.0.is_some()
    }
}
