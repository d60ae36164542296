//! Domain layer constants
//!
//! Contains constants that are part of the domain rules. Infrastructure
//! defaults (file names, secrets, ports) live in the infrastructure crate.

// ============================================================================
// USER DOMAIN CONSTANTS
// ============================================================================

/// First identifier handed out by an empty store
pub const FIRST_USER_ID: u64 = 1;

/// Authority prefix used when a role is embedded in a token
pub const ROLE_AUTHORITY_PREFIX: &str = "ROLE_";

// ============================================================================
// TOKEN CLAIM NAMES
// ============================================================================

/// Subject claim
pub const CLAIM_SUBJECT: &str = "sub";

/// Role claim
pub const CLAIM_ROLE: &str = "role";

/// Issued-at claim
pub const CLAIM_ISSUED_AT: &str = "iat";

/// Expiration claim
pub const CLAIM_EXPIRATION: &str = "exp";
