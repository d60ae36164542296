//! Value Objects
//!
//! Immutable values that carry meaning across layers but have no identity
//! of their own.

/// Token claims
pub mod claims;
/// Request-scoped identity
pub mod identity;

pub use claims::TokenClaims;
pub use identity::{AuthContext, Identity};
