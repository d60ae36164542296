//! Domain entities

/// User record and role definitions
pub mod user;

pub use user::{Role, UserRecord, UserView};
