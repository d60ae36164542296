//! # User API Domain
//!
//! Core types and contracts for the User API: the user entity and its
//! roles, token claims, request identity, the repository port and the
//! error taxonomy shared by every layer.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | `UserRecord`, `Role`, `UserView` |
//! | [`value_objects`] | `TokenClaims`, `Identity`, `AuthContext` |
//! | [`repositories`] | `UserRepository` port |
//! | [`error`] | `Error`, `TokenError`, `Result` |
//! | [`constants`] | Domain constants |

pub mod constants;
pub mod entities;
pub mod error;
pub mod repositories;
pub mod value_objects;

pub use entities::{Role, UserRecord, UserView};
pub use error::{Error, FieldViolation, Result, TokenError};
pub use repositories::UserRepository;
pub use value_objects::{AuthContext, Identity, TokenClaims};
