//! Request handlers
//!
//! | Module | Routes |
//! |--------|--------|
//! | [`auth`] | `POST /api/auth/register`, `POST /api/auth/login` |
//! | [`users`] | `/api/users` CRUD |
//! | [`health`] | `GET /health`, `GET /info` |

pub mod auth;
pub mod health;
pub mod users;

use crate::state::AppState;
use userapi_domain::error::{Error, Result};

/// Hash a password off the async executor
pub(crate) async fn hash_password(state: &AppState, password: String) -> Result<String> {
    let passwords = state.passwords.clone();
    tokio::task::spawn_blocking(move || passwords.hash_password(&password))
        .await
        .map_err(|e| Error::internal(format!("Password hashing task failed: {e}")))?
}

/// Verify a password off the async executor
pub(crate) async fn verify_password(state: &AppState, password: String, hash: String) -> Result<bool> {
    let passwords = state.passwords.clone();
    tokio::task::spawn_blocking(move || passwords.verify_password(&password, &hash))
        .await
        .map_err(|e| Error::internal(format!("Password verification task failed: {e}")))
}
