//! # Infrastructure Layer
//!
//! Technical services behind the User API domain.
//!
//! ### Security & Authentication
//! | Module | Description |
//! |--------|-------------|
//! | [`auth`] | HS256 token issuance and verification |
//! | [`crypto`] | Argon2 password hashing |
//!
//! ### Data & Storage
//! | Module | Description |
//! |--------|-------------|
//! | [`storage`] | JSON-file backed user store |
//! | [`utils`] | Whole-document JSON file helpers |
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration (defaults, TOML, env) |
//! | [`constants`] | Centralized defaults |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`health`] | Store health check |
//! | [`logging`] | Structured logging with tracing |

pub mod auth;
pub mod config;
pub mod constants;
pub mod crypto;
pub mod error_ext;
pub mod health;
pub mod logging;
pub mod storage;
pub mod utils;

pub use auth::TokenCodec;
pub use config::{AppConfig, ConfigLoader};
pub use crypto::PasswordService;
pub use error_ext::ErrorContext;
pub use storage::JsonUserStore;
