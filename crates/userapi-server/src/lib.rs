//! # User API Server
//!
//! Rocket HTTP layer for the User API: bearer authentication, user
//! management and health endpoints.
//!
//! ```rust,no_run
//! use userapi_server::{ConfigOverrides, run};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     run(None, ConfigOverrides::default()).await
//! }
//! ```
//!
//! | Type | Description |
//! |------|-------------|
//! | [`AuthenticationFilter`] | Per-request bearer token resolution |
//! | [`AppState`] | Shared services managed by Rocket |
//! | [`build_rocket`] | Application assembly, used by tests and [`run`] |

pub mod auth;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod init;
pub mod models;
pub mod state;
pub mod transport;

pub use auth::{Authenticated, AuthenticationFilter, RequestAuth};
pub use error::{ApiError, ErrorResponse};
pub use init::{ConfigOverrides, build_state, load_config, run};
pub use state::AppState;
pub use transport::build_rocket;
