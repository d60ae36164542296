//! Application configuration
//!
//! Typed configuration sections plus a Figment-based loader merging
//! defaults, a TOML file and `USERAPI__*` environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, AuthConfig, JwtConfig, LoggingConfig, ServerConfig, StorageConfig};
