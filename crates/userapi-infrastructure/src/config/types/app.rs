//! Main application configuration

use serde::{Deserialize, Serialize};

pub use super::auth::{AuthConfig, JwtConfig};
pub use super::logging::LoggingConfig;
pub use super::server::ServerConfig;
pub use super::storage::StorageConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// Authentication configuration
    pub auth: AuthConfig,
    /// User store configuration
    pub storage: StorageConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}
