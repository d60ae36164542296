//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `userapi_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "userapi.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "userapi";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "USERAPI";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// AUTHENTICATION CONSTANTS
// ============================================================================

/// JWT default expiration time in seconds (24 hours)
pub const JWT_DEFAULT_EXPIRATION_SECS: u64 = 86400;

/// Minimum signing secret length in bytes for HMAC-SHA256
pub const JWT_SECRET_MIN_LENGTH: usize = 32;

/// Signing secret substituted when none (or a too-short one) is configured.
///
/// Local development only. Never rely on this in production; set
/// `auth.jwt.require_secret = true` to refuse startup instead.
pub const JWT_DEVELOPMENT_SECRET: &str =
    "defaultSecretKeyForDevelopmentOnlyNotForProduction123456789";

/// Authorization header name
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Bearer token prefix
pub const BEARER_PREFIX: &str = "Bearer ";

// ============================================================================
// STORAGE CONSTANTS
// ============================================================================

/// Default backing file for the user store
pub const DEFAULT_USER_DATA_FILE: &str = "users.json";

// ============================================================================
// HTTP SERVER CONSTANTS
// ============================================================================

/// Default HTTP server port
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Default server host
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable that overrides the configured log filter
pub const LOG_FILTER_ENV: &str = "USERAPI_LOG";
