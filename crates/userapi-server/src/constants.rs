//! Server constants

/// Base path for authentication endpoints
pub const AUTH_BASE_PATH: &str = "/api/auth";

/// Base path for user management endpoints
pub const USERS_BASE_PATH: &str = "/api/users";

/// Application name reported by `/info`
pub const APP_NAME: &str = "userapi";

/// Registration rejected because the username exists
pub const MSG_USERNAME_TAKEN: &str = "Username is already taken";

/// Message for requests without a valid bearer token
pub const MSG_AUTHENTICATION_REQUIRED: &str = "Full authentication is required to access this resource";

/// Message used when request validation fails
pub const MSG_VALIDATION_FAILED: &str = "Input validation failed";

/// Timestamp layout used in error bodies
pub const ERROR_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// HSTS policy sent on every response
pub const HSTS_POLICY: &str = "max-age=31536000; includeSubDomains";
