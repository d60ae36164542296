//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Token issuance and decoding failures
///
/// The strict decode path surfaces these as-is. The lenient validation
/// path collapses every variant into `false`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Issuance requested with an empty subject
    #[error("Token subject must not be empty")]
    InvalidSubject,

    /// Token is not a well-formed compact JWS or its claims cannot be read
    #[error("Malformed token: {message}")]
    Malformed {
        /// Description of what could not be parsed
        message: String,
    },

    /// Signature does not verify against the configured key
    #[error("Token signature does not match")]
    Signature,

    /// Expiration timestamp has passed
    #[error("Token has expired")]
    Expired,
}

impl TokenError {
    /// Create a malformed token error
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }
}

/// Single rejected field from request validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Field name as it appears on the wire
    pub field: String,
    /// Rejected value rendered as JSON, when available
    pub rejected_value: Option<serde_json::Value>,
    /// Human-readable constraint message
    pub message: String,
}

/// Main error type for the User API
#[derive(Error, Debug)]
pub enum Error {
    /// Token issuance or decoding error
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// A user with the same unique field already exists
    #[error("User already exists with {field}: {value}")]
    DuplicateUser {
        /// Field that collided (e.g. `username`)
        field: String,
        /// Colliding value
        value: String,
    },

    /// Requested user does not exist
    #[error("User not found with {field}: {value}")]
    UserNotFound {
        /// Lookup field (`ID` or `username`)
        field: String,
        /// Lookup value
        value: String,
    },

    /// Login failed; never says whether the username or the password was wrong
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Request payload failed validation
    #[error("Input validation failed")]
    Validation {
        /// Individual field violations
        errors: Vec<FieldViolation>,
    },

    /// Caller lacks the role required for the operation
    #[error("Access denied: {message}")]
    Forbidden {
        /// Description of the missing authority
        message: String,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Store error creation methods
impl Error {
    /// Create a duplicate user error
    pub fn duplicate_user<F: Into<String>, V: Into<String>>(field: F, value: V) -> Self {
        Self::DuplicateUser {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a not found error for an identifier lookup
    pub fn user_not_found_by_id(id: u64) -> Self {
        Self::UserNotFound {
            field: "ID".to_string(),
            value: id.to_string(),
        }
    }

    /// Create a not found error for a username lookup
    pub fn user_not_found_by_username<S: Into<String>>(username: S) -> Self {
        Self::UserNotFound {
            field: "username".to_string(),
            value: username.into(),
        }
    }

    /// Create a forbidden error
    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }
}

// I/O error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Infrastructure error creation methods
impl Error {
    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
