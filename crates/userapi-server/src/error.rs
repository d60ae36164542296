//! HTTP error responses
//!
//! Every failure leaves the server as an [`ErrorResponse`] JSON body, whether
//! it comes from a handler ([`ApiError`]) or from a Rocket catcher.

use crate::constants::{ERROR_TIMESTAMP_FORMAT, MSG_AUTHENTICATION_REQUIRED, MSG_VALIDATION_FAILED};
use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder, Response};
use rocket::serde::json::Json;
use serde::Serialize;
use tracing::error;
use userapi_domain::error::{Error, FieldViolation};

/// One rejected request field
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrorDetail {
    /// Field name
    pub field: String,
    /// Value that was rejected
    pub rejected_value: Option<serde_json::Value>,
    /// Constraint message
    pub message: String,
}

impl From<FieldViolation> for ValidationErrorDetail {
    fn from(v: FieldViolation) -> Self {
        Self {
            field: v.field,
            rejected_value: v.rejected_value,
            message: v.message,
        }
    }
}

/// JSON error body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Local time the error was produced
    pub timestamp: String,
    /// HTTP status code
    pub status: u16,
    /// Short error category
    pub error: String,
    /// Human-readable message
    pub message: String,
    /// Request path
    pub path: String,
    /// Field violations for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<Vec<ValidationErrorDetail>>,
}

/// Handler error carrying its HTTP status
#[derive(Debug)]
pub struct ApiError {
    /// Response status
    pub status: Status,
    /// Short error category
    pub error: String,
    /// Human-readable message
    pub message: String,
    /// Field violations, if any
    pub validation_errors: Option<Vec<ValidationErrorDetail>>,
}

impl ApiError {
    /// Create an error with an explicit status and category
    pub fn new(status: Status, error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
            message: message.into(),
            validation_errors: None,
        }
    }

    /// 400 with a plain message
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(Status::BadRequest, reason(Status::BadRequest), message)
    }

    /// 401 for requests lacking an identity
    pub fn unauthorized() -> Self {
        Self::new(
            Status::Unauthorized,
            reason(Status::Unauthorized),
            MSG_AUTHENTICATION_REQUIRED,
        )
    }

    /// 400 carrying field violations
    pub fn validation(errors: Vec<FieldViolation>) -> Self {
        Self {
            status: Status::BadRequest,
            error: "Validation Error".to_string(),
            message: MSG_VALIDATION_FAILED.to_string(),
            validation_errors: Some(errors.into_iter().map(Into::into).collect()),
        }
    }

    /// Error body for a catcher invoked with `status`
    pub fn for_status(status: Status) -> Self {
        let message = match status.code {
            401 => MSG_AUTHENTICATION_REQUIRED,
            403 => "Access is denied",
            404 => "The requested resource was not found",
            422 => "The request body could not be parsed",
            _ => reason(status),
        };
        Self::new(status, reason(status), message)
    }

    /// Render the JSON body for `path`
    pub fn to_response_body(&self, path: &str) -> ErrorResponse {
        ErrorResponse {
            timestamp: chrono::Local::now()
                .format(ERROR_TIMESTAMP_FORMAT)
                .to_string(),
            status: self.status.code,
            error: self.error.clone(),
            message: self.message.clone(),
            path: path.to_string(),
            validation_errors: self.validation_errors.clone(),
        }
    }
}

fn reason(status: Status) -> &'static str {
    status.reason().unwrap_or("Unknown Error")
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::UserNotFound { .. } => {
                Self::new(Status::NotFound, "User Not Found", err.to_string())
            }
            Error::DuplicateUser { .. } => {
                Self::new(Status::Conflict, "Duplicate User", err.to_string())
            }
            Error::Validation { errors } => Self::validation(errors),
            Error::InvalidCredentials => {
                Self::new(Status::Unauthorized, reason(Status::Unauthorized), err.to_string())
            }
            Error::Forbidden { .. } => {
                Self::new(Status::Forbidden, reason(Status::Forbidden), err.to_string())
            }
            other => {
                error!(error = %other, "Request failed");
                Self::new(
                    Status::InternalServerError,
                    "Internal Server Error",
                    other.to_string(),
                )
            }
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let body = self.to_response_body(request.uri().path().as_str());
        Response::build_from(Json(body).respond_to(request)?)
            .status(self.status)
            .ok()
    }
}

/// Catcher for every status without a handler response
#[rocket::catch(default)]
pub fn default_catcher(status: Status, _request: &Request<'_>) -> ApiError {
    ApiError::for_status(status)
}
