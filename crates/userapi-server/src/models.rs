//! Request and response bodies
//!
//! Field constraints are declared with `validator`; [`validate_body`] turns
//! violations into the domain's [`FieldViolation`] list.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};
use userapi_domain::entities::{Role, UserView};
use userapi_domain::error::{Error, FieldViolation, Result};

static USERNAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("valid username pattern"));

fn password_strength(password: &str) -> std::result::Result<(), ValidationError> {
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if has_lower && has_upper && has_digit {
        Ok(())
    } else {
        Err(ValidationError::new("password_strength").with_message(Cow::Borrowed(
            "Password must contain at least one lowercase letter, one uppercase letter, and one digit",
        )))
    }
}

/// Body for `POST /api/users` and `POST /api/auth/register`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UserCreateRequest {
    #[validate(
        required(message = "Name is mandatory"),
        length(min = 2, max = 100, message = "Name must be between 2 and 100 characters")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Email is mandatory"),
        email(message = "Email should be valid")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "Age is mandatory"),
        range(min = 0, max = 150, message = "Age should be between 0 and 150")
    )]
    pub age: Option<i64>,

    #[validate(
        required(message = "Username is mandatory"),
        length(min = 3, max = 50, message = "Username must be between 3 and 50 characters"),
        regex(
            path = *USERNAME_PATTERN,
            message = "Username can only contain letters, numbers, and underscores"
        )
    )]
    pub username: Option<String>,

    #[validate(
        required(message = "Password is mandatory"),
        length(min = 8, message = "Password must be at least 8 characters long"),
        custom(function = "password_strength")
    )]
    pub password: Option<String>,

    /// Role name, case-insensitive; defaults to `USER`
    pub role: Option<String>,
}

/// Validated fields of a [`UserCreateRequest`]
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: u32,
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl UserCreateRequest {
    /// Validate and unpack into owned fields
    pub fn into_new_user(self) -> Result<NewUser> {
        validate_body(&self)?;

        let role = match self.role.as_deref() {
            None => Role::default(),
            Some(raw) => raw.parse().map_err(|_| Error::Validation {
                errors: vec![FieldViolation {
                    field: "role".to_string(),
                    rejected_value: Some(serde_json::Value::String(raw.to_string())),
                    message: "Role must be one of ADMIN, MANAGER, USER".to_string(),
                }],
            })?,
        };

        match (self.name, self.email, self.age, self.username, self.password) {
            (Some(name), Some(email), Some(age), Some(username), Some(password)) => Ok(NewUser {
                name,
                email,
                age: u32::try_from(age).map_err(|_| Error::internal("age out of range"))?,
                username,
                password,
                role,
            }),
            _ => Err(Error::internal("validated request is missing fields")),
        }
    }
}

/// Body for `PUT /api/users/<id>`; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UserUpdateRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    pub name: Option<String>,

    #[validate(email(message = "Email should be valid"))]
    pub email: Option<String>,

    #[validate(range(min = 0, max = 150, message = "Age should be between 0 and 150"))]
    pub age: Option<i64>,
}

/// Body for `POST /api/auth/login`
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Issued token plus the public user projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserView,
}

/// Run `validator` rules, mapping failures to [`Error::Validation`]
pub fn validate_body<T: Validate>(body: &T) -> Result<()> {
    body.validate().map_err(|errors| Error::Validation {
        errors: field_violations(&errors),
    })
}

fn field_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| FieldViolation {
                field: field.to_string(),
                rejected_value: e.params.get("value").cloned(),
                message: e
                    .message
                    .as_ref()
                    .map_or_else(|| e.code.to_string(), ToString::to_string),
            })
        })
        .collect();
    violations.sort_by(|a, b| a.field.cmp(&b.field));
    violations
}
