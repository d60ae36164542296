//! Registration and login

use super::{hash_password, verify_password};
use crate::constants::MSG_USERNAME_TAKEN;
use crate::error::ApiError;
use crate::models::{AuthResponse, LoginRequest, UserCreateRequest};
use crate::state::AppState;
use rocket::State;
use rocket::serde::json::Json;
use tracing::{info, warn};
use userapi_domain::entities::UserRecord;
use userapi_domain::error::Error;
use userapi_domain::repositories::UserRepository;

/// Register a new account and return a token for it
#[rocket::post("/register", data = "<request>")]
pub async fn register(
    state: &State<AppState>,
    request: Json<UserCreateRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let new_user = request.into_inner().into_new_user()?;

    if state.store.find_by_username(&new_user.username).await.is_some() {
        return Err(ApiError::bad_request(MSG_USERNAME_TAKEN));
    }

    let hash = hash_password(state, new_user.password).await?;
    let record = UserRecord::new(
        new_user.name,
        new_user.email,
        Some(new_user.age),
        new_user.username,
        hash,
        new_user.role,
    );

    let saved = match state.store.save(record).await {
        Ok(saved) => saved,
        // Lost a race with a concurrent registration
        Err(Error::DuplicateUser { .. }) => return Err(ApiError::bad_request(MSG_USERNAME_TAKEN)),
        Err(e) => return Err(e.into()),
    };

    let token = state
        .tokens
        .issue(&saved.username, &saved.role.authority())
        .map_err(Error::from)?;

    info!(username = %saved.username, id = ?saved.id, role = %saved.role, "Registered user");
    Ok(Json(AuthResponse {
        token,
        user: saved.view(),
    }))
}

/// Exchange credentials for a token
///
/// Unknown usernames, wrong passwords and disabled accounts all produce the
/// same response.
#[rocket::post("/login", data = "<request>")]
pub async fn login(
    state: &State<AppState>,
    request: Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let LoginRequest { username, password } = request.into_inner();

    let Some(user) = state
        .store
        .find_by_username(&username)
        .await
        .filter(|u| u.enabled)
    else {
        warn!(username = %username, "Login rejected");
        return Err(Error::InvalidCredentials.into());
    };

    if !verify_password(state, password, user.password.clone()).await? {
        warn!(username = %username, "Login rejected");
        return Err(Error::InvalidCredentials.into());
    }

    let token = state
        .tokens
        .issue(&user.username, &user.role.authority())
        .map_err(Error::from)?;

    info!(username = %user.username, "User logged in");
    Ok(Json(AuthResponse {
        token,
        user: user.view(),
    }))
}
