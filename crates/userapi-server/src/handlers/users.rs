//! User management
//!
//! Every route requires an authenticated caller. Reads are open to all
//! roles, updates to ADMIN and MANAGER, creation and deletion to ADMIN.

use super::hash_password;
use crate::auth::Authenticated;
use crate::constants::USERS_BASE_PATH;
use crate::error::ApiError;
use crate::models::{UserCreateRequest, UserUpdateRequest, validate_body};
use crate::state::AppState;
use rocket::State;
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use tracing::info;
use userapi_domain::entities::{Role, UserRecord, UserView};
use userapi_domain::error::Error;
use userapi_domain::repositories::UserRepository;

/// List every user
#[rocket::get("/")]
pub async fn list_users(_caller: Authenticated, state: &State<AppState>) -> Json<Vec<UserView>> {
    let users = state.store.find_all().await;
    Json(users.iter().map(UserView::from).collect())
}

/// Fetch a user by identifier
#[rocket::get("/<id>")]
pub async fn get_user(
    id: u64,
    _caller: Authenticated,
    state: &State<AppState>,
) -> Result<Json<UserView>, ApiError> {
    state
        .store
        .find_by_id(id)
        .await
        .map(|u| Json(u.view()))
        .ok_or_else(|| Error::user_not_found_by_id(id).into())
}

/// Fetch a user by username
#[rocket::get("/username/<username>")]
pub async fn get_user_by_username(
    username: &str,
    _caller: Authenticated,
    state: &State<AppState>,
) -> Result<Json<UserView>, ApiError> {
    state
        .store
        .find_by_username(username)
        .await
        .map(|u| Json(u.view()))
        .ok_or_else(|| Error::user_not_found_by_username(username).into())
}

/// Create a user
#[rocket::post("/", data = "<request>")]
pub async fn create_user(
    caller: Authenticated,
    state: &State<AppState>,
    request: Json<UserCreateRequest>,
) -> Result<status::Created<Json<UserView>>, ApiError> {
    caller.require_any(Role::USER_ADMINS)?;
    let new_user = request.into_inner().into_new_user()?;

    if state.store.find_by_username(&new_user.username).await.is_some() {
        return Err(Error::duplicate_user("username", new_user.username).into());
    }

    let hash = hash_password(state, new_user.password).await?;
    let saved = state
        .store
        .save(UserRecord::new(
            new_user.name,
            new_user.email,
            Some(new_user.age),
            new_user.username,
            hash,
            new_user.role,
        ))
        .await?;

    let id = saved.id.unwrap_or_default();
    info!(id, username = %saved.username, by = %caller.username, "Created user");
    Ok(status::Created::new(format!("{USERS_BASE_PATH}/{id}")).body(Json(saved.view())))
}

/// Partially update a user's name, email or age
#[rocket::put("/<id>", data = "<request>")]
pub async fn update_user(
    id: u64,
    caller: Authenticated,
    state: &State<AppState>,
    request: Json<UserUpdateRequest>,
) -> Result<Json<UserView>, ApiError> {
    caller.require_any(Role::USER_EDITORS)?;
    let update = request.into_inner();
    validate_body(&update)?;

    let mut user = state
        .store
        .find_by_id(id)
        .await
        .ok_or_else(|| Error::user_not_found_by_id(id))?;

    if let Some(name) = update.name {
        user.name = name;
    }
    if let Some(email) = update.email {
        user.email = email;
    }
    if let Some(age) = update.age {
        user.age = u32::try_from(age).ok();
    }

    let saved = state.store.save(user).await?;
    info!(id, by = %caller.username, "Updated user");
    Ok(Json(saved.view()))
}

/// Delete a user
#[rocket::delete("/<id>")]
pub async fn delete_user(
    id: u64,
    caller: Authenticated,
    state: &State<AppState>,
) -> Result<Status, ApiError> {
    caller.require_any(Role::USER_ADMINS)?;

    if state.store.delete_by_id(id).await {
        info!(id, by = %caller.username, "Deleted user");
        Ok(Status::NoContent)
    } else {
        Err(Error::user_not_found_by_id(id).into())
    }
}
