//! Public health and info endpoints

use crate::constants::APP_NAME;
use crate::state::AppState;
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::Json;
use serde::Serialize;
use std::collections::BTreeMap;
use userapi_infrastructure::health::{HealthCheck, HealthStatus, USER_STORE_CHECK, check_user_store};

/// Aggregated health report
#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// Overall status
    pub status: HealthStatus,
    /// Individual component checks
    pub components: BTreeMap<String, HealthCheck>,
}

/// Application information
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub name: &'static str,
    pub version: &'static str,
}

/// Report store health; 503 when any component is down
#[rocket::get("/health")]
pub async fn health(state: &State<AppState>) -> (Status, Json<HealthReport>) {
    let check = check_user_store(&state.store).await;
    let status = check.status;

    let mut components = BTreeMap::new();
    components.insert(USER_STORE_CHECK.to_string(), check);

    let http_status = if status.is_healthy() {
        Status::Ok
    } else {
        Status::ServiceUnavailable
    };
    (http_status, Json(HealthReport { status, components }))
}

/// Application name and version
#[rocket::get("/info")]
pub fn info() -> Json<InfoResponse> {
    Json(InfoResponse {
        name: APP_NAME,
        version: env!("CARGO_PKG_VERSION"),
    })
}
