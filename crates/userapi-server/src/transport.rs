//! Rocket assembly and launch

use crate::auth::AuthenticationFilter;
use crate::constants::{AUTH_BASE_PATH, HSTS_POLICY, USERS_BASE_PATH};
use crate::error::default_catcher;
use crate::handlers::{auth, health, users};
use crate::state::AppState;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::{Build, Request, Response, Rocket, catchers, routes};
use std::sync::Arc;
use tracing::info;
use userapi_infrastructure::config::ServerConfig;

/// Build the Rocket application around `state`
///
/// The bearer filter is attached as a fairing and also managed so request
/// guards can reach it.
pub fn build_rocket(state: AppState) -> Rocket<Build> {
    let filter = AuthenticationFilter::new(Arc::clone(&state.tokens));

    rocket::build()
        .manage(state)
        .manage(filter.clone())
        .attach(filter)
        .attach(SecurityHeaders)
        .mount(AUTH_BASE_PATH, routes![auth::register, auth::login])
        .mount(
            USERS_BASE_PATH,
            routes![
                users::list_users,
                users::get_user,
                users::get_user_by_username,
                users::create_user,
                users::update_user,
                users::delete_user,
            ],
        )
        .mount("/", routes![health::health, health::info])
        .register("/", catchers![default_catcher])
}

/// Launch the application and serve until shutdown
pub async fn launch(
    state: AppState,
    server: &ServerConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    info!(host = %server.host, port = server.port, "HTTP server listening");

    let figment = rocket::Config::figment()
        .merge(("address", server.host.clone()))
        .merge(("port", server.port));

    build_rocket(state)
        .configure(figment)
        .launch()
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    Ok(())
}

/// Adds hardening headers to every response
pub struct SecurityHeaders;

#[rocket::async_trait]
impl Fairing for SecurityHeaders {
    fn info(&self) -> Info {
        Info {
            name: "Security Headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("X-Content-Type-Options", "nosniff"));
        response.set_header(Header::new("X-Frame-Options", "DENY"));
        response.set_header(Header::new("Strict-Transport-Security", HSTS_POLICY));
    }
}
