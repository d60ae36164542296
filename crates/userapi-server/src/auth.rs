//! Bearer token authentication
//!
//! [`AuthenticationFilter`] runs as a request fairing: it reads the
//! `Authorization: Bearer <token>` header once per request, validates the
//! token leniently and caches the resulting [`AuthContext`] in request-local
//! state. It never rejects a request. Handlers opt into enforcement through
//! the [`Authenticated`] guard (401 when absent) and
//! [`Identity::require_any`] (403 when the role does not match).

use crate::error::ApiError;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Status;
use rocket::outcome::Outcome;
use rocket::request::{self, FromRequest, Request};
use rocket::Data;
use std::sync::Arc;
use tracing::debug;
use userapi_domain::value_objects::{AuthContext, Identity};
use userapi_infrastructure::TokenCodec;
use userapi_infrastructure::constants::{AUTHORIZATION_HEADER, BEARER_PREFIX};

/// Extract the token from an `Authorization` header value
///
/// Only the exact `Bearer ` prefix is recognized; anything else means no
/// token was presented.
pub fn bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Resolves request identities from bearer tokens
#[derive(Debug, Clone)]
pub struct AuthenticationFilter {
    codec: Arc<TokenCodec>,
}

impl AuthenticationFilter {
    /// Create a filter validating with `codec`
    pub fn new(codec: Arc<TokenCodec>) -> Self {
        Self { codec }
    }

    /// Identity asserted by an `Authorization` header value, if valid
    ///
    /// Missing headers, other schemes, and invalid or expired tokens all
    /// yield `None`.
    pub fn authenticate(&self, header: Option<&str>) -> Option<Identity> {
        let token = header.and_then(bearer_token)?;

        if !self.codec.validate(token) {
            return None;
        }

        // Validated above, so signature-only decoding cannot fail here
        let claims = self.codec.decode_claims(token).ok()?;
        debug!(username = %claims.sub, "Authenticated bearer token");
        Some(Identity::new(claims.sub, claims.role))
    }

    /// Context for `request`, computed on first use and cached afterwards
    pub fn context<'r>(&self, request: &'r Request<'_>) -> &'r AuthContext {
        request.local_cache(|| {
            let header = request.headers().get_one(AUTHORIZATION_HEADER);
            self.authenticate(header)
                .map_or_else(AuthContext::anonymous, AuthContext::authenticated)
        })
    }
}

#[rocket::async_trait]
impl Fairing for AuthenticationFilter {
    fn info(&self) -> Info {
        Info {
            name: "Bearer Authentication",
            kind: Kind::Request,
        }
    }

    async fn on_request(&self, request: &mut Request<'_>, _data: &mut Data<'_>) {
        self.context(request);
    }
}

/// Cached context, or anonymous when no filter is managed
fn resolve_context<'r>(request: &'r Request<'_>) -> &'r AuthContext {
    match request.rocket().state::<AuthenticationFilter>() {
        Some(filter) => filter.context(request),
        None => request.local_cache(AuthContext::anonymous),
    }
}

/// Guard exposing the request's [`AuthContext`]; never fails
#[derive(Debug, Clone)]
pub struct RequestAuth(pub AuthContext);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for RequestAuth {
    type Error = std::convert::Infallible;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        Outcome::Success(Self(resolve_context(request).clone()))
    }
}

/// Guard requiring an authenticated [`Identity`]; 401 otherwise
#[derive(Debug, Clone)]
pub struct Authenticated(pub Identity);

impl std::ops::Deref for Authenticated {
    type Target = Identity;

    fn deref(&self) -> &Identity {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Authenticated {
    type Error = ApiError;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        match resolve_context(request).identity() {
            Some(identity) => Outcome::Success(Self(identity.clone())),
            None => Outcome::Error((Status::Unauthorized, ApiError::unauthorized())),
        }
    }
}
