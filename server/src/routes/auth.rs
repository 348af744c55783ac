//! Auth routes: login, logout, current operator, and the session extractor.

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use curator_client::net::types::{ErrorBody, LoginRequest, SessionUser};
use time::{Duration, OffsetDateTime};

use crate::services::session::SessionClaims;
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";

fn session_cookie(value: String, max_age: Duration, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(max_age)
        .build()
}

/// Verify the session cookie carried in `jar`, if any.
pub(crate) fn session_from_jar(state: &AppState, jar: &CookieJar) -> Option<SessionClaims> {
    let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
    if token.is_empty() {
        return None;
    }
    match state.signer.verify(token, OffsetDateTime::now_utc()) {
        Ok(claims) => Some(claims),
        Err(e) => {
            tracing::debug!(error = %e, "session cookie rejected");
            None
        }
    }
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated operator extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: SessionUser,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let app_state = AppState::from_ref(state);
        let claims = session_from_jar(&app_state, &jar).ok_or(StatusCode::UNAUTHORIZED)?;
        Ok(Self { user: claims.user() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/auth/login`: check credentials, set the session cookie.
pub async fn login(State(state): State<AppState>, jar: CookieJar, Json(body): Json<LoginRequest>) -> Response {
    let user = match state.admin.verify(&body.username, &body.password) {
        Ok(user) => user,
        Err(e) => {
            tracing::info!(error = %e, "login rejected");
            return (StatusCode::UNAUTHORIZED, Json(ErrorBody { error: e.to_string() })).into_response();
        }
    };

    let token = match state.signer.issue(&user, OffsetDateTime::now_utc()) {
        Ok(token) => token,
        Err(e) => {
            tracing::error!(error = %e, "session issue failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    tracing::info!(user = %user.name, "operator logged in");
    let cookie = session_cookie(token, state.signer.max_age(), state.cookie_secure());
    (jar.add(cookie), Json(user)).into_response()
}

/// `GET /api/auth/me`: the operator behind the current session.
pub async fn me(auth: AuthUser) -> Json<SessionUser> {
    Json(auth.user)
}

/// `POST /api/auth/logout`: clear the session cookie. Needs no valid session.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let cookie = session_cookie(String::new(), Duration::ZERO, state.cookie_secure());
    (jar.add(cookie), StatusCode::NO_CONTENT)
}
