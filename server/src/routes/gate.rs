//! Page gate: redirects UI page requests by session presence.
//!
//! Runs in front of the SSR routes only. API routes enforce sessions through
//! the [`AuthUser`](super::auth::AuthUser) extractor instead.

#[cfg(test)]
#[path = "gate_test.rs"]
mod tests;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

use crate::routes::auth::session_from_jar;
use crate::state::AppState;

pub(crate) const LOGIN_PATH: &str = "/login";
pub(crate) const HOME_PATH: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GateDecision {
    Pass,
    Redirect(&'static str),
}

/// Where a page request for `path` goes, given whether it carries a valid session.
pub(crate) fn gate_decision(path: &str, has_session: bool) -> GateDecision {
    let is_login = path.trim_end_matches('/') == LOGIN_PATH;
    match (is_login, has_session) {
        (true, true) => GateDecision::Redirect(HOME_PATH),
        (false, false) => GateDecision::Redirect(LOGIN_PATH),
        _ => GateDecision::Pass,
    }
}

/// Middleware applied with `axum::middleware::from_fn_with_state`.
pub async fn page_gate(State(state): State<AppState>, jar: CookieJar, request: Request, next: Next) -> Response {
    let has_session = session_from_jar(&state, &jar).is_some();
    match gate_decision(request.uri().path(), has_session) {
        GateDecision::Pass => next.run(request).await,
        GateDecision::Redirect(to) => {
            tracing::debug!(path = request.uri().path(), to, "page gate redirect");
            Redirect::to(to).into_response()
        }
    }
}
