//! REST helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch failures
//! degrade a single widget instead of crashing hydration. Error strings are
//! for logs and notifications only; nothing branches on their text.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::types::{ArticlesResponse, LoginRequest, LogsResponse};
use super::types::{
    ActionMessage, Article, ArticleAction, DashboardStats, Job, LogEntry, SessionUser, Settings, StatusFilter,
};

/// Why a login submission did not produce a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginFailure {
    /// The server rejected the credentials. Deliberately carries no detail.
    InvalidCredentials,
    /// The request did not complete (network, server error, bad body).
    Unavailable(String),
}

#[cfg(any(test, feature = "hydrate"))]
fn articles_endpoint(filter: Option<StatusFilter>, limit: Option<u32>) -> String {
    let mut params = Vec::new();
    if let Some(filter) = filter {
        params.push(format!("status={}", filter.as_query_value()));
    }
    if let Some(limit) = limit {
        params.push(format!("limit={limit}"));
    }
    if params.is_empty() {
        "/api/articles".to_owned()
    } else {
        format!("/api/articles?{}", params.join("&"))
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn article_action_endpoint(article_id: i64, action: ArticleAction) -> String {
    format!("/api/articles/{article_id}/{}", action.path_segment())
}

#[cfg(any(test, feature = "hydrate"))]
fn logs_endpoint(limit: u32) -> String {
    format!("/api/logs?limit={limit}")
}

#[cfg(any(test, feature = "hydrate"))]
fn job_endpoint(job: Job) -> String {
    format!("/api/{}", job.path_segment())
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

/// Fetch the currently authenticated operator from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<SessionUser> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<SessionUser>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Submit credentials to `POST /api/auth/login`.
///
/// # Errors
///
/// Returns [`LoginFailure::InvalidCredentials`] on `401` and
/// [`LoginFailure::Unavailable`] for every other failure.
pub async fn login(username: &str, password: &str) -> Result<SessionUser, LoginFailure> {
    #[cfg(feature = "hydrate")]
    {
        let payload = LoginRequest { username: username.to_owned(), password: password.to_owned() };
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| LoginFailure::Unavailable(e.to_string()))?
            .send()
            .await
            .map_err(|e| LoginFailure::Unavailable(e.to_string()))?;
        if resp.status() == 401 {
            return Err(LoginFailure::InvalidCredentials);
        }
        if !resp.ok() {
            return Err(LoginFailure::Unavailable(request_failed_message("login", resp.status())));
        }
        resp.json::<SessionUser>()
            .await
            .map_err(|e| LoginFailure::Unavailable(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(LoginFailure::Unavailable("not available on server".to_owned()))
    }
}

/// Log out the current operator by calling `POST /api/auth/logout`.
///
/// # Errors
///
/// Returns an error string on transport failure or any non-2xx status; the
/// session cookie is then still in place.
pub async fn logout() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("logout", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch articles, optionally filtered by status and capped by `limit`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body cannot be decoded.
pub async fn fetch_articles(filter: Option<StatusFilter>, limit: Option<u32>) -> Result<Vec<Article>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = articles_endpoint(filter, limit);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("articles fetch", resp.status()));
        }
        let body: ArticlesResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.articles)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filter, limit);
        Err("not available on server".to_owned())
    }
}

/// Post an approve/reject decision for one article.
///
/// # Errors
///
/// Returns an error string on transport failure or any non-2xx status.
pub async fn post_article_action(article_id: i64, action: ArticleAction) -> Result<ActionMessage, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = article_action_endpoint(article_id, action);
        let resp = gloo_net::http::Request::post(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(action.path_segment(), resp.status()));
        }
        Ok(resp.json::<ActionMessage>().await.unwrap_or_default())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (article_id, action);
        Err("not available on server".to_owned())
    }
}

/// Fetch the aggregate counts from `/api/stats`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body cannot be decoded.
pub async fn fetch_stats() -> Result<DashboardStats, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/stats")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("stats fetch", resp.status()));
        }
        resp.json::<DashboardStats>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch the most recent `limit` activity log entries.
///
/// # Errors
///
/// Returns an error string if the request fails or the body cannot be decoded.
pub async fn fetch_logs(limit: u32) -> Result<Vec<LogEntry>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = logs_endpoint(limit);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("logs fetch", resp.status()));
        }
        let body: LogsResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.logs)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = limit;
        Err("not available on server".to_owned())
    }
}

/// Fetch the settings record from `/api/settings`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body cannot be decoded.
pub async fn fetch_settings() -> Result<Settings, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/settings")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("settings fetch", resp.status()));
        }
        resp.json::<Settings>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Overwrite the whole settings record via `POST /api/settings`.
///
/// # Errors
///
/// Returns an error string on transport failure or any non-2xx status.
pub async fn save_settings(settings: &Settings) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/settings")
            .json(settings)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("settings save", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = settings;
        Err("not available on server".to_owned())
    }
}

/// Ask the backend to start a job (`POST /api/search` or `/api/publish`).
///
/// # Errors
///
/// Returns an error string on transport failure or any non-2xx status.
pub async fn trigger_job(job: Job) -> Result<ActionMessage, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = job_endpoint(job);
        let resp = gloo_net::http::Request::post(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(job.path_segment(), resp.status()));
        }
        Ok(resp.json::<ActionMessage>().await.unwrap_or_default())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = job;
        Err("not available on server".to_owned())
    }
}
