//! Client for the backend of record (articles, stats, logs, settings, jobs).
//!
//! DESIGN
//! ======
//! Routes depend on the [`BackendApi`] trait, not on `reqwest`, so handlers
//! can be exercised against an in-memory backend. [`HttpBackend`] is the only
//! production implementation.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses into one of three kinds the proxy reports:
//! the backend could not be reached, it answered non-2xx, or its body did not
//! decode into the expected shape.

#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;

use std::time::Duration;

use curator_client::net::types::{
    ActionMessage, ArticleAction, ArticlesResponse, DashboardStats, Job, LogsResponse, Settings,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::config::BackendConfig;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum BackendError {
    /// Transport failure: connect error, timeout, reset.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// The backend answered with a non-success status.
    #[error("backend returned {status}")]
    Status { status: u16 },

    /// The body could not be decoded.
    #[error("backend response malformed: {0}")]
    Malformed(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Query accepted by `GET /api/articles` and forwarded as-is. Blank
/// parameters (`?status=&limit=`) count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticlesQuery {
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Query accepted by `GET /api/logs`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogsQuery {
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match Option::<String>::deserialize(deserializer)?.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Operations the dashboard needs from the backend of record.
#[async_trait::async_trait]
pub trait BackendApi: Send + Sync {
    async fn list_articles(&self, query: &ArticlesQuery) -> Result<ArticlesResponse, BackendError>;

    async fn decide_article(&self, article_id: i64, action: ArticleAction) -> Result<ActionMessage, BackendError>;

    async fn stats(&self) -> Result<DashboardStats, BackendError>;

    async fn logs(&self, query: LogsQuery) -> Result<LogsResponse, BackendError>;

    async fn settings(&self) -> Result<Settings, BackendError>;

    async fn save_settings(&self, settings: &Settings) -> Result<ActionMessage, BackendError>;

    async fn trigger(&self, job: Job) -> Result<ActionMessage, BackendError>;
}

/// `reqwest` implementation of [`BackendApi`].
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Build a client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::HttpClientBuild`] if the TLS/HTTP stack fails
    /// to initialize.
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| BackendError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.trim_end_matches('/').to_owned() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T, BackendError> {
        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Unavailable(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status { status: status.as_u16() });
        }
        let body = response
            .bytes()
            .await
            .map_err(|e| BackendError::Unavailable(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| BackendError::Malformed(e.to_string()))
    }
}

#[async_trait::async_trait]
impl BackendApi for HttpBackend {
    async fn list_articles(&self, query: &ArticlesQuery) -> Result<ArticlesResponse, BackendError> {
        self.send(self.http.get(self.url("/api/articles")).query(query))
            .await
    }

    async fn decide_article(&self, article_id: i64, action: ArticleAction) -> Result<ActionMessage, BackendError> {
        let path = format!("/api/articles/{article_id}/{}", action.path_segment());
        self.send(self.http.post(self.url(&path))).await
    }

    async fn stats(&self) -> Result<DashboardStats, BackendError> {
        self.send(self.http.get(self.url("/api/stats"))).await
    }

    async fn logs(&self, query: LogsQuery) -> Result<LogsResponse, BackendError> {
        self.send(self.http.get(self.url("/api/logs")).query(&query))
            .await
    }

    async fn settings(&self) -> Result<Settings, BackendError> {
        self.send(self.http.get(self.url("/api/settings"))).await
    }

    async fn save_settings(&self, settings: &Settings) -> Result<ActionMessage, BackendError> {
        self.send(self.http.post(self.url("/api/settings")).json(settings))
            .await
    }

    async fn trigger(&self, job: Job) -> Result<ActionMessage, BackendError> {
        let path = format!("/api/{}", job.path_segment());
        self.send(self.http.post(self.url(&path))).await
    }
}
