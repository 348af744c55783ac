//! Server configuration parsed from environment variables.
//!
//! Every value has a default so a bare `cargo leptos watch` works. Unparsable
//! numbers fall back to their default; only values that would make the
//! server unsafe or unusable are rejected.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use rand::Rng;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
pub const DEFAULT_SESSION_MAX_AGE_DAYS: i64 = 30;
pub const DEFAULT_BACKEND_API_URL: &str = "http://localhost:3001";
pub const DEFAULT_BACKEND_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `SESSION_SECRET` is set but blank.
    #[error("SESSION_SECRET is set but empty")]
    EmptySessionSecret,

    /// `BACKEND_API_URL` is not an http(s) URL.
    #[error("BACKEND_API_URL must start with http:// or https://, got {0:?}")]
    InvalidBackendUrl(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base URL without trailing slash.
    pub base_url: String,
    pub timeouts: BackendTimeouts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub secret: Vec<u8>,
    /// True when `SESSION_SECRET` was absent and a per-process key was drawn.
    pub secret_generated: bool,
    pub max_age_days: i64,
    pub cookie_secure: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub admin_username: String,
    pub admin_password: String,
    pub session: SessionConfig,
    pub backend: BackendConfig,
}

impl Config {
    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// See [`Config::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `SESSION_SECRET` is blank or
    /// `BACKEND_API_URL` is not an http(s) URL.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT);
        let admin_username = lookup("ADMIN_USERNAME").unwrap_or_else(|| DEFAULT_ADMIN_USERNAME.to_owned());
        let admin_password = lookup("ADMIN_PASSWORD").unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_owned());

        let (secret, secret_generated) = match lookup("SESSION_SECRET") {
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptySessionSecret),
            Some(raw) => (raw.into_bytes(), false),
            None => (random_secret(), true),
        };
        let max_age_days = parse_or(&lookup, "SESSION_MAX_AGE_DAYS", DEFAULT_SESSION_MAX_AGE_DAYS);
        let max_age_days = if max_age_days > 0 { max_age_days } else { DEFAULT_SESSION_MAX_AGE_DAYS };
        let cookie_secure = lookup("COOKIE_SECURE")
            .as_deref()
            .and_then(parse_bool)
            .unwrap_or(false);

        let base_url = lookup("BACKEND_API_URL")
            .unwrap_or_else(|| DEFAULT_BACKEND_API_URL.to_owned())
            .trim()
            .trim_end_matches('/')
            .to_owned();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBackendUrl(base_url));
        }
        let timeouts = BackendTimeouts {
            request_secs: parse_or(&lookup, "BACKEND_REQUEST_TIMEOUT_SECS", DEFAULT_BACKEND_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_or(&lookup, "BACKEND_CONNECT_TIMEOUT_SECS", DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self {
            port,
            admin_username,
            admin_password,
            session: SessionConfig { secret, secret_generated, max_age_days, cookie_secure },
            backend: BackendConfig { base_url, timeouts },
        })
    }
}

/// Parse a boolean flag: `1/true/yes/on` or `0/false/no/off`, case-insensitive.
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_or<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    lookup(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn random_secret() -> Vec<u8> {
    let bytes: [u8; 32] = rand::rng().random();
    bytes.to_vec()
}
