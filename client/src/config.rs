//! Backend endpoint and credential policy configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend base URL is baked in at build time from `PUBLIC_BASE_URL`, the
//! same way the WASM bundle receives every other public setting. Endpoint
//! paths and token lifetimes are fixed by the backend contract.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Base URL used when `PUBLIC_BASE_URL` was not set at build time.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Browser entry point of the backend-driven Google OAuth flow.
pub const GOOGLE_LOGIN_ENDPOINT: &str = "/api/auth/google/login/";
/// Canonical profile of the bearer token's owner.
pub const PROFILE_ENDPOINT: &str = "/api/auth/profile/";
/// Server-side logout for the bearer token.
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout/";

/// Access token cookie lifetime: 7 days.
pub const ACCESS_TOKEN_TTL_SECS: u64 = 7 * 24 * 60 * 60;
/// Refresh token cookie lifetime: 30 days.
pub const REFRESH_TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

const DEFAULT_LOGOUT_TIMEOUT: Duration = Duration::from_secs(5);

/// Client-side view of the backend it talks to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    /// Upper bound on the best-effort remote logout request.
    pub logout_timeout: Duration,
}

impl ClientConfig {
    /// Build a config for an explicit backend base URL.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: normalize_base_url(base_url), logout_timeout: DEFAULT_LOGOUT_TIMEOUT }
    }

    /// Build the config from the `PUBLIC_BASE_URL` value captured at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(option_env!("PUBLIC_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an endpoint path onto the base URL.
    #[must_use]
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }

    #[must_use]
    pub fn login_url(&self) -> String {
        self.api_url(GOOGLE_LOGIN_ENDPOINT)
    }

    #[must_use]
    pub fn profile_url(&self) -> String {
        self.api_url(PROFILE_ENDPOINT)
    }

    #[must_use]
    pub fn logout_url(&self) -> String {
        self.api_url(LOGOUT_ENDPOINT)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_BASE_URL.to_owned() } else { trimmed.to_owned() }
}
