//! REST calls to the authentication backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and tests: stubs reporting the network as unavailable,
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns an `AuthError` instead of panicking so profile and
//! logout failures degrade session state without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::User;
use crate::config::ClientConfig;
use crate::error::AuthError;
#[cfg(not(feature = "hydrate"))]
use crate::error::ProfileFetchFailure;

/// The two backend calls the session lifecycle depends on.
#[async_trait(?Send)]
pub trait AuthApi {
    /// Resolve the canonical user owning `access_token`.
    async fn fetch_profile(&self, access_token: &str) -> Result<User, AuthError>;

    /// Ask the backend to end the session for `access_token`.
    async fn logout(&self, access_token: &str) -> Result<(), AuthError>;
}

fn authorization_header(access_token: &str) -> String {
    format!("Bearer {access_token}")
}

/// `AuthApi` over the browser fetch API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAuthApi {
    config: ClientConfig,
}

impl HttpAuthApi {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn fetch_profile(&self, access_token: &str) -> Result<User, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            use crate::error::ProfileFetchFailure;

            let resp = gloo_net::http::Request::get(&self.config.profile_url())
                .header("Authorization", &authorization_header(access_token))
                .header("Content-Type", "application/json")
                .send()
                .await
                .map_err(|e| ProfileFetchFailure::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ProfileFetchFailure::Status(resp.status()).into());
            }
            let body = resp.text().await.map_err(|e| ProfileFetchFailure::Network(e.to_string()))?;
            Ok(super::profile::parse_profile(&body)?)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = authorization_header(access_token);
            Err(ProfileFetchFailure::Network("not available on server".to_owned()).into())
        }
    }

    async fn logout(&self, access_token: &str) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            use futures::future::{Either, select};

            let request = gloo_net::http::Request::post(&self.config.logout_url())
                .header("Authorization", &authorization_header(access_token))
                .header("Content-Type", "application/json")
                .send();
            let timeout = gloo_timers::future::sleep(self.config.logout_timeout);
            match select(std::pin::pin!(request), std::pin::pin!(timeout)).await {
                Either::Left((Ok(resp), _)) if resp.ok() => Ok(()),
                Either::Left((Ok(resp), _)) => Err(AuthError::LogoutCall(format!("status {}", resp.status()))),
                Either::Left((Err(e), _)) => Err(AuthError::LogoutCall(e.to_string())),
                Either::Right(((), _)) => Err(AuthError::LogoutCall(format!(
                    "timed out after {} ms",
                    self.config.logout_timeout.as_millis()
                ))),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = authorization_header(access_token);
            Err(AuthError::LogoutCall("not available on server".to_owned()))
        }
    }
}

/// Send the browser to the backend's Google login entry point.
///
/// The provider exchange that follows is entirely backend-controlled; the
/// browser comes back on the callback route.
pub fn redirect_to_login(config: &ClientConfig) {
    let url = config.login_url();
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(&url) {
                leptos::logging::error!("login redirect failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
