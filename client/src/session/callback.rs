//! OAuth Redirect Handler.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend finishes the provider exchange and sends the browser back to
//! the callback route with the tokens in the query string. This module turns
//! that one visit into at most one session: persist tokens, resolve the
//! profile, log in, then hand the page a redirect target.
//!
//! ```text
//! Idle -> Processing -> Success -------\
//!      \-> NoToken ---------------------> redirect home
//!      \-> ProviderError ---------------/
//! ```
//!
//! The handler belongs to a single page visit. Its entry guard flips before
//! the first suspension point, so re-renders or a second subscription during
//! the same visit are suppressed instead of fetching and logging in twice.

#[cfg(test)]
#[path = "callback_test.rs"]
mod callback_test;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

use super::controller::SessionController;
use super::store::CredentialBackend;
use crate::error::AuthError;
use crate::net::api::AuthApi;
use crate::net::types::{Credentials, User};

/// Where every terminal callback state sends the browser.
pub const HOME_ROUTE: &str = "/";

/// Query parameters the backend appends to the callback URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallbackParams {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub error: Option<String>,
}

impl CallbackParams {
    /// Collect the parameters through `lookup`; empty values count as absent.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Self { access_token: get("access_token"), refresh_token: get("refresh_token"), error: get("error") }
    }

    /// Build from decoded key/value pairs. The first occurrence of a key wins.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let pairs: Vec<(&str, &str)> = pairs.into_iter().collect();
        Self::from_lookup(|key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned()))
    }

    /// Decide what the visit carries: an error wins over tokens.
    ///
    /// # Errors
    ///
    /// [`AuthError::Provider`] when `error` is set, [`AuthError::MissingToken`]
    /// when there is no access token.
    pub fn credentials(&self) -> Result<Credentials, AuthError> {
        if let Some(error) = &self.error {
            return Err(AuthError::Provider(error.clone()));
        }
        let access_token = self.access_token.clone().ok_or(AuthError::MissingToken)?;
        Ok(Credentials { access_token, refresh_token: self.refresh_token.clone() })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CallbackPhase {
    #[default]
    Idle,
    Processing,
    Success,
    NoToken,
    ProviderError,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// A session was established. `placeholder` is set when the profile
    /// could not be resolved and the degraded identity was used.
    SignedIn { user: User, placeholder: bool },
    NoToken,
    ProviderError(String),
    /// This visit was already handled.
    Suppressed,
}

impl CallbackOutcome {
    /// Route to navigate to, or `None` when another invocation owns navigation.
    #[must_use]
    pub fn redirect_to(&self) -> Option<&'static str> {
        match self {
            Self::Suppressed => None,
            _ => Some(HOME_ROUTE),
        }
    }
}

#[derive(Debug, Default)]
pub struct CallbackHandler {
    has_run: AtomicBool,
    phase: RwLock<CallbackPhase>,
}

impl CallbackHandler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> CallbackPhase {
        *self.phase.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run the callback transition for this visit.
    ///
    /// Tokens are persisted before the profile fetch, and `login` completes
    /// before this returns, so the caller may navigate as soon as it resolves.
    /// A profile failure still logs in, with the placeholder identity.
    pub async fn handle<B, A>(&self, params: &CallbackParams, session: &SessionController<B, A>) -> CallbackOutcome
    where
        B: CredentialBackend,
        A: AuthApi,
    {
        if self.has_run.swap(true, Ordering::AcqRel) {
            leptos::logging::log!("auth callback already handled for this visit");
            return CallbackOutcome::Suppressed;
        }

        let credentials = match params.credentials() {
            Ok(credentials) => credentials,
            Err(AuthError::Provider(error)) => {
                leptos::logging::error!("OAuth error from provider: {error}");
                self.set_phase(CallbackPhase::ProviderError);
                return CallbackOutcome::ProviderError(error);
            }
            Err(e) => {
                leptos::logging::log!("{e}, redirecting home");
                self.set_phase(CallbackPhase::NoToken);
                return CallbackOutcome::NoToken;
            }
        };

        self.set_phase(CallbackPhase::Processing);
        session.store().save_credentials(&credentials);

        let (user, placeholder) = match session.api().fetch_profile(&credentials.access_token).await {
            Ok(user) => (user, false),
            Err(e) => {
                leptos::logging::warn!("{e}; signing in with placeholder profile");
                (User::placeholder(), true)
            }
        };

        session.login(user.clone());
        self.set_phase(CallbackPhase::Success);
        CallbackOutcome::SignedIn { user, placeholder }
    }

    fn set_phase(&self, next: CallbackPhase) {
        *self.phase.write().unwrap_or_else(PoisonError::into_inner) = next;
    }
}
