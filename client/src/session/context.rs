//! Session Context Publisher for the Leptos component tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one `AuthContext` and provides it; pages and the header read
//! it with `expect_context`. Consumers get a read-only signal plus the
//! callback and logout transitions, never the writable signal, the
//! controller, or the storage layer itself.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::sync::Arc;

use leptos::prelude::*;

use super::callback::{CallbackHandler, CallbackOutcome, CallbackParams};
use super::controller::SessionController;
use super::store::{BrowserBackend, CredentialStore};
use crate::config::ClientConfig;
use crate::net::api::HttpAuthApi;
use crate::state::auth::SessionState;

/// The controller the browser app runs with.
pub type AppSession = SessionController<BrowserBackend, HttpAuthApi>;

#[derive(Clone)]
pub struct AuthContext {
    state: ReadSignal<SessionState>,
    session: Arc<AppSession>,
    config: ClientConfig,
}

impl AuthContext {
    /// Wire a browser-backed controller to a fresh state signal.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        let (state, set_state) = signal(SessionState::loading());
        let session = SessionController::new(CredentialStore::new(BrowserBackend), HttpAuthApi::new(config.clone()))
            .with_observer(move |next| set_state.set(next.clone()));
        Self { state, session: Arc::new(session), config }
    }

    /// Reactive, read-only view of the session.
    #[must_use]
    pub fn state(&self) -> ReadSignal<SessionState> {
        self.state
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Restore the session from storage. Safe to call on every mount; the
    /// controller only does the work once.
    pub fn initialize(&self) {
        #[cfg(feature = "hydrate")]
        {
            let session = Arc::clone(&self.session);
            leptos::task::spawn_local(async move {
                session.initialize().await;
            });
        }
    }

    /// Run `handler` for this callback visit against the app session. The
    /// session is logged in (or left alone) before the outcome resolves.
    pub async fn handle_callback(&self, handler: &CallbackHandler, params: &CallbackParams) -> CallbackOutcome {
        handler.handle(params, &*self.session).await
    }

    /// Start a logout. Local state is cleared once the remote call settles.
    pub fn logout(&self) {
        #[cfg(feature = "hydrate")]
        {
            let session = Arc::clone(&self.session);
            leptos::task::spawn_local(async move {
                session.logout().await;
            });
        }
    }
}
