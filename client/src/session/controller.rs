//! Session State Holder and Context Publisher.
//!
//! SYSTEM CONTEXT
//! ==============
//! One controller exists per application load. It owns the credential store
//! and the backend API, computes `SessionState` once at startup, and then only
//! changes it through `login` and `logout`. Every change is pushed to a single
//! observer; the Leptos app points that observer at an `RwSignal` so pages
//! re-render.
//!
//! CONCURRENCY
//! ===========
//! Execution is single-threaded and cooperative; network calls are the only
//! suspension points. `initialize` may still be awaiting its profile fetch
//! when the callback page logs a user in, so each explicit transition bumps a
//! generation counter and a startup result computed against an older
//! generation is dropped instead of published.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use super::store::{CredentialBackend, CredentialStore};
use crate::net::api::AuthApi;
use crate::net::types::User;
use crate::state::auth::SessionState;

type StateObserver = Box<dyn Fn(&SessionState) + Send + Sync>;

pub struct SessionController<B, A> {
    store: CredentialStore<B>,
    api: A,
    state: RwLock<SessionState>,
    initialized: AtomicBool,
    generation: AtomicU64,
    observer: Option<StateObserver>,
}

impl<B: CredentialBackend, A: AuthApi> SessionController<B, A> {
    pub fn new(store: CredentialStore<B>, api: A) -> Self {
        Self {
            store,
            api,
            state: RwLock::new(SessionState::loading()),
            initialized: AtomicBool::new(false),
            generation: AtomicU64::new(0),
            observer: None,
        }
    }

    /// Register the callback that receives every published state.
    #[must_use]
    pub fn with_observer<F>(mut self, observer: F) -> Self
    where
        F: Fn(&SessionState) + Send + Sync + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.state.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn store(&self) -> &CredentialStore<B> {
        &self.store
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Compute the startup state from persisted credentials. Runs once per
    /// controller; later calls return the current state untouched.
    pub async fn initialize(&self) -> SessionState {
        if self.initialized.swap(true, Ordering::AcqRel) {
            return self.state();
        }
        let generation = self.generation.load(Ordering::Acquire);

        let cached_user = self.store.load_user();
        let access_token = self.store.access_token();

        let next = match (cached_user, access_token) {
            (None, Some(token)) => match self.api.fetch_profile(&token).await {
                Ok(user) => {
                    if self.is_stale(generation) {
                        return self.state();
                    }
                    self.store.save_user(&user);
                    leptos::logging::log!("session restored from token for user {}", user.id);
                    SessionState::signed_in(user)
                }
                Err(e) => {
                    if self.is_stale(generation) {
                        return self.state();
                    }
                    leptos::logging::warn!("session restore failed, signing out: {e}");
                    self.store.clear();
                    SessionState::signed_out()
                }
            },
            (user, token) => SessionState::restored(user, token.is_some()),
        };

        self.publish(next.clone());
        next
    }

    /// Establish the session for `user`. Tokens must already be stored.
    pub fn login(&self, user: User) {
        self.store.save_user(&user);
        self.generation.fetch_add(1, Ordering::AcqRel);
        leptos::logging::log!("signed in as {}", user.id);
        self.publish(SessionState::signed_in(user));
    }

    /// End the session: best-effort remote logout, then unconditional local
    /// cleanup. Cleanup also runs if this future is dropped mid-request.
    pub async fn logout(&self) {
        let cleanup = LogoutCleanup { controller: self };

        match self.store.access_token() {
            Some(token) => {
                if let Err(e) = self.api.logout(&token).await {
                    leptos::logging::warn!("{e}; clearing local session anyway");
                }
            }
            None => leptos::logging::log!("no access token stored, skipping remote logout"),
        }

        drop(cleanup);
    }

    fn finish_logout(&self) {
        self.store.clear();
        self.generation.fetch_add(1, Ordering::AcqRel);
        leptos::logging::log!("signed out");
        self.publish(SessionState::signed_out());
    }

    fn is_stale(&self, generation: u64) -> bool {
        let stale = self.generation.load(Ordering::Acquire) != generation;
        if stale {
            leptos::logging::log!("discarding startup session result superseded by login/logout");
        }
        stale
    }

    fn publish(&self, next: SessionState) {
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = next.clone();
        if let Some(observer) = &self.observer {
            observer(&next);
        }
    }
}

struct LogoutCleanup<'a, B: CredentialBackend, A: AuthApi> {
    controller: &'a SessionController<B, A>,
}

impl<B: CredentialBackend, A: AuthApi> Drop for LogoutCleanup<'_, B, A> {
    fn drop(&mut self) {
        self.controller.finish_logout();
    }
}
