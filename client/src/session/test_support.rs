//! Scripted `AuthApi` double shared by the session tests.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use async_trait::async_trait;

use super::store::{CredentialStore, MemoryBackend};
use crate::error::{AuthError, ProfileFetchFailure};
use crate::net::api::AuthApi;
use crate::net::types::User;

/// Suspends exactly once so concurrent callers get a chance to interleave.
struct YieldNow(bool);

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

pub struct FakeApi {
    profile: Result<User, AuthError>,
    logout: Result<(), AuthError>,
    pub profile_calls: AtomicUsize,
    pub logout_calls: AtomicUsize,
    pub tokens_seen: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn returning(user: User) -> Self {
        Self::with(Ok(user), Ok(()))
    }

    pub fn failing_profile() -> Self {
        Self::with(Err(ProfileFetchFailure::Status(500).into()), Ok(()))
    }

    pub fn failing_logout() -> Self {
        Self::with(Ok(ada()), Err(AuthError::LogoutCall("connection reset".to_owned())))
    }

    fn with(profile: Result<User, AuthError>, logout: Result<(), AuthError>) -> Self {
        Self {
            profile,
            logout,
            profile_calls: AtomicUsize::new(0),
            logout_calls: AtomicUsize::new(0),
            tokens_seen: Mutex::new(Vec::new()),
        }
    }

    pub fn profile_calls(&self) -> usize {
        self.profile_calls.load(Ordering::SeqCst)
    }

    pub fn logout_calls(&self) -> usize {
        self.logout_calls.load(Ordering::SeqCst)
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeApi {
    async fn fetch_profile(&self, access_token: &str) -> Result<User, AuthError> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        self.tokens_seen.lock().unwrap().push(access_token.to_owned());
        YieldNow(false).await;
        self.profile.clone()
    }

    async fn logout(&self, access_token: &str) -> Result<(), AuthError> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        self.tokens_seen.lock().unwrap().push(access_token.to_owned());
        YieldNow(false).await;
        self.logout.clone()
    }
}

pub fn ada() -> User {
    User {
        id: "42".to_owned(),
        name: "Ada Lovelace".to_owned(),
        email: "ada@x.com".to_owned(),
        avatar: None,
    }
}

/// A store over a shared backend, so a second store can simulate a fresh load.
pub fn shared_store() -> (Arc<MemoryBackend>, CredentialStore<Arc<MemoryBackend>>) {
    let backend = Arc::new(MemoryBackend::new());
    (backend.clone(), CredentialStore::new(backend))
}
