//! Credential Store: tokens and cached profile across cookie and local storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tokens live in cookies so their lifetime is enforced by the browser via
//! `max-age`. The cached user lives in `localStorage`. Older builds kept the
//! tokens in `localStorage` too, so reads fall back there and logout clears
//! both layers.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort: when no browser storage exists (SSR, tests without
//! a backend) reads return `None` and writes are dropped, so callers never
//! branch on the execution environment.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::config::{ACCESS_TOKEN_TTL_SECS, REFRESH_TOKEN_TTL_SECS};
use crate::net::types::{Credentials, User};

/// Local storage key holding the JSON-encoded cached `User`.
pub const USER_KEY: &str = "user";
/// Cookie (and legacy local storage) key for the access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Cookie (and legacy local storage) key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Raw storage primitives the store is built on.
///
/// Implementations must treat every call as a single atomic write and must
/// not fail loudly; unavailable storage behaves as empty.
pub trait CredentialBackend {
    fn cookie(&self, name: &str) -> Option<String>;
    fn set_cookie(&self, name: &str, value: &str, max_age_secs: u64);
    fn remove_cookie(&self, name: &str);
    fn local_item(&self, key: &str) -> Option<String>;
    fn set_local_item(&self, key: &str, value: &str);
    fn remove_local_item(&self, key: &str);
}

// =============================================================================
// STORE
// =============================================================================

/// Typed access to persisted credentials and the cached profile.
#[derive(Debug, Default)]
pub struct CredentialStore<B> {
    backend: B,
}

impl<B: CredentialBackend> CredentialStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }

    /// Read `name` from cookies first, then from local storage.
    pub fn read(&self, name: &str) -> Option<String> {
        self.backend
            .cookie(name)
            .filter(|v| !v.is_empty())
            .or_else(|| self.backend.local_item(name).filter(|v| !v.is_empty()))
    }

    /// Set cookie `name` with the given lifetime.
    pub fn write(&self, name: &str, value: &str, ttl_secs: u64) {
        self.backend.set_cookie(name, value, ttl_secs);
    }

    /// Remove every credential and profile key from both layers.
    pub fn clear(&self) {
        for key in [USER_KEY, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY] {
            self.backend.remove_local_item(key);
        }
        for name in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY] {
            self.backend.remove_cookie(name);
        }
    }

    pub fn access_token(&self) -> Option<String> {
        self.read(ACCESS_TOKEN_KEY)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.read(REFRESH_TOKEN_KEY)
    }

    /// Persist freshly issued tokens with their policy lifetimes.
    pub fn save_credentials(&self, credentials: &Credentials) {
        self.write(ACCESS_TOKEN_KEY, &credentials.access_token, ACCESS_TOKEN_TTL_SECS);
        if let Some(refresh) = &credentials.refresh_token {
            self.write(REFRESH_TOKEN_KEY, refresh, REFRESH_TOKEN_TTL_SECS);
        }
    }

    /// Load the cached profile. An unreadable entry counts as no profile.
    pub fn load_user(&self) -> Option<User> {
        let raw = self.backend.local_item(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                leptos::logging::warn!("ignoring unreadable cached user: {e}");
                None
            }
        }
    }

    pub fn save_user(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(raw) => self.backend.set_local_item(USER_KEY, &raw),
            Err(e) => leptos::logging::warn!("failed to encode user for storage: {e}"),
        }
    }
}

// =============================================================================
// BROWSER BACKEND
// =============================================================================

/// `document.cookie` + `window.localStorage`. No-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserBackend;

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;
    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl CredentialBackend for BrowserBackend {
    fn cookie(&self, name: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let jar = html_document()?.cookie().ok()?;
            super::cookie::parse_cookie_value(&jar, name)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
            None
        }
    }

    fn set_cookie(&self, name: &str, value: &str, max_age_secs: u64) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(doc) = html_document() {
                let _ = doc.set_cookie(&super::cookie::format_cookie(name, value, max_age_secs));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, value, max_age_secs);
        }
    }

    fn remove_cookie(&self, name: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(doc) = html_document() {
                let _ = doc.set_cookie(&super::cookie::format_expired_cookie(name));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
        }
    }

    fn local_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set_local_item(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove_local_item(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

// =============================================================================
// MEMORY BACKEND
// =============================================================================

#[cfg(test)]
pub(crate) use memory::{MemoryBackend, MemoryCookie};
