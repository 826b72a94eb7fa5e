//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by pages and the header to decide between the loading view, the
//! signed-out call to action, and identity-dependent rendering. Only the
//! session controller produces new values.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Derived session state.
///
/// `is_authenticated` always equals "a user is present and an access token is
/// stored"; the constructors are the only way to build a value so that holds.
/// While `is_loading` is set the other fields carry no meaning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    user: Option<User>,
    is_loading: bool,
    is_authenticated: bool,
}

impl SessionState {
    /// Before initialization has resolved.
    #[must_use]
    pub fn loading() -> Self {
        Self { user: None, is_loading: true, is_authenticated: false }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self { user: None, is_loading: false, is_authenticated: false }
    }

    /// A user whose access token was just stored.
    #[must_use]
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user), is_loading: false, is_authenticated: true }
    }

    /// Rebuild state from whatever persisted on a fresh load.
    #[must_use]
    pub fn restored(user: Option<User>, has_access_token: bool) -> Self {
        let is_authenticated = user.is_some() && has_access_token;
        Self { user, is_loading: false, is_authenticated }
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::loading()
    }
}
