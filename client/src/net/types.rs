//! Identity and credential DTOs shared by the network and session layers.
//!
//! DESIGN
//! ======
//! `User` is the canonical identity record the UI renders. It is never parsed
//! straight from the backend; `net::profile` normalizes the loosely-shaped
//! profile payload into it. The same shape is what gets cached in local
//! storage, so serde round-trips must stay lossless.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Placeholder id used when the backend profile carries none.
pub const PLACEHOLDER_USER_ID: &str = "user";
/// Placeholder display name used when the backend profile carries none.
pub const PLACEHOLDER_USER_NAME: &str = "User";
/// Placeholder email used when the backend profile carries none.
pub const PLACEHOLDER_USER_EMAIL: &str = "user@example.com";

/// The signed-in user as the rest of the application sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Avatar image URL, if available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// The degraded identity used when tokens were issued but the profile
    /// could not be resolved.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            id: PLACEHOLDER_USER_ID.to_owned(),
            name: PLACEHOLDER_USER_NAME.to_owned(),
            email: PLACEHOLDER_USER_EMAIL.to_owned(),
            avatar: None,
        }
    }
}

/// Bearer tokens handed back by the backend on the OAuth callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub access_token: String,
    pub refresh_token: Option<String>,
}
