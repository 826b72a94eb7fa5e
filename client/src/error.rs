//! Failure taxonomy for the sign-in session lifecycle.
//!
//! ERROR HANDLING
//! ==============
//! None of these reach the user as a blocking error. Provider and missing-token
//! failures end the callback attempt with a redirect home, profile failures
//! are absorbed by the caller's policy, and logout failures are logged while
//! local cleanup proceeds.

use thiserror::Error;

/// Why a profile request did not yield a usable body.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProfileFetchFailure {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed profile body: {0}")]
    Malformed(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The identity provider reported a failure through the callback `error` parameter.
    #[error("identity provider error: {0}")]
    Provider(String),
    /// The callback carried neither an access token nor an error.
    #[error("callback carried no access token")]
    MissingToken,
    #[error("profile fetch failed: {0}")]
    ProfileFetch(#[from] ProfileFetchFailure),
    #[error("remote logout failed: {0}")]
    LogoutCall(String),
}
