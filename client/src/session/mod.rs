//! Client-side sign-in session lifecycle.
//!
//! ARCHITECTURE
//! ============
//! `store` persists tokens and the cached profile, `controller` owns the
//! derived session state and its `login`/`logout` transitions, and `callback`
//! runs the one-shot OAuth redirect handling on top of both. `context` exposes
//! the controller to the Leptos component tree.

pub mod callback;
pub mod context;
pub mod controller;
pub mod cookie;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;
