//! Networking modules for the authentication backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls, `profile` turns loosely-shaped profile bodies
//! into the canonical user, and `types` defines the shared identity records.

pub mod api;
pub mod profile;
pub mod types;
