//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so components depend on small focused models:
//! `auth` for the sign-in session, `ui` for presentation preferences.

pub mod auth;
pub mod ui;
