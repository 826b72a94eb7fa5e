//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates session logic to
//! `session` and chrome to `components`.

pub mod callback;
pub mod home;
pub mod login;
