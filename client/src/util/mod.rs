//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `dark_mode` owns the theme preference and the `data-theme` attribute; the
//! header and `App` call into it.

pub mod dark_mode;
