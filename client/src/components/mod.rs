//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome while reading shared state from Leptos
//! context providers.

pub mod header;
