//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation preferences out of the auth session so the header can
//! toggle them without touching identity state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared by the header and pages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
}

impl UiState {
    /// Initial UI state seeded from the stored dark mode preference.
    #[must_use]
    pub fn from_preferences() -> Self {
        Self { dark_mode: crate::util::dark_mode::read_preference() }
    }
}
