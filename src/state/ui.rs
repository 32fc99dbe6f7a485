//! Local UI chrome state (theme, mobile navigation).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the session state so the
//! navbar can evolve independently of authentication data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the theme toggle and the collapsible mobile nav.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub nav_open: bool,
}
