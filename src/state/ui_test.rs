use super::*;

#[test]
fn ui_state_default_dark_mode_off() {
    let state = UiState::default();
    assert!(!state.dark_mode);
}

#[test]
fn ui_state_default_nav_closed() {
    let state = UiState::default();
    assert!(!state.nav_open);
}
