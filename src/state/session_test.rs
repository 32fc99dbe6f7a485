use super::*;

fn owner() -> User {
    User {
        id: "u1".to_owned(),
        email: "owner@example.com".to_owned(),
        is_active: true,
        is_superuser: true,
        created_at: "2024-01-01T00:00:00Z".to_owned(),
        updated_at: "2024-01-01T00:00:00Z".to_owned(),
    }
}

fn invariant_holds(state: &SessionState) -> bool {
    state.user.is_some() == (state.status == SessionStatus::Authenticated)
}

// =============================================================
// Defaults and the user-iff-authenticated invariant
// =============================================================

#[test]
fn default_state_is_idle_with_no_user_and_no_error() {
    let state = SessionState::default();
    assert_eq!(state.status, SessionStatus::Idle);
    assert!(state.user.is_none());
    assert!(state.error.is_none());
}

#[test]
fn user_is_present_iff_authenticated_across_sequences() {
    let sequences: Vec<Vec<SessionAction>> = vec![
        vec![
            SessionAction::CheckStarted,
            SessionAction::CheckResolved(CheckOutcome::Valid(owner())),
        ],
        vec![
            SessionAction::CheckStarted,
            SessionAction::CheckResolved(CheckOutcome::Invalid),
            SessionAction::LoginStarted,
            SessionAction::LoginResolved(LoginOutcome::Rejected(None)),
        ],
        vec![
            SessionAction::CheckStarted,
            SessionAction::CheckResolved(CheckOutcome::Valid(owner())),
            SessionAction::LogoutStarted,
            SessionAction::LogoutCompleted,
        ],
        vec![
            SessionAction::LoginStarted,
            SessionAction::LoginResolved(LoginOutcome::Accepted(owner())),
            SessionAction::CheckStarted,
            SessionAction::CheckResolved(CheckOutcome::Invalid),
        ],
        vec![
            SessionAction::LoginStarted,
            SessionAction::LoginResolved(LoginOutcome::Unconfirmed),
            SessionAction::LoginStarted,
            SessionAction::LoginResolved(LoginOutcome::Unreachable),
        ],
    ];

    for actions in sequences {
        let mut state = SessionState::default();
        assert!(invariant_holds(&state));
        for action in actions {
            state = state.apply(action);
            assert!(invariant_holds(&state), "violated after {state:?}");
        }
    }
}

// =============================================================
// Session check
// =============================================================

#[test]
fn check_started_enters_loading_before_any_resolution() {
    let state = SessionState::default().apply(SessionAction::CheckStarted);
    assert_eq!(state.status, SessionStatus::Loading);
    assert!(state.user.is_none());
}

#[test]
fn check_valid_outcome_authenticates_and_stores_user() {
    let state = SessionState::default()
        .apply(SessionAction::CheckStarted)
        .apply(SessionAction::CheckResolved(CheckOutcome::Valid(owner())));
    assert_eq!(state.status, SessionStatus::Authenticated);
    assert_eq!(state.user, Some(owner()));
    assert!(state.error.is_none());
}

#[test]
fn check_invalid_outcome_resolves_unauthenticated_not_loading() {
    // Transport failures and 401/403 both surface as Invalid.
    let state = SessionState::default()
        .apply(SessionAction::CheckStarted)
        .apply(SessionAction::CheckResolved(CheckOutcome::Invalid));
    assert_eq!(state.status, SessionStatus::Unauthenticated);
    assert!(state.user.is_none());
    assert!(state.error.is_none());
}

#[test]
fn check_started_clears_previous_login_error() {
    let failed = SessionState::default()
        .apply(SessionAction::LoginStarted)
        .apply(SessionAction::LoginResolved(LoginOutcome::Rejected(None)));
    assert!(failed.error.is_some());
    let rechecking = failed.apply(SessionAction::CheckStarted);
    assert!(rechecking.error.is_none());
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_accepted_authenticates_and_reports_success() {
    let outcome = LoginOutcome::Accepted(owner());
    assert!(outcome.is_success());

    let state = SessionState::default()
        .apply(SessionAction::LoginStarted)
        .apply(SessionAction::LoginResolved(outcome));
    assert_eq!(state.status, SessionStatus::Authenticated);
    assert_eq!(state.user, Some(owner()));
    assert!(state.error.is_none());
}

#[test]
fn login_rejected_surfaces_server_detail_verbatim() {
    let outcome = LoginOutcome::Rejected(Some("Invalid email or password".to_owned()));
    assert!(!outcome.is_success());

    let state = SessionState::default()
        .apply(SessionAction::LoginStarted)
        .apply(SessionAction::LoginResolved(outcome));
    assert_eq!(state.status, SessionStatus::Unauthenticated);
    assert_eq!(state.error.as_deref(), Some("Invalid email or password"));
}

#[test]
fn login_rejected_without_detail_uses_fallback_message() {
    let state = SessionState::default()
        .apply(SessionAction::LoginStarted)
        .apply(SessionAction::LoginResolved(LoginOutcome::Rejected(None)));
    assert_eq!(state.error.as_deref(), Some(LOGIN_FALLBACK_MESSAGE));
}

#[test]
fn login_unconfirmed_uses_distinct_message_and_fails() {
    let outcome = LoginOutcome::Unconfirmed;
    assert!(!outcome.is_success());

    let state = SessionState::default()
        .apply(SessionAction::LoginStarted)
        .apply(SessionAction::LoginResolved(outcome));
    assert_eq!(state.status, SessionStatus::Unauthenticated);
    assert_eq!(state.error.as_deref(), Some(SESSION_UNCONFIRMED_MESSAGE));
    assert_ne!(SESSION_UNCONFIRMED_MESSAGE, LOGIN_FALLBACK_MESSAGE);
}

#[test]
fn login_unreachable_surfaces_transport_message() {
    let state = SessionState::default()
        .apply(SessionAction::LoginStarted)
        .apply(SessionAction::LoginResolved(LoginOutcome::Unreachable));
    assert_eq!(state.status, SessionStatus::Unauthenticated);
    assert_eq!(state.error.as_deref(), Some(LOGIN_UNREACHABLE_MESSAGE));
}

#[test]
fn login_started_clears_previous_error_and_user() {
    let authed = SessionState::default()
        .apply(SessionAction::CheckStarted)
        .apply(SessionAction::CheckResolved(CheckOutcome::Valid(owner())));
    let retrying = authed.apply(SessionAction::LoginStarted);
    assert_eq!(retrying.status, SessionStatus::Loading);
    assert!(retrying.user.is_none());
    assert!(retrying.error.is_none());
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_user_unconditionally() {
    // LogoutCompleted is dispatched whether or not the network call
    // succeeded, so the cleared state is unconditional.
    let state = SessionState::default()
        .apply(SessionAction::CheckStarted)
        .apply(SessionAction::CheckResolved(CheckOutcome::Valid(owner())))
        .apply(SessionAction::LogoutStarted);
    assert_eq!(state.status, SessionStatus::Loading);
    assert!(state.user.is_none());

    let state = state.apply(SessionAction::LogoutCompleted);
    assert_eq!(state.status, SessionStatus::Unauthenticated);
    assert!(state.user.is_none());
    assert!(state.error.is_none());
}

// =============================================================
// CheckGuard
// =============================================================

#[test]
fn check_guard_applies_while_live() {
    let guard = CheckGuard::new();
    let mut applied = 0;
    assert!(guard.apply_if_live(|| applied += 1));
    assert_eq!(applied, 1);
    assert!(!guard.is_cancelled());
}

#[test]
fn check_guard_skips_apply_after_cancel() {
    let guard = CheckGuard::new();
    guard.cancel();
    let mut applied = 0;
    assert!(!guard.apply_if_live(|| applied += 1));
    assert_eq!(applied, 0);
    assert!(guard.is_cancelled());
}

#[test]
fn check_guard_clones_share_cancellation() {
    let guard = CheckGuard::new();
    let task_side = guard.clone();
    guard.cancel();
    let mut applied = 0;
    assert!(!task_side.apply_if_live(|| applied += 1));
    assert_eq!(applied, 0);
}
