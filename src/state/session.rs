//! Session state machine for cookie-based authentication.
//!
//! DESIGN
//! ======
//! One `SessionState` value exists per running app, owned by the root
//! component and handed to consumers through context. Every change goes
//! through the pure `SessionState::apply` transition function; network
//! code only produces `CheckOutcome`/`LoginOutcome` values, so the whole
//! machine stays natively testable without a browser.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::net::types::User;

/// Shown when the server rejects a login without a parsable `detail`.
pub const LOGIN_FALLBACK_MESSAGE: &str = "Login failed. Please try again.";
/// Shown when the login request never gets a response.
pub const LOGIN_UNREACHABLE_MESSAGE: &str = "Could not reach the server. Please try again.";
/// Shown when the login call succeeds but the profile fetch does not.
pub const SESSION_UNCONFIRMED_MESSAGE: &str =
    "Signed in, but the session could not be confirmed. Please try again.";

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// No check has run yet.
    #[default]
    Idle,
    /// A check, login, or logout is in flight.
    Loading,
    /// The server confirmed a user.
    Authenticated,
    /// No valid server session.
    Unauthenticated,
}

/// The client's belief about who, if anyone, is signed in.
///
/// `user` is `Some` exactly when `status` is `Authenticated`. `error`
/// holds the message rendered near the login form after a failed
/// attempt and is cleared as soon as a new check or login begins.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub status: SessionStatus,
    pub user: Option<User>,
    pub error: Option<String>,
}

/// Result of a `GET /api/v1/auth/me` session check.
///
/// 401/403 and transport failures both collapse into `Invalid`: an
/// absent session is a resolved state, not an error.
#[derive(Clone, Debug, PartialEq)]
pub enum CheckOutcome {
    Valid(User),
    Invalid,
}

/// Result of the login call pair (authenticate, then profile fetch).
#[derive(Clone, Debug, PartialEq)]
pub enum LoginOutcome {
    /// Both calls succeeded.
    Accepted(User),
    /// The login endpoint answered non-2xx; the payload is the server's
    /// `detail` message when one could be parsed from the body.
    Rejected(Option<String>),
    /// The login call succeeded but the follow-up profile fetch failed.
    Unconfirmed,
    /// The login request itself never completed.
    Unreachable,
}

impl LoginOutcome {
    /// Whether this outcome leaves the user signed in.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// A transition of the session state machine.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionAction {
    CheckStarted,
    CheckResolved(CheckOutcome),
    LoginStarted,
    LoginResolved(LoginOutcome),
    LogoutStarted,
    LogoutCompleted,
}

impl SessionState {
    /// Pure transition function.
    ///
    /// Every transition yields a fully-specified next state, so the
    /// `user`-iff-`Authenticated` invariant holds by construction.
    pub fn apply(&self, action: SessionAction) -> Self {
        match action {
            SessionAction::CheckStarted
            | SessionAction::LoginStarted
            | SessionAction::LogoutStarted => Self {
                status: SessionStatus::Loading,
                user: None,
                error: None,
            },
            SessionAction::CheckResolved(CheckOutcome::Valid(user)) => Self {
                status: SessionStatus::Authenticated,
                user: Some(user),
                error: None,
            },
            SessionAction::CheckResolved(CheckOutcome::Invalid)
            | SessionAction::LogoutCompleted => Self {
                status: SessionStatus::Unauthenticated,
                user: None,
                error: None,
            },
            SessionAction::LoginResolved(outcome) => Self::from_login_outcome(outcome),
        }
    }

    fn from_login_outcome(outcome: LoginOutcome) -> Self {
        match outcome {
            LoginOutcome::Accepted(user) => Self {
                status: SessionStatus::Authenticated,
                user: Some(user),
                error: None,
            },
            LoginOutcome::Rejected(detail) => Self::login_failure(
                detail.unwrap_or_else(|| LOGIN_FALLBACK_MESSAGE.to_owned()),
            ),
            LoginOutcome::Unconfirmed => {
                Self::login_failure(SESSION_UNCONFIRMED_MESSAGE.to_owned())
            }
            LoginOutcome::Unreachable => {
                Self::login_failure(LOGIN_UNREACHABLE_MESSAGE.to_owned())
            }
        }
    }

    fn login_failure(message: String) -> Self {
        Self {
            status: SessionStatus::Unauthenticated,
            user: None,
            error: Some(message),
        }
    }
}

/// Teardown flag for the startup session check.
///
/// The app root cancels its guard in `on_cleanup`, so a check response
/// that lands after disposal is dropped instead of writing to dead
/// signals. Login and logout carry no such flag: their responses apply
/// as they arrive, even when a newer action has since run.
#[derive(Clone, Debug, Default)]
pub struct CheckGuard {
    cancelled: Arc<AtomicBool>,
}

impl CheckGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop any pending result from being applied.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Run `apply` unless the guard was cancelled; returns whether it ran.
    pub fn apply_if_live<F: FnOnce()>(&self, apply: F) -> bool {
        if self.is_cancelled() {
            return false;
        }
        apply();
        true
    }
}
