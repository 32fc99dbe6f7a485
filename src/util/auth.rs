//! Session lifecycle glue between the state machine and the auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component creates one `Session`, provides it via context, and
//! starts the initial check. Pages and the navbar read through the handle
//! and trigger `login`/`logout`; nothing else writes session state.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{CheckGuard, SessionAction, SessionState, SessionStatus};

/// Context handle owning the single session state value.
///
/// Consumers get reactive reads plus the fixed action set; the signal
/// itself stays private so only the transition handlers below mutate it.
#[derive(Clone, Copy, Debug)]
pub struct Session {
    state: RwSignal<SessionState>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
        }
    }

    /// Reactive read of the current session state.
    pub fn get(&self) -> SessionState {
        self.state.get()
    }

    fn dispatch(&self, action: SessionAction) {
        self.state.update(|state| *state = state.apply(action));
    }

    /// Kick off the startup session check.
    ///
    /// Transitions to `Loading` synchronously; the network result is
    /// applied only while the returned guard is alive, so a response
    /// arriving after teardown is discarded. On the server only the
    /// `Loading` transition happens and the client re-issues the check
    /// after hydration.
    pub fn start_check(&self) -> CheckGuard {
        self.dispatch(SessionAction::CheckStarted);
        let guard = CheckGuard::new();
        #[cfg(feature = "hydrate")]
        {
            let session = *self;
            let task_guard = guard.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::check_session().await;
                task_guard.apply_if_live(|| {
                    session.dispatch(SessionAction::CheckResolved(outcome));
                });
            });
        }
        guard
    }

    /// Log in with the given credentials.
    ///
    /// Returns `true` only when the server accepted them and the
    /// follow-up profile fetch confirmed the session. The response is
    /// applied whenever it arrives; there is no staleness token, so a
    /// slow response can land after a newer action.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        self.dispatch(SessionAction::LoginStarted);
        #[cfg(feature = "hydrate")]
        {
            let outcome = crate::net::api::login(email, password).await;
            let success = outcome.is_success();
            if !success {
                log::warn!("login attempt failed");
            }
            self.dispatch(SessionAction::LoginResolved(outcome));
            success
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            false
        }
    }

    /// Log out: best-effort server call, unconditional local clear.
    pub fn logout(&self) {
        self.dispatch(SessionAction::LogoutStarted);
        #[cfg(feature = "hydrate")]
        {
            let session = *self;
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                session.dispatch(SessionAction::LogoutCompleted);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        self.dispatch(SessionAction::LogoutCompleted);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the login page should leave for the home page.
fn should_redirect_authenticated(state: &SessionState) -> bool {
    state.status == SessionStatus::Authenticated
}

/// Redirect to `/` whenever the session resolves to an authenticated user.
pub fn install_authenticated_redirect<F>(session: Session, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_authenticated(&session.get()) {
            navigate("/", NavigateOptions::default());
        }
    });
}
