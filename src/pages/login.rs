//! Login page driving the session state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only route that triggers `Session::login`. Server-side failure
//! messages come from the session state; local input validation stays in
//! this module. Once the session resolves to an authenticated user the
//! page redirects home.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionStatus;
use crate::util::auth::{Session, install_authenticated_redirect};

/// Trim the email and require both fields; the password is transmitted
/// as typed. Credentials get no further client-side validation.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Owner login form.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let navigate = use_navigate();

    install_authenticated_redirect(session, navigate);

    let busy = move || session.get().status == SessionStatus::Loading;
    let server_error = move || session.get().error.unwrap_or_default();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            // Success navigation is handled by the redirect effect once
            // the session flips to authenticated.
            let _ = session.login(&email_value, &password_value).await;
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <p class="login-card__subtitle">"Owner access"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=busy>
                        {move || if busy() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <Show when=move || !server_error().is_empty()>
                    <p class="login-message login-message--error">{server_error}</p>
                </Show>
            </div>
        </div>
    }
}
