//! Top navigation bar with routing links and session controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! The one component that renders differently for every session status:
//! nothing auth-related while a check is in flight, a login link when
//! signed out, the user's email plus a logout button when signed in.

use leptos::prelude::*;

use crate::state::session::SessionStatus;
use crate::state::ui::UiState;
use crate::util::auth::Session;
use crate::util::dark_mode;

const NAV_LINKS: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/about", "About"),
    ("/projects", "Projects"),
    ("/blog", "Blog"),
    ("/certifications", "Certifications"),
];

/// Site-wide navigation header.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<Session>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle_theme = move |_| {
        ui.update(|state| state.dark_mode = dark_mode::toggle(state.dark_mode));
    };
    let on_toggle_nav = move |_| ui.update(|state| state.nav_open = !state.nav_open);
    let on_logout = move |_| {
        session.logout();
        ui.update(|state| state.nav_open = false);
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">
                "~/portfolio"
            </a>
            <button class="navbar__menu-toggle" on:click=on_toggle_nav aria-label="Toggle navigation">
                "☰"
            </button>
            <nav class="navbar__links" class:navbar__links--open=move || ui.get().nav_open>
                {NAV_LINKS
                    .into_iter()
                    .map(|(href, label)| {
                        view! {
                            <a class="navbar__link" href=href>
                                {label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
                {move || {
                    let state = session.get();
                    match state.status {
                        SessionStatus::Authenticated => {
                            let email = state.user.map(|user| user.email).unwrap_or_default();
                            view! {
                                <>
                                    <span class="navbar__user">{email}</span>
                                    <button class="navbar__logout" on:click=on_logout>
                                        "Log out"
                                    </button>
                                </>
                            }
                                .into_any()
                        }
                        SessionStatus::Unauthenticated => {
                            view! {
                                <a class="navbar__link navbar__link--login" href="/login">
                                    "Log in"
                                </a>
                            }
                                .into_any()
                        }
                        SessionStatus::Idle | SessionStatus::Loading => {
                            view! { <></> }.into_any()
                        }
                    }
                }}
            </nav>
            <button class="navbar__theme-toggle" on:click=on_toggle_theme title="Toggle dark mode">
                {move || if ui.get().dark_mode { "LIGHT" } else { "DARK" }}
            </button>
        </header>
    }
}
