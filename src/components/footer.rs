//! Site footer.

use leptos::prelude::*;

/// Minimal footer with a colophon line.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <span class="footer__note">"Personal portfolio. Rendered with Leptos."</span>
        </footer>
    }
}
