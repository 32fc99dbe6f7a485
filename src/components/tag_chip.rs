//! Small label chip for tags and technologies.
//!
//! DESIGN
//! ======
//! One chip serves both static labels (cards) and selectable filters
//! (projects page); a chip is only a button when a select callback is
//! supplied.

use leptos::prelude::*;

/// A tag or technology chip, optionally selectable.
#[component]
pub fn TagChip(
    label: String,
    #[prop(optional)] active: bool,
    #[prop(optional)] on_select: Option<Callback<String>>,
) -> impl IntoView {
    match on_select {
        Some(on_select) => {
            let value = label.clone();
            view! {
                <button
                    class="chip chip--selectable"
                    class:chip--active=active
                    on:click=move |_| on_select.run(value.clone())
                >
                    {label}
                </button>
            }
            .into_any()
        }
        None => view! { <span class="chip">{label}</span> }.into_any(),
    }
}
