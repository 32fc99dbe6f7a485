//! About page with bio and skills.

use leptos::prelude::*;

use crate::components::tag_chip::TagChip;

const SKILLS: [&str; 8] = [
    "Rust",
    "Python",
    "PostgreSQL",
    "Docker",
    "FastAPI",
    "Leptos",
    "CI/CD",
    "Observability",
];

/// Static biography page.
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <h1>"About"</h1>
            <p class="about-page__bio">
                "I'm a software engineer who enjoys the unglamorous parts of the stack: "
                "schemas, queues, deploys, and the tests that keep them honest. "
                "Most of my recent work lives on the backend, with enough frontend to "
                "ship features end to end."
            </p>
            <p class="about-page__bio">
                "Outside of work I write up what I learn on the "
                <a href="/blog">"blog"</a>
                " and tinker with side projects, some of which graduate to the "
                <a href="/projects">"projects"</a>
                " page."
            </p>
            <h2>"Tools I reach for"</h2>
            <div class="about-page__skills">
                {SKILLS
                    .into_iter()
                    .map(|skill| view! { <TagChip label=skill.to_owned()/> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
