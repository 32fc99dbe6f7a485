//! Card component for portfolio projects.
//!
//! DESIGN
//! ======
//! Keeps project presentation consistent between the home page's featured
//! row and the full projects grid.

use leptos::prelude::*;

use crate::components::tag_chip::TagChip;
use crate::net::types::Project;

/// A card showing one project's summary, stack, and links.
#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let Project {
        title,
        description,
        tech_stack,
        live_url,
        repo_url,
        image_url,
        ..
    } = project;

    let image = image_url.map(|src| {
        let alt = title.clone();
        view! { <img class="project-card__image" src=src alt=alt/> }
    });
    let live_link = live_url.map(|url| {
        view! {
            <a class="project-card__link" href=url target="_blank" rel="noreferrer">
                "Live"
            </a>
        }
    });
    let repo_link = repo_url.map(|url| {
        view! {
            <a class="project-card__link" href=url target="_blank" rel="noreferrer">
                "Source"
            </a>
        }
    });

    view! {
        <article class="project-card">
            {image}
            <h3 class="project-card__title">{title}</h3>
            <p class="project-card__description">{description}</p>
            <div class="project-card__stack">
                {tech_stack
                    .into_iter()
                    .map(|tech| view! { <TagChip label=tech/> })
                    .collect::<Vec<_>>()}
            </div>
            <div class="project-card__links">{live_link} {repo_link}</div>
        </article>
    }
}
