//! Home page with hero intro and featured work.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the public landing route. Featured projects load once on
//! mount; everything else is static copy.

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;

/// Landing page: hero section plus the featured project row.
#[component]
pub fn HomePage() -> impl IntoView {
    let featured = LocalResource::new(|| crate::net::api::fetch_featured_projects());

    view! {
        <div class="home-page">
            <section class="hero">
                <p class="hero__kicker">"Hi, I build software."</p>
                <h1 class="hero__title">"Backend systems, data plumbing, and the occasional frontend."</h1>
                <p class="hero__lead">
                    "This site collects the projects I ship, notes I write along the way, "
                    "and the certifications I keep current."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href="/projects">
                        "See projects"
                    </a>
                    <a class="btn" href="/blog">
                        "Read the blog"
                    </a>
                </div>
            </section>

            <section class="home-page__featured">
                <h2>"Featured Projects"</h2>
                <Suspense fallback=move || {
                    view! { <p class="page-status">"Loading projects..."</p> }
                }>
                    {move || {
                        featured
                            .get()
                            .map(|projects| match projects {
                                Some(list) if !list.is_empty() => {
                                    view! {
                                        <div class="card-grid">
                                            {list
                                                .into_iter()
                                                .map(|project| view! { <ProjectCard project=project/> })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                                Some(_) => {
                                    view! { <p class="page-status">"Nothing featured yet."</p> }
                                        .into_any()
                                }
                                None => {
                                    view! {
                                        <p class="page-status page-status--error">
                                            "Projects are unavailable right now."
                                        </p>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
