//! Projects page with a client-side tag filter.
//!
//! SYSTEM CONTEXT
//! ==============
//! The full published-project list loads once; filtering happens locally
//! against the loaded list so chip clicks never refetch.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::components::tag_chip::TagChip;
use crate::net::types::Project;

/// Unique tags across the loaded projects, sorted for a stable chip row.
fn collect_tags(projects: &[Project]) -> Vec<String> {
    let mut tags: Vec<String> = projects
        .iter()
        .flat_map(|project| project.tags.iter().cloned())
        .collect();
    tags.sort();
    tags.dedup();
    tags
}

/// Projects carrying `tag`, or all of them when no tag is active.
fn filter_by_tag(projects: &[Project], tag: Option<&str>) -> Vec<Project> {
    match tag {
        Some(tag) => projects
            .iter()
            .filter(|project| project.tags.iter().any(|t| t == tag))
            .cloned()
            .collect(),
        None => projects.to_vec(),
    }
}

/// Projects page: tag chips above a filterable card grid.
#[component]
pub fn ProjectsPage() -> impl IntoView {
    let projects = LocalResource::new(|| crate::net::api::fetch_projects());
    let active_tag = RwSignal::new(None::<String>);

    let on_select_tag = Callback::new(move |tag: String| {
        active_tag.update(|current| {
            *current = if current.as_deref() == Some(tag.as_str()) {
                None
            } else {
                Some(tag)
            };
        });
    });

    view! {
        <div class="projects-page">
            <h1>"Projects"</h1>
            <Suspense fallback=move || {
                view! { <p class="page-status">"Loading projects..."</p> }
            }>
                {move || {
                    projects
                        .get()
                        .map(|loaded| match loaded {
                            Some(list) if !list.is_empty() => {
                                let tags = collect_tags(&list);
                                let selected = active_tag.get();
                                let visible = filter_by_tag(&list, selected.as_deref());
                                let chips = tags
                                    .into_iter()
                                    .map(|tag| {
                                        let active = selected.as_deref() == Some(tag.as_str());
                                        view! {
                                            <TagChip label=tag active=active on_select=on_select_tag/>
                                        }
                                    })
                                    .collect::<Vec<_>>();
                                let cards = visible
                                    .into_iter()
                                    .map(|project| view! { <ProjectCard project=project/> })
                                    .collect::<Vec<_>>();
                                view! {
                                    <>
                                        <div class="projects-page__filter">{chips}</div>
                                        <div class="card-grid">{cards}</div>
                                    </>
                                }
                                    .into_any()
                            }
                            Some(_) => {
                                view! { <p class="page-status">"No projects published yet."</p> }
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
        </div>
    }
}
