//! Single blog post page with a markdown-rendered body.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `:slug` route param drives the fetch; changing slugs re-runs the
//! resource without remounting the page.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::tag_chip::TagChip;
use crate::net::types::Post;
use crate::util::format::{format_date, reading_time_label};
use crate::util::markdown;

/// Post detail page resolved from `/blog/{slug}`.
#[component]
pub fn PostPage() -> impl IntoView {
    let params = use_params_map();
    let post = LocalResource::new(move || {
        let slug = params.read().get("slug").unwrap_or_default();
        async move { crate::net::api::fetch_post(&slug).await }
    });

    view! {
        <div class="post-page">
            <Suspense fallback=move || {
                view! { <p class="page-status">"Loading post..."</p> }
            }>
                {move || {
                    post.get()
                        .map(|loaded| match loaded {
                            Some(post) => render_post(post).into_any(),
                            None => {
                                view! { <p class="page-status">"Post not found."</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

fn render_post(post: Post) -> impl IntoView {
    let Post {
        title,
        body,
        tags,
        reading_time_minutes,
        created_at,
        ..
    } = post;

    let date = format_date(&created_at);
    let reading = reading_time_label(reading_time_minutes)
        .map(|label| view! { <span class="post-page__reading">{label}</span> });
    let body_html = markdown::render(body.as_deref().unwrap_or_default());

    view! {
        <article class="post-page__article">
            <header class="post-page__header">
                <h1>{title}</h1>
                <p class="post-page__meta">
                    <span class="post-page__date">{date}</span>
                    {reading}
                </p>
                <div class="post-page__tags">
                    {tags
                        .into_iter()
                        .map(|tag| view! { <TagChip label=tag/> })
                        .collect::<Vec<_>>()}
                </div>
            </header>
            <div class="post-page__body" inner_html=body_html></div>
        </article>
    }
}
