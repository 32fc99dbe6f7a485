//! Card component for blog post list entries.

use leptos::prelude::*;

use crate::components::tag_chip::TagChip;
use crate::net::types::Post;
use crate::util::format::{format_date, reading_time_label};

/// A clickable card linking to a post's detail page.
#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let Post {
        slug,
        title,
        excerpt,
        tags,
        cover_image_url,
        reading_time_minutes,
        created_at,
        ..
    } = post;

    let href = format!("/blog/{slug}");
    let date = format_date(&created_at);
    let reading = reading_time_label(reading_time_minutes)
        .map(|label| view! { <span class="post-card__reading">{label}</span> });
    let cover = cover_image_url.map(|src| {
        let alt = title.clone();
        view! { <img class="post-card__cover" src=src alt=alt/> }
    });

    view! {
        <a class="post-card" href=href>
            {cover}
            <h3 class="post-card__title">{title}</h3>
            <p class="post-card__meta">
                <span class="post-card__date">{date}</span>
                {reading}
            </p>
            <p class="post-card__excerpt">{excerpt}</p>
            <div class="post-card__tags">
                {tags
                    .into_iter()
                    .map(|tag| view! { <TagChip label=tag/> })
                    .collect::<Vec<_>>()}
            </div>
        </a>
    }
}
