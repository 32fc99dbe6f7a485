//! Blog page listing published posts, newest first.

use leptos::prelude::*;

use crate::components::post_card::PostCard;

/// Blog index: one card per published post.
#[component]
pub fn BlogPage() -> impl IntoView {
    let posts = LocalResource::new(|| crate::net::api::fetch_posts());

    view! {
        <div class="blog-page">
            <h1>"Blog"</h1>
            <Suspense fallback=move || {
                view! { <p class="page-status">"Loading posts..."</p> }
            }>
                {move || {
                    posts
                        .get()
                        .map(|loaded| match loaded {
                            Some(list) if !list.is_empty() => {
                                view! {
                                    <div class="blog-page__list">
                                        {list
                                            .into_iter()
                                            .map(|post| view! { <PostCard post=post/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Some(_) => {
                                view! { <p class="page-status">"No posts yet."</p> }.into_any()
                            }
                            None => {
                                view! {
                                    <p class="page-status page-status--error">
                                        "Posts are unavailable right now."
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
