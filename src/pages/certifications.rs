//! Certifications page listing credential cards.

use leptos::prelude::*;

use crate::components::cert_card::CertCard;

/// Certifications index: one card per credential, most recent first
/// (the API orders by issue date descending).
#[component]
pub fn CertificationsPage() -> impl IntoView {
    let certifications = LocalResource::new(|| crate::net::api::fetch_certifications());

    view! {
        <div class="certs-page">
            <h1>"Certifications"</h1>
            <Suspense fallback=move || {
                view! { <p class="page-status">"Loading certifications..."</p> }
            }>
                {move || {
                    certifications
                        .get()
                        .map(|loaded| match loaded {
                            Some(list) if !list.is_empty() => {
                                view! {
                                    <div class="card-grid">
                                        {list
                                            .into_iter()
                                            .map(|cert| view! { <CertCard certification=cert/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Some(_) => {
                                view! { <p class="page-status">"No certifications listed."</p> }
                                    .into_any()
                            }
                            None => {
                                view! {
                                    <p class="page-status page-status--error">
                                        "Certifications are unavailable right now."
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
