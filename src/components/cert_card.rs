//! Card component for certification records.

#[cfg(test)]
#[path = "cert_card_test.rs"]
mod cert_card_test;

use leptos::prelude::*;

use crate::net::types::Certification;
use crate::util::format::month_year;

/// Human label for a credential's validity window.
fn validity_label(issued_at: &str, expires_at: Option<&str>) -> String {
    match expires_at {
        Some(expiry) => format!("{} - {}", month_year(issued_at), month_year(expiry)),
        None => format!("Issued {}", month_year(issued_at)),
    }
}

/// A card showing one certification with its verification link.
#[component]
pub fn CertCard(certification: Certification) -> impl IntoView {
    let Certification {
        name,
        issuer,
        description,
        issued_at,
        expires_at,
        credential_id,
        credential_url,
        badge_image_url,
        ..
    } = certification;

    let validity = validity_label(&issued_at, expires_at.as_deref());
    let badge = badge_image_url.map(|src| {
        let alt = name.clone();
        view! { <img class="cert-card__badge" src=src alt=alt/> }
    });
    let blurb = description.map(|text| view! { <p class="cert-card__description">{text}</p> });
    let link = credential_url.map(|url| {
        view! {
            <a class="cert-card__link" href=url target="_blank" rel="noreferrer">
                "View credential"
            </a>
        }
    });
    let credential =
        credential_id.map(|id| view! { <span class="cert-card__id">{format!("ID: {id}")}</span> });

    view! {
        <article class="cert-card">
            {badge}
            <div class="cert-card__body">
                <h3 class="cert-card__name">{name}</h3>
                <p class="cert-card__issuer">{issuer}</p>
                {blurb}
                <p class="cert-card__validity">{validity}</p>
                <div class="cert-card__footer">{link} {credential}</div>
            </div>
        </article>
    }
}
