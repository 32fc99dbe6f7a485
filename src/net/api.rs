//! REST API helpers for the portfolio backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always issued
//! with credentials included so the httpOnly session cookie round-trips.
//! Server-side (SSR): stubs returning `None`/unauthenticated outcomes
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Auth calls return outcome enums and content calls return `Option`, so
//! network failures degrade rendering without crashing hydration and no
//! transport error escapes this module.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Certification, Post, Project};
#[cfg(feature = "hydrate")]
use super::types::User;
use crate::state::session::{CheckOutcome, LoginOutcome};

#[cfg(any(test, feature = "hydrate"))]
fn post_endpoint(slug: &str) -> String {
    format!("/api/v1/posts/{slug}")
}

/// Extract the `detail` message from a non-2xx auth response body.
#[cfg(any(test, feature = "hydrate"))]
fn rejection_detail(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        detail: String,
    }
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|parsed| parsed.detail)
}

#[cfg(feature = "hydrate")]
fn get_with_credentials(url: &str) -> gloo_net::http::RequestBuilder {
    gloo_net::http::Request::get(url).credentials(web_sys::RequestCredentials::Include)
}

#[cfg(feature = "hydrate")]
fn post_with_credentials(url: &str) -> gloo_net::http::RequestBuilder {
    gloo_net::http::Request::post(url).credentials(web_sys::RequestCredentials::Include)
}

#[cfg(feature = "hydrate")]
async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Option<T> {
    let resp = get_with_credentials(url).send().await.ok()?;
    if !resp.ok() {
        return None;
    }
    resp.json::<T>().await.ok()
}

/// Confirm an existing cookie session via `GET /api/v1/auth/me`.
///
/// Never fails: 401/403, transport errors, and undecodable bodies all
/// resolve to `CheckOutcome::Invalid`.
pub async fn check_session() -> CheckOutcome {
    #[cfg(feature = "hydrate")]
    {
        match fetch_json::<User>("/api/v1/auth/me").await {
            Some(user) => CheckOutcome::Valid(user),
            None => CheckOutcome::Invalid,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        CheckOutcome::Invalid
    }
}

/// Authenticate via `POST /api/v1/auth/login`, then confirm the session
/// with a follow-up profile fetch. Both calls must succeed for
/// `LoginOutcome::Accepted`.
pub async fn login(email: &str, password: &str) -> LoginOutcome {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let Ok(request) = post_with_credentials("/api/v1/auth/login").json(&payload) else {
            return LoginOutcome::Unreachable;
        };
        let Ok(resp) = request.send().await else {
            return LoginOutcome::Unreachable;
        };
        if !resp.ok() {
            let detail = resp.text().await.ok().as_deref().and_then(rejection_detail);
            return LoginOutcome::Rejected(detail);
        }
        // The session cookie is now set; the profile fetch confirms it
        // round-trips before the UI flips to authenticated.
        match check_session().await {
            CheckOutcome::Valid(user) => LoginOutcome::Accepted(user),
            CheckOutcome::Invalid => LoginOutcome::Unconfirmed,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        LoginOutcome::Unreachable
    }
}

/// Invalidate the server session via `POST /api/v1/auth/logout`.
/// Best-effort: the response (or its absence) is ignored.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = post_with_credentials("/api/v1/auth/logout").send().await;
    }
}

/// Fetch published projects from `/api/v1/projects/`.
pub async fn fetch_projects() -> Option<Vec<Project>> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json("/api/v1/projects/").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch featured, published projects from `/api/v1/projects/featured`.
pub async fn fetch_featured_projects() -> Option<Vec<Project>> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json("/api/v1/projects/featured").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch published blog posts (newest first) from `/api/v1/posts/`.
pub async fn fetch_posts() -> Option<Vec<Post>> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json("/api/v1/posts/").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch a single post by slug; `None` covers 404 and transport errors.
pub async fn fetch_post(slug: &str) -> Option<Post> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json(&post_endpoint(slug)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = slug;
        None
    }
}

/// Fetch certifications from `/api/v1/certifications/`.
pub async fn fetch_certifications() -> Option<Vec<Certification>> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json("/api/v1/certifications/").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
