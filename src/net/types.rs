//! Wire DTOs for the portfolio REST API.
//!
//! DESIGN
//! ======
//! These types mirror the backend response schemas field-for-field so
//! serde can decode API payloads without adapter code. IDs and
//! timestamps stay strings; pages format them for display.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated user as returned by `GET /api/v1/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Login email; doubles as the display identity in the navbar.
    pub email: String,
    /// Whether the account may sign in.
    pub is_active: bool,
    /// Whether the account may use the write endpoints.
    pub is_superuser: bool,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// ISO 8601 last-update timestamp.
    pub updated_at: String,
}

/// A portfolio project as returned by the `/api/v1/projects` endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier (UUID string).
    pub id: String,
    /// URL-friendly identifier used in project links.
    pub slug: String,
    pub title: String,
    /// Short summary shown on cards.
    pub description: String,
    /// Optional long-form markdown body.
    pub content: Option<String>,
    /// Free-form topic tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Technologies used, rendered as chips.
    #[serde(default)]
    pub tech_stack: Vec<String>,
    /// Deployed instance, if one is public.
    pub live_url: Option<String>,
    /// Source repository, if public.
    pub repo_url: Option<String>,
    /// Cover image for the card.
    pub image_url: Option<String>,
    /// Whether the project appears on the home page.
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub published: bool,
    /// Manual sort weight; lower values list first.
    #[serde(default)]
    pub order: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// A blog post as returned by the `/api/v1/posts` endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique post identifier (UUID string).
    pub id: String,
    /// URL-friendly identifier used in `/blog/{slug}` links.
    pub slug: String,
    pub title: String,
    /// Teaser paragraph shown in the post list.
    pub excerpt: String,
    /// Markdown body; absent in some list payloads.
    pub body: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub published: bool,
    /// Estimated reading time; rendered when present.
    pub reading_time_minutes: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

/// A certification record as returned by `/api/v1/certifications`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    /// Unique certification identifier (UUID string).
    pub id: String,
    pub name: String,
    /// Issuing organization.
    pub issuer: String,
    pub description: Option<String>,
    /// ISO 8601 date the credential was issued.
    pub issued_at: String,
    /// ISO 8601 expiry date; `None` for non-expiring credentials.
    pub expires_at: Option<String>,
    /// Issuer-assigned credential identifier.
    pub credential_id: Option<String>,
    /// Public verification link.
    pub credential_url: Option<String>,
    pub badge_image_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    pub created_at: String,
    pub updated_at: String,
}
