//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and card presentation while reading
//! shared state from Leptos context providers; pages own orchestration.

pub mod cert_card;
pub mod footer;
pub mod navbar;
pub mod post_card;
pub mod project_card;
pub mod tag_chip;
