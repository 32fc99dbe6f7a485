//! Networking modules for the portfolio REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls against the external backend and `types`
//! defines the response DTOs it decodes into.

pub mod api;
pub mod types;
