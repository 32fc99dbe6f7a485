//! Shared application state provided via Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns the authentication state machine; `ui` holds transient
//! chrome state (theme, mobile navigation).

pub mod session;
pub mod ui;
