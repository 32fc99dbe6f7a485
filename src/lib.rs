//! # portfolio-client
//!
//! Leptos + WASM frontend for the personal portfolio site: routed pages
//! (home, about, projects, blog, certifications) backed by the portfolio
//! REST API, with cookie-session authentication owned by the session
//! state machine in `state::session`.
//!
//! The crate builds in two modes: `hydrate` (browser, real network calls
//! via `gloo-net`) and `ssr` (server rendering, deterministic stubs).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
