//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::pages::{
    about::AboutPage, blog::BlogPage, certifications::CertificationsPage, home::HomePage,
    login::LoginPage, post::PostPage, projects::ProjectsPage,
};
use crate::state::ui::UiState;
use crate::util::auth::Session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and UI contexts, starts the initial session
/// check, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new();
    let ui = RwSignal::new(UiState::default());
    provide_context(session);
    provide_context(ui);

    #[cfg(feature = "hydrate")]
    {
        let prefers_dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(prefers_dark);
        ui.update(|state| state.dark_mode = prefers_dark);
    }

    // Confirm any existing cookie session. The guard drops the response
    // if the app is torn down before it resolves.
    let check_guard = session.start_check();
    on_cleanup(move || check_guard.cancel());

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text="Portfolio"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=StaticSegment("blog") view=BlogPage/>
                    <Route path=(StaticSegment("blog"), ParamSegment("slug")) view=PostPage/>
                    <Route path=StaticSegment("certifications") view=CertificationsPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
