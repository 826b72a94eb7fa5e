//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::{APP_TITLE, MainHeader};
use crate::config::ClientConfig;
use crate::pages::{callback::CallbackPage, home::HomePage, login::LoginPage};
use crate::session::context::AuthContext;
use crate::state::ui::UiState;

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
/// Provides the auth session and UI preferences, kicks off session restore,
/// and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthContext::new(ClientConfig::from_build_env());
    // Server HTML always renders light; the stored preference applies after hydration.
    let ui = RwSignal::new(UiState::default());

    provide_context(auth.clone());
    provide_context(ui);

    Effect::new(move || ui.set(UiState::from_preferences()));
    Effect::new(move || crate::util::dark_mode::apply(ui.get().dark_mode));
    auth.initialize();

    view! {
        <Stylesheet id="leptos" href="/pkg/calc-oauth.css"/>
        <Title text=APP_TITLE/>

        <Router>
            <MainHeader/>
            <main class="main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("callback")) view=CallbackPage/>
                    <Route path=StaticSegment("callback") view=CallbackPage/>
                </Routes>
            </main>
        </Router>
    }
}
