//! Landing page: loading view, signed-out call to action, or a greeting.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::session::context::AuthContext;
use crate::state::auth::SessionState;

/// What the landing page shows for a given session.
#[derive(Clone, Debug, PartialEq, Eq)]
enum HomeView {
    Loading,
    SignedOut,
    Welcome { heading: String, email: String },
}

fn home_view(state: &SessionState) -> HomeView {
    if state.is_loading() {
        return HomeView::Loading;
    }
    match state.user() {
        Some(user) if state.is_authenticated() => {
            HomeView::Welcome { heading: format!("Welcome, {}!", user.name), email: user.email.clone() }
        }
        _ => HomeView::SignedOut,
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let state = auth.state();

    move || match home_view(&state.get()) {
        HomeView::Loading => view! {
            <section class="page page--centered">
                <div class="muted">"Loading..."</div>
            </section>
        }
        .into_any(),
        HomeView::SignedOut => view! {
            <section class="page page--centered">
                <h1 class="hero__title">{crate::components::header::APP_TITLE}</h1>
                <p class="hero__subtitle">"A test app for OAuth2.0 authentication with calculation functionality."</p>
                <a href="/auth/login" class="btn btn--primary btn--large">
                    "Get Started"
                </a>
            </section>
        }
        .into_any(),
        HomeView::Welcome { heading, email } => view! {
            <section class="page page--centered">
                <h1 class="hero__title">{crate::components::header::APP_TITLE}</h1>
                <h2>{heading}</h2>
                <p class="muted">{email}</p>
            </section>
        }
        .into_any(),
    }
}
