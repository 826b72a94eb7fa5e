//! Login page with the Google sign-in button.
//!
//! The backend runs the whole OAuth exchange; this page only sends the browser
//! to the backend's login URL and shows a busy state until it leaves.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::api::redirect_to_login;
use crate::session::context::AuthContext;

fn login_button_label(connecting: bool) -> &'static str {
    if connecting { "Connecting..." } else { "Continue with Google" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let connecting = RwSignal::new(false);

    let on_login = move |_| {
        if connecting.get_untracked() {
            return;
        }
        connecting.set(true);
        redirect_to_login(auth.config());
    };

    view! {
        <section class="page">
            <div class="login">
                <a href="/" class="btn btn--ghost login__back">"← Back to Home"</a>
                <div class="login__card">
                    <h1>"Welcome Back"</h1>
                    <p class="muted">"Sign in to your account to continue"</p>
                    <button
                        class="btn btn--primary login__google"
                        disabled=move || connecting.get()
                        on:click=on_login
                    >
                        {move || login_button_label(connecting.get())}
                    </button>
                    <p class="login__legal">
                        "By continuing, you agree to our Terms of Service and Privacy Policy"
                    </p>
                </div>
            </div>
        </section>
    }
}
