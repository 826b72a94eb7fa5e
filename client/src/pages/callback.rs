//! OAuth callback page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted on both `/auth/callback` and `/callback`. Each mount is one page
//! visit and owns one `CallbackHandler`, so the effect below may re-run
//! without fetching or logging in twice. Navigation waits for the handler,
//! which returns only after `login` has updated the session.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::session::callback::{CallbackHandler, CallbackParams};
use crate::session::context::AuthContext;

#[component]
pub fn CallbackPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let query = use_query_map();
    let navigate = use_navigate();
    let handler = Arc::new(CallbackHandler::new());

    Effect::new(move || {
        let params = query.with(|q| CallbackParams::from_lookup(|key| q.get(key)));
        #[cfg(feature = "hydrate")]
        {
            use leptos_router::NavigateOptions;

            let handler = Arc::clone(&handler);
            let auth = auth.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = auth.handle_callback(&handler, &params).await;
                if let Some(route) = outcome.redirect_to() {
                    navigate(route, NavigateOptions { replace: true, ..NavigateOptions::default() });
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&params, &handler, &auth, &navigate);
        }
    });

    view! {
        <section class="page page--centered">
            <div class="muted">"Processing authentication..."</div>
        </section>
    }
}
