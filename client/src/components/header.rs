//! Sticky top bar with the app title, navigation, theme toggle, and sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only place a signed-in user can end the session. Sign-out goes through
//! `AuthContext::logout`, which clears local state even if the backend call
//! fails.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::session::context::AuthContext;
use crate::state::ui::UiState;

pub const APP_TITLE: &str = "Calculation OAuth Test App";

/// `(href, label)` pairs shown in the header navigation.
pub const NAV_LINKS: &[(&str, &str)] = &[("/", "Home")];

fn nav_link_class(current_path: &str, href: &str) -> &'static str {
    if current_path == href { "nav__link nav__link--active" } else { "nav__link" }
}

fn theme_icon(dark_mode: bool) -> &'static str {
    if dark_mode { "☀" } else { "☾" }
}

#[component]
pub fn MainHeader() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();
    let state = auth.state();

    let on_logout = move |_| auth.logout();

    view! {
        <header class="header">
            <div class="header__inner">
                <a href="/" class="header__title">{APP_TITLE}</a>
                <nav>
                    <ul class="nav">
                        {NAV_LINKS
                            .iter()
                            .map(|(href, label)| {
                                view! {
                                    <li class=move || nav_link_class(&location.pathname.get(), href)>
                                        <a href=*href>{*label}</a>
                                    </li>
                                }
                            })
                            .collect_view()}
                        <li>
                            <button
                                class="btn btn--ghost"
                                title="Toggle dark mode"
                                on:click=move |_| {
                                    let next = crate::util::dark_mode::toggle(ui.get_untracked().dark_mode);
                                    ui.update(|u| u.dark_mode = next);
                                }
                            >
                                {move || theme_icon(ui.get().dark_mode)}
                            </button>
                        </li>
                        <Show when=move || state.get().is_authenticated()>
                            <li>
                                <button class="btn btn--outline" on:click=on_logout.clone()>
                                    "Sign Out"
                                </button>
                            </li>
                        </Show>
                    </ul>
                </nav>
            </div>
        </header>
    }
}
