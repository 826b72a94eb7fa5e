use futures::executor::block_on;

use super::*;
use crate::net::types::User;

fn context() -> (Owner, AuthContext) {
    let owner = Owner::new();
    owner.set();
    (owner, AuthContext::new(ClientConfig::new("https://api.example.com")))
}

#[test]
fn starts_loading() {
    let (_owner, auth) = context();
    assert!(auth.state().get_untracked().is_loading());
    assert_eq!(auth.config().base_url(), "https://api.example.com");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn handle_callback_publishes_login_to_state_signal() {
    let (_owner, auth) = context();
    let handler = CallbackHandler::new();
    let params = CallbackParams::from_pairs([("access_token", "acc")]);

    let outcome = block_on(auth.handle_callback(&handler, &params));

    // Off-browser the profile call fails, so the placeholder identity is used.
    assert_eq!(outcome, CallbackOutcome::SignedIn { user: User::placeholder(), placeholder: true });
    assert_eq!(auth.state().get_untracked(), SessionState::signed_in(User::placeholder()));
}

#[test]
fn handle_callback_without_token_leaves_state_loading() {
    let (_owner, auth) = context();
    let handler = CallbackHandler::new();

    let outcome = block_on(auth.handle_callback(&handler, &CallbackParams::default()));

    assert_eq!(outcome, CallbackOutcome::NoToken);
    assert!(auth.state().get_untracked().is_loading());
}

#[test]
fn handle_callback_is_suppressed_on_second_run_of_a_visit() {
    let (_owner, auth) = context();
    let handler = CallbackHandler::new();

    block_on(auth.handle_callback(&handler, &CallbackParams::default()));
    let again = block_on(auth.handle_callback(&handler, &CallbackParams::default()));

    assert_eq!(again, CallbackOutcome::Suppressed);
}
