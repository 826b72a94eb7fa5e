use super::*;
use crate::net::types::User;

fn ada() -> User {
    User {
        id: "42".to_owned(),
        name: "Ada Lovelace".to_owned(),
        email: "ada@x.com".to_owned(),
        avatar: None,
    }
}

#[test]
fn loading_state_shows_loading() {
    assert_eq!(home_view(&SessionState::loading()), HomeView::Loading);
}

#[test]
fn signed_out_state_shows_call_to_action() {
    assert_eq!(home_view(&SessionState::signed_out()), HomeView::SignedOut);
}

#[test]
fn cached_user_without_token_is_not_greeted() {
    assert_eq!(home_view(&SessionState::restored(Some(ada()), false)), HomeView::SignedOut);
}

#[test]
fn signed_in_state_greets_by_name() {
    assert_eq!(
        home_view(&SessionState::signed_in(ada())),
        HomeView::Welcome { heading: "Welcome, Ada Lovelace!".to_owned(), email: "ada@x.com".to_owned() }
    );
}
