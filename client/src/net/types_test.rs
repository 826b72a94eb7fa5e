use super::*;

fn make_user() -> User {
    User {
        id: "42".to_owned(),
        name: "Ada Lovelace".to_owned(),
        email: "ada@x.com".to_owned(),
        avatar: Some("https://example.com/ada.png".to_owned()),
    }
}

// =============================================================
// User serde
// =============================================================

#[test]
fn user_round_trips_through_json() {
    let user = make_user();
    let raw = serde_json::to_string(&user).unwrap();
    let back: User = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, user);
}

#[test]
fn user_without_avatar_omits_the_field() {
    let user = User { avatar: None, ..make_user() };
    let value = serde_json::to_value(&user).unwrap();
    assert!(value.get("avatar").is_none());
}

#[test]
fn user_deserializes_without_avatar_field() {
    let user: User =
        serde_json::from_str(r#"{"id":"1","name":"Grace","email":"grace@x.com"}"#).unwrap();
    assert_eq!(user.avatar, None);
}

// =============================================================
// Placeholder
// =============================================================

#[test]
fn placeholder_uses_documented_defaults() {
    let user = User::placeholder();
    assert_eq!(user.id, "user");
    assert_eq!(user.name, "User");
    assert_eq!(user.email, "user@example.com");
    assert_eq!(user.avatar, None);
}
