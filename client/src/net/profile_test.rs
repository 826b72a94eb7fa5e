use serde_json::json;

use super::*;

// =============================================================
// Documented shapes
// =============================================================

#[test]
fn full_name_profile_maps_directly() {
    let user = normalize_profile(&json!({
        "user": { "id": "42", "full_name": "Ada Lovelace", "email": "ada@x.com" }
    }))
    .unwrap();
    assert_eq!(
        user,
        User {
            id: "42".to_owned(),
            name: "Ada Lovelace".to_owned(),
            email: "ada@x.com".to_owned(),
            avatar: None,
        }
    );
}

#[test]
fn first_and_last_name_are_joined_and_defaults_fill_the_rest() {
    let user = normalize_profile(&json!({
        "user": { "first_name": "Ada", "last_name": "Lovelace" }
    }))
    .unwrap();
    assert_eq!(
        user,
        User {
            id: "user".to_owned(),
            name: "Ada Lovelace".to_owned(),
            email: "user@example.com".to_owned(),
            avatar: None,
        }
    );
}

// =============================================================
// Rule priority
// =============================================================

#[test]
fn id_prefers_id_over_user_id() {
    let user = normalize_profile(&json!({ "user": { "id": "a", "user_id": "b" } })).unwrap();
    assert_eq!(user.id, "a");
}

#[test]
fn user_id_used_when_id_missing() {
    let user = normalize_profile(&json!({ "user": { "user_id": "b" } })).unwrap();
    assert_eq!(user.id, "b");
}

#[test]
fn numeric_id_is_stringified() {
    let user = normalize_profile(&json!({ "user": { "id": 7 } })).unwrap();
    assert_eq!(user.id, "7");
}

#[test]
fn full_name_beats_name_beats_parts() {
    let all = json!({ "user": {
        "full_name": "Full", "name": "Name", "first_name": "First", "last_name": "Last"
    }});
    assert_eq!(normalize_profile(&all).unwrap().name, "Full");

    let no_full = json!({ "user": { "name": "Name", "first_name": "First" } });
    assert_eq!(normalize_profile(&no_full).unwrap().name, "Name");
}

#[test]
fn single_name_part_is_used_alone() {
    let user = normalize_profile(&json!({ "user": { "first_name": "Ada" } })).unwrap();
    assert_eq!(user.name, "Ada");
}

#[test]
fn empty_strings_count_as_absent() {
    let user = normalize_profile(&json!({ "user": {
        "full_name": "", "name": "  ", "first_name": "Ada", "email": ""
    }}))
    .unwrap();
    assert_eq!(user.name, "Ada");
    assert_eq!(user.email, "user@example.com");
}

#[test]
fn avatar_prefers_picture() {
    let user = normalize_profile(&json!({ "user": { "picture": "p.png", "avatar": "a.png" } })).unwrap();
    assert_eq!(user.avatar.as_deref(), Some("p.png"));

    let user = normalize_profile(&json!({ "user": { "avatar": "a.png" } })).unwrap();
    assert_eq!(user.avatar.as_deref(), Some("a.png"));
}

#[test]
fn first_match_returns_none_when_every_rule_misses() {
    let profile = serde_json::Map::new();
    assert_eq!(first_match(&profile, NAME_RULES), None);
}

// =============================================================
// Envelope handling
// =============================================================

#[test]
fn bare_profile_object_is_accepted() {
    let user = normalize_profile(&json!({ "id": "9", "name": "Grace", "email": "g@x.com" })).unwrap();
    assert_eq!(user.id, "9");
    assert_eq!(user.name, "Grace");
}

#[test]
fn non_object_user_envelope_is_malformed() {
    let err = normalize_profile(&json!({ "user": "nope" })).unwrap_err();
    assert!(matches!(err, ProfileFetchFailure::Malformed(_)));
}

#[test]
fn non_object_body_is_malformed() {
    let err = normalize_profile(&json!([1, 2, 3])).unwrap_err();
    assert!(matches!(err, ProfileFetchFailure::Malformed(_)));
}

#[test]
fn parse_profile_rejects_invalid_json() {
    let err = parse_profile("<html>").unwrap_err();
    assert!(matches!(err, ProfileFetchFailure::Malformed(_)));
}

#[test]
fn parse_profile_decodes_text_body() {
    let user = parse_profile(r#"{"user":{"id":"1","email":"e@x.com"}}"#).unwrap();
    assert_eq!(user.id, "1");
    assert_eq!(user.name, "User");
}
