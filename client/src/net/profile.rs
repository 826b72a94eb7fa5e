//! Normalization of backend profile payloads into the canonical `User`.
//!
//! DESIGN
//! ======
//! The profile endpoint's shape is only loosely known, so each `User` field is
//! resolved by an ordered list of extraction rules. The first rule that yields
//! a non-empty value wins; when every rule misses, the field's literal default
//! applies.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use serde_json::{Map, Value};

use super::types::{PLACEHOLDER_USER_EMAIL, PLACEHOLDER_USER_ID, PLACEHOLDER_USER_NAME, User};
use crate::error::ProfileFetchFailure;

/// One way of extracting a string from a profile object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extract {
    /// Read a single field.
    Field(&'static str),
    /// Join the present, non-empty fields with a single space.
    Join(&'static [&'static str]),
}

pub const ID_RULES: &[Extract] = &[Extract::Field("id"), Extract::Field("user_id")];

pub const NAME_RULES: &[Extract] = &[
    Extract::Field("full_name"),
    Extract::Field("name"),
    Extract::Join(&["first_name", "last_name"]),
];

pub const EMAIL_RULES: &[Extract] = &[Extract::Field("email")];

pub const AVATAR_RULES: &[Extract] = &[Extract::Field("picture"), Extract::Field("avatar")];

impl Extract {
    fn apply(self, profile: &Map<String, Value>) -> Option<String> {
        match self {
            Self::Field(key) => profile.get(key).and_then(scalar_text),
            Self::Join(keys) => {
                let parts: Vec<String> = keys
                    .iter()
                    .filter_map(|key| profile.get(*key).and_then(scalar_text))
                    .collect();
                if parts.is_empty() { None } else { Some(parts.join(" ")) }
            }
        }
    }
}

/// Run `rules` in order and return the first hit.
#[must_use]
pub fn first_match(profile: &Map<String, Value>, rules: &[Extract]) -> Option<String> {
    rules.iter().find_map(|rule| rule.apply(profile))
}

/// Build the canonical user from a decoded profile response body.
///
/// The profile is read from the `user` envelope when present; otherwise the
/// body itself is taken as the profile object.
///
/// # Errors
///
/// Returns [`ProfileFetchFailure::Malformed`] when neither the envelope nor
/// the body is a JSON object.
pub fn normalize_profile(body: &Value) -> Result<User, ProfileFetchFailure> {
    let profile = match body.get("user") {
        Some(Value::Object(inner)) => inner,
        Some(other) => {
            return Err(ProfileFetchFailure::Malformed(format!("`user` is {}", kind_of(other))));
        }
        None => body
            .as_object()
            .ok_or_else(|| ProfileFetchFailure::Malformed(format!("body is {}", kind_of(body))))?,
    };

    Ok(User {
        id: first_match(profile, ID_RULES).unwrap_or_else(|| PLACEHOLDER_USER_ID.to_owned()),
        name: first_match(profile, NAME_RULES).unwrap_or_else(|| PLACEHOLDER_USER_NAME.to_owned()),
        email: first_match(profile, EMAIL_RULES).unwrap_or_else(|| PLACEHOLDER_USER_EMAIL.to_owned()),
        avatar: first_match(profile, AVATAR_RULES),
    })
}

/// Decode a raw response body and normalize it.
///
/// # Errors
///
/// Returns [`ProfileFetchFailure::Malformed`] for invalid JSON or a non-object body.
pub fn parse_profile(raw: &str) -> Result<User, ProfileFetchFailure> {
    let body: Value = serde_json::from_str(raw).map_err(|e| ProfileFetchFailure::Malformed(e.to_string()))?;
    normalize_profile(&body)
}

// Numeric ids are common on the backend; everything else non-string is ignored.
fn scalar_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_owned(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    if text.is_empty() { None } else { Some(text) }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
