//! `document.cookie` string helpers.
//!
//! The browser exposes cookies as one `name1=value1; name2=value2` string and
//! accepts writes one `Set-Cookie`-style assignment at a time. These helpers
//! keep that string handling pure so it can be tested off-browser.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Extract the value of cookie `name` from a `document.cookie` string.
///
/// Empty values are reported as absent.
#[must_use]
pub fn parse_cookie_value(cookie_str: &str, name: &str) -> Option<String> {
    cookie_str
        .split(';')
        .filter_map(|part| part.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Format a root-path cookie assignment that lives for `max_age_secs`.
#[must_use]
pub fn format_cookie(name: &str, value: &str, max_age_secs: u64) -> String {
    format!("{name}={value}; path=/; max-age={max_age_secs}")
}

/// Format an assignment that makes the browser drop cookie `name` immediately.
#[must_use]
pub fn format_expired_cookie(name: &str) -> String {
    format!("{name}=; path=/; max-age=0; expires=Thu, 01 Jan 1970 00:00:00 GMT")
}
