//! Format checks: `email`, `url`, `alpha`, `alpha_dash`, `date`.
//!
//! All of these inspect the loose string rendering of the value, so a
//! missing or null field renders empty and fails. `date` demands the exact
//! zero-padded `YYYY-MM-DD` form: the value must parse as a real calendar
//! date and re-render byte-for-byte, which rejects both impossible dates
//! (`2024-02-30`) and non-padded forms (`2024-2-3`).

use std::sync::LazyLock;

use chrono::NaiveDate;
use formguard_model::value::value_to_string;
use regex::Regex;
use serde_json::Value;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email regex"));

static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://\S+$").expect("invalid URL regex"));

const DATE_FORMAT: &str = "%Y-%m-%d";

fn rendered(value: Option<&Value>) -> String {
    value.map(value_to_string).unwrap_or_default()
}

pub(crate) fn is_email(value: Option<&Value>) -> bool {
    EMAIL_REGEX.is_match(&rendered(value))
}

pub(crate) fn is_url(value: Option<&Value>) -> bool {
    URL_REGEX.is_match(&rendered(value))
}

pub(crate) fn is_alpha(value: Option<&Value>) -> bool {
    let text = rendered(value);
    !text.is_empty() && text.chars().all(|ch| ch.is_ascii_alphabetic())
}

pub(crate) fn is_alpha_dash(value: Option<&Value>) -> bool {
    let text = rendered(value);
    !text.is_empty()
        && text
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-')
}

pub(crate) fn is_date(value: Option<&Value>) -> bool {
    let text = rendered(value);
    match NaiveDate::parse_from_str(&text, DATE_FORMAT) {
        Ok(date) => date.format(DATE_FORMAT).to_string() == text,
        Err(_) => false,
    }
}
