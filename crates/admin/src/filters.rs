//! Custom Askama template filters for the admin pages.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Current year, for the footer copyright line.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Shortens a long value for a table cell, keeping the head and tail so CDN
/// image URLs stay recognizable.
///
/// Usage in templates: `{{ billboard.image_url|elide(48) }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn elide(value: impl Display, _env: &dyn askama::Values, max: usize) -> askama::Result<String> {
    Ok(elide_text(&value.to_string(), max))
}

fn elide_text(text: &str, max: usize) -> String {
    let len = text.chars().count();
    if len <= max {
        return text.to_string();
    }

    let keep = max.saturating_sub(1) / 2;
    let head: String = text.chars().take(keep).collect();
    let tail: String = text.chars().skip(len - keep).collect();
    format!("{head}\u{2026}{tail}")
}
