//! Custom Askama template filters.

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Content hash of main.css, computed at build time; empty if unavailable.
const CSS_HASH: &str = env!("CSS_HASH");

/// Returns the stylesheet URL.
///
/// Points at the content-addressed copy written by the build script, or at
/// the plain stylesheet when no hash was computed.
///
/// Usage in templates: `{{ ""|css_href }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn css_href(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(stylesheet_path(CSS_HASH))
}

fn stylesheet_path(hash: &str) -> String {
    if hash.is_empty() {
        "/static/css/main.css".to_string()
    } else {
        format!("/static/css/derived/main.{hash}.css")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_path_uses_hash() {
        assert_eq!(stylesheet_path("1a2b3c4d"), "/static/css/derived/main.1a2b3c4d.css");
    }

    #[test]
    fn test_stylesheet_path_without_hash() {
        assert_eq!(stylesheet_path(""), "/static/css/main.css");
    }
}
