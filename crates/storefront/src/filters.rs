//! Custom Askama template filters.
//!
//! Every module that derives `Template` imports this one, so the generated
//! code can resolve the filters by name.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Footer copyright year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Stylesheet fingerprint for cache busting, computed by `build.rs`.
///
/// Usage in templates: `/static/css/main.css?v={{ ""|css_hash }}`
#[askama::filter_fn]
pub fn css_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(env!("CSS_HASH"))
}

/// Item count with its noun: "1 item", "3 items".
///
/// Usage in templates: `{{ item_count|items }}`
#[askama::filter_fn]
pub fn items(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(count_label(&value.to_string(), "item", "items"))
}

fn count_label(count: &str, one: &str, many: &str) -> String {
    let noun = if count == "1" { one } else { many };
    format!("{count} {noun}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_label() {
        assert_eq!(count_label("1", "item", "items"), "1 item");
        assert_eq!(count_label("0", "item", "items"), "0 items");
        assert_eq!(count_label("12", "item", "items"), "12 items");
    }
}
