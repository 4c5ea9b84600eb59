//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Turns a displayed phone number into a `tel:` link target.
///
/// Keeps digits and a leading `+`, so "08-123 456 78" becomes "tel:0812345678".
///
/// Usage in templates: `{{ phone|tel_href }}`
#[askama::filter_fn]
pub fn tel_href(phone: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(to_tel_href(&phone.to_string()))
}

fn to_tel_href(phone: &str) -> String {
    let trimmed = phone.trim();
    let mut href = String::from("tel:");
    if trimmed.starts_with('+') {
        href.push('+');
    }
    href.extend(trimmed.chars().filter(char::is_ascii_digit));
    href
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tel_href_strips_separators() {
        assert_eq!(to_tel_href("08-123 456 78"), "tel:0812345678");
        assert_eq!(to_tel_href("031-123 45 67"), "tel:0311234567");
    }

    #[test]
    fn test_tel_href_keeps_country_prefix() {
        assert_eq!(to_tel_href(" +46 8 123 456 78"), "tel:+46812345678");
    }
}
