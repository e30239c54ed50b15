//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Format a decimal price in Thai baht with thousands separators.
///
/// Whole amounts drop the fraction ("฿5,000"); fractional amounts keep two
/// places ("฿5,000.50").
///
/// Usage in templates: `{{ product.price|thb }}`
#[askama::filter_fn]
pub fn thb(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_thb(&value.to_string()))
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Returns the content hash for main.css.
///
/// The hash is computed at build time from the CSS file content.
///
/// Usage in templates: `{{ ""|css_hash }}`
#[askama::filter_fn]
pub fn css_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(env!("CSS_HASH"))
}

/// Group the integer digits of a decimal string and prefix the baht sign.
fn format_thb(amount: &str) -> String {
    let (sign, amount) = amount
        .strip_prefix('-')
        .map_or(("", amount), |rest| ("-", rest));
    let (int_part, frac_part) = amount.split_once('.').unwrap_or((amount, ""));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i).is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(c);
    }

    // Keep two decimal places only when the fraction is non-zero.
    let frac = frac_part.trim_end_matches('0');
    if frac.is_empty() {
        format!("{sign}฿{grouped}")
    } else {
        format!("{sign}฿{grouped}.{frac:0<2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thb_groups_thousands() {
        assert_eq!(format_thb("5000"), "฿5,000");
        assert_eq!(format_thb("1234567"), "฿1,234,567");
        assert_eq!(format_thb("999"), "฿999");
        assert_eq!(format_thb("0"), "฿0");
    }

    #[test]
    fn test_format_thb_fractions() {
        assert_eq!(format_thb("5000.50"), "฿5,000.50");
        assert_eq!(format_thb("5000.5"), "฿5,000.50");
        assert_eq!(format_thb("5000.00"), "฿5,000");
    }

    #[test]
    fn test_format_thb_negative() {
        // Prices are non-negative by invariant; the filter still behaves.
        assert_eq!(format_thb("-150"), "-฿150");
    }
}
