//! Display formatting for amounts, dates and contact details.
//!
//! # Design
//! - Follow the `vi-VN` conventions: `.` groups thousands, `,` separates decimals.
//! - Keep every helper pure so views can call them during render.
//! - Degrade to the raw input (or a placeholder) instead of failing.

use chrono::{NaiveDate, NaiveDateTime};
use salesdesk_api_models::parse_timestamp;

/// Currency symbol appended to VND amounts, after a non-breaking space.
pub const CURRENCY_SUFFIX: &str = "\u{a0}₫";
/// Placeholder for absent values.
pub const DEFAULT_PLACEHOLDER: &str = "-";
/// Default cut-off for [`truncate_text`].
pub const DEFAULT_TRUNCATE: usize = 50;

const DIGITS: [&str; 10] = [
    "", "một", "hai", "ba", "bốn", "năm", "sáu", "bảy", "tám", "chín",
];
/// Group names up to 10^18, enough for any `i64`.
const SCALES: [&str; 7] = [
    "", "nghìn", "triệu", "tỷ", "nghìn tỷ", "triệu tỷ", "tỷ tỷ",
];

/// Format a VND amount with zero decimals (`1.256.000.000 ₫`).
#[must_use]
pub fn format_currency(amount: f64) -> String {
    format!("{}{CURRENCY_SUFFIX}", format_number(amount, 0))
}

/// Format a number with `.` grouping and a fixed count of `,` decimals.
#[must_use]
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let fixed = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let mut out = String::with_capacity(fixed.len() + integer.len() / 3 + 1);
    let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));
    if !fraction.is_empty() {
        out.push(',');
        out.push_str(fraction);
    }
    out
}

/// Format a percentage given in percent units (`12.5` → `12,50%`).
#[must_use]
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{}%", format_number(value, decimals))
}

/// Signed growth badge text with one decimal (`+12.5%`, `-3.0%`).
#[must_use]
pub fn growth_label(value: f64) -> String {
    if value >= 0.0 {
        format!("+{value:.1}%")
    } else {
        format!("{value:.1}%")
    }
}

/// Compact tick label for chart axes.
#[must_use]
pub fn format_axis(value: f64) -> String {
    if value >= 1_000_000_000.0 {
        format!("{:.1} tỷ", value / 1_000_000_000.0)
    } else if value >= 1_000_000.0 {
        format!("{:.1} tr", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1} k", value / 1_000.0)
    } else {
        format!("{value:.0}")
    }
}

/// `dd/mm/yyyy`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `dd/mm/yyyy HH:MM`.
#[must_use]
pub fn format_datetime(value: NaiveDateTime) -> String {
    value.format("%d/%m/%Y %H:%M").to_string()
}

/// Format a backend date string, or return an empty string when it does not parse.
#[must_use]
pub fn format_date_str(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(String::new, |value| format_date(value.date()))
}

/// Group a 10-digit phone number as `XXXX XXX XXX`; anything else is returned unchanged.
#[must_use]
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 10 {
        format!("{} {} {}", &digits[..4], &digits[4..7], &digits[7..])
    } else {
        raw.to_string()
    }
}

/// Cut text after `max` characters and append `...`.
#[must_use]
pub fn truncate_text(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max).collect();
    out.push_str("...");
    out
}

/// Return `value`, or `placeholder` when it is absent or blank.
#[must_use]
pub fn format_nullable<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    match value {
        Some(text) if !text.trim().is_empty() => text,
        _ => placeholder,
    }
}

/// [`amount_in_words`] for a stored amount, rounded to whole dong.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn money_in_words(amount: f64) -> String {
    if !amount.is_finite() {
        return amount_in_words(0);
    }
    amount_in_words(amount.round() as i64)
}

/// Read a money amount aloud in Vietnamese, ending in `đồng`.
#[must_use]
pub fn amount_in_words(amount: i64) -> String {
    if amount == 0 {
        return "không".to_string();
    }
    let mut rest = amount.unsigned_abs();
    let mut groups = Vec::new();
    while rest > 0 {
        groups.push(rest % 1000);
        rest /= 1000;
    }

    let mut words = String::new();
    for (scale, group) in groups.iter().enumerate().rev() {
        if *group == 0 {
            continue;
        }
        words.push_str(&read_group(*group));
        words.push(' ');
        words.push_str(SCALES.get(scale).copied().unwrap_or_default());
        words.push(' ');
    }
    let mut words = words.split_whitespace().collect::<Vec<_>>().join(" ");
    if amount < 0 {
        words.insert_str(0, "âm ");
    }
    let mut chars = words.chars();
    let capitalized = chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect::<String>()
    });
    format!("{capitalized} đồng")
}

fn read_group(group: u64) -> String {
    let hundred = usize::try_from(group / 100).unwrap_or_default();
    let ten = usize::try_from(group % 100 / 10).unwrap_or_default();
    let unit = usize::try_from(group % 10).unwrap_or_default();
    let mut parts: Vec<&str> = Vec::with_capacity(4);
    if hundred > 0 {
        parts.extend([DIGITS[hundred], "trăm"]);
    }
    match ten {
        0 => {}
        1 => parts.push("mười"),
        _ => parts.extend([DIGITS[ten], "mươi"]),
    }
    if unit > 0 {
        if ten > 1 && unit == 1 {
            parts.push("mốt");
        } else if ten > 0 && unit == 5 {
            parts.push("lăm");
        } else if ten == 0 && hundred > 0 {
            parts.extend(["lẻ", DIGITS[unit]]);
        } else {
            parts.push(DIGITS[unit]);
        }
    }
    parts.join(" ")
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_uses_vietnamese_grouping() {
        assert_eq!(format_currency(1_256_000_000.0), "1.256.000.000\u{a0}₫");
        assert_eq!(format_currency(0.0), "0\u{a0}₫");
        assert_eq!(format_currency(999.4), "999\u{a0}₫");
        assert_eq!(format_currency(-1500.0), "-1.500\u{a0}₫");
    }

    #[test]
    fn numbers_and_percentages_use_comma_decimals() {
        assert_eq!(format_number(1234.5, 2), "1.234,50");
        assert_eq!(format_number(-0.001, 2), "0,00");
        assert_eq!(format_percent(12.5, 2), "12,50%");
        assert_eq!(format_number(f64::NAN, 2), "0");
    }

    #[test]
    fn growth_labels_are_signed() {
        assert_eq!(growth_label(12.5), "+12.5%");
        assert_eq!(growth_label(0.0), "+0.0%");
        assert_eq!(growth_label(-3.04), "-3.0%");
    }

    #[test]
    fn axis_labels_compact_large_values() {
        assert_eq!(format_axis(1_500_000_000.0), "1.5 tỷ");
        assert_eq!(format_axis(5_000_000.0), "5.0 tr");
        assert_eq!(format_axis(3_200.0), "3.2 k");
        assert_eq!(format_axis(640.0), "640");
    }

    #[test]
    fn dates_render_day_first() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).expect("valid date");
        assert_eq!(format_date(date), "05/01/2024");
        let stamp = date.and_hms_opt(9, 7, 0).expect("valid time");
        assert_eq!(format_datetime(stamp), "05/01/2024 09:07");
        assert_eq!(format_date_str("2024-01-05T00:00:00"), "05/01/2024");
        assert_eq!(format_date_str("not a date"), "");
    }

    #[test]
    fn phone_numbers_group_only_ten_digits() {
        assert_eq!(format_phone("0912345678"), "0912 345 678");
        assert_eq!(format_phone("0912-345-678"), "0912 345 678");
        assert_eq!(format_phone("09123456789"), "09123456789");
        assert_eq!(format_phone(""), "");
    }

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate_text("Hóa đơn", 50), "Hóa đơn");
        assert_eq!(truncate_text("Phần mềm quản lý", 8), "Phần mềm...");
    }

    #[test]
    fn nullable_values_fall_back_to_placeholder() {
        assert_eq!(format_nullable(None, DEFAULT_PLACEHOLDER), "-");
        assert_eq!(format_nullable(Some("  "), DEFAULT_PLACEHOLDER), "-");
        assert_eq!(format_nullable(Some("KH0001"), DEFAULT_PLACEHOLDER), "KH0001");
    }

    #[test]
    fn amounts_read_in_vietnamese() {
        assert_eq!(amount_in_words(0), "không");
        assert_eq!(
            amount_in_words(1_250_000),
            "Một triệu hai trăm năm mươi nghìn đồng"
        );
        assert_eq!(amount_in_words(105), "Một trăm lẻ năm đồng");
        assert_eq!(amount_in_words(15), "Mười lăm đồng");
        assert_eq!(amount_in_words(21), "Hai mươi mốt đồng");
        assert_eq!(amount_in_words(-1_000), "Âm một nghìn đồng");
        assert_eq!(amount_in_words(2_000_000_005), "Hai tỷ năm đồng");
        assert_eq!(money_in_words(20.6), "Hai mươi mốt đồng");
        assert_eq!(money_in_words(f64::NAN), "không");
    }

    #[test]
    fn largest_amounts_keep_their_scale() {
        assert_eq!(amount_in_words(1_000_000_000_000_000_000), "Một tỷ tỷ đồng");
        assert_eq!(amount_in_words(3_000_000_000_000_000_000), "Ba tỷ tỷ đồng");
        assert!(
            amount_in_words(i64::MAX).starts_with("Chín tỷ tỷ hai trăm hai mươi ba triệu tỷ")
        );
        assert!(amount_in_words(i64::MIN).starts_with("Âm chín tỷ tỷ"));
    }
}
