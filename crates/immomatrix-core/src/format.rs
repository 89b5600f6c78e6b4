//! Swiss German (de-CH) number and currency formatting.
//!
//! Mirrors the browser's `Intl.NumberFormat("de-CH")` output for the
//! cases the calculators display: whole francs, integer counts, and
//! one-decimal percentages. Groups of three digits are separated by a
//! right single quotation mark (U+2019).

/// Thousands separator used by de-CH.
pub const GROUP_SEPARATOR: char = '\u{2019}';

/// Format an amount as whole Swiss francs, e.g. `CHF 40’500`.
///
/// Rounds half away from zero. Negative amounts render as `CHF-1’000`,
/// including amounts that round to zero (`-0.2` becomes `CHF-0`).
#[must_use]
pub fn format_chf(value: f64) -> String {
    if !value.is_finite() {
        return format!("CHF {}", non_finite(value));
    }
    let rounded = value.round();
    let digits = group_digits(&format!("{:.0}", rounded.abs()));
    if rounded.is_sign_negative() {
        format!("CHF-{digits}")
    } else {
        format!("CHF {digits}")
    }
}

/// Format an integer count with de-CH grouping, e.g. `1’000`.
#[must_use]
pub fn format_count(value: i64) -> String {
    let digits = group_digits(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Format a percentage with one decimal, e.g. `2790.0%`.
///
/// The integer part is not grouped.
#[must_use]
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return format!("{}%", non_finite(value));
    }
    format!("{value:.1}%")
}

/// Format a plain decimal with up to three fraction digits, e.g. `2.5`.
#[must_use]
pub fn format_decimal(value: f64) -> String {
    if !value.is_finite() {
        return non_finite(value).to_string();
    }
    let fixed = format!("{:.3}", value.abs());
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    let (int_part, frac_part) = match trimmed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (trimmed, None),
    };
    let mut out = String::new();
    if value < 0.0 && trimmed != "0" {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn non_finite(value: f64) -> &'static str {
    if value.is_nan() {
        "NaN"
    } else if value > 0.0 {
        "∞"
    } else {
        "-∞"
    }
}

/// Insert group separators into a string of ASCII digits.
fn group_digits(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() * 2);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(GROUP_SEPARATOR);
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
