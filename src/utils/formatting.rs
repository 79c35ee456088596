//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

/// Spaces needed to bring `s` to `width` terminal columns.
fn fill(s: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(UnicodeWidthStr::width(s)))
}

/// Pad on the right by display width (CJK and emoji count as 2 columns).
pub fn pad_right(s: &str, width: usize) -> String {
    format!("{}{}", s, fill(s, width))
}

/// Pad on the left by display width.
pub fn pad_left(s: &str, width: usize) -> String {
    format!("{}{}", fill(s, width), s)
}

/// Render an hour amount with the given decimal separator.
///
/// Whole values have no fractional part (`8`), the rest keep the shortest
/// exact representation (`7,5` with `,`).
pub fn format_hours(hours: f64, decimal_separator: char) -> String {
    let raw = if hours.fract() == 0.0 && hours.is_finite() {
        format!("{}", hours as i64)
    } else {
        format!("{}", hours)
    };

    if decimal_separator == '.' {
        raw
    } else {
        raw.replace('.', &decimal_separator.to_string())
    }
}

/// Hide most of a secret, keeping the last 4 chars as a hint.
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("{}{}", "*".repeat(count - 4), tail)
}
