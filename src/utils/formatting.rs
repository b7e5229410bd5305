//! Formatting utilities used for CLI outputs.

use unicode_width::UnicodeWidthStr;

/// Remove ANSI escape sequences, for width math on colored strings.
pub fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// Terminal cell width of a string, ignoring ANSI escapes.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

/// Currency amount with two decimals, no symbol (the currency is whatever
/// the salary was entered in).
pub fn format_money(amount: f64) -> String {
    format!("{:.2}", amount)
}

pub fn format_percent(pct: f64) -> String {
    format!("{:.1}%", pct)
}
