//! Year and value coercion.

use once_cell::sync::Lazy;
use regex::Regex;

/// Everything that is not a digit or a decimal point.
static NON_NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9.]").expect("NON_NUMERIC pattern is valid"));

/// Parse a year label. `None` if it is not an integer.
pub fn parse_year(label: &str) -> Option<i32> {
    label.trim().parse::<i32>().ok()
}

/// Remove every character except ASCII digits and `.`.
///
/// Annotation flags (`b`, `e`, `p`, ...), colons and whitespace go away:
/// `"80.5 b"` becomes `"80.5"`, `":"` becomes `""`.
pub fn strip_non_numeric(raw: &str) -> String {
    NON_NUMERIC.replace_all(raw, "").into_owned()
}

/// Strip a raw cell and parse it as a float.
///
/// `None` when nothing numeric is left, when the remainder is not a number
/// (`"."`, `"1.2.3"`) or when it overflows to infinity.
pub fn parse_value(raw: &str) -> Option<f64> {
    let cleaned = strip_non_numeric(raw);
    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
