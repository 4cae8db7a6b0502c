//! Formatting helpers for presenting metrics and document fields.

use serde_json::Value;
use time::{macros::format_description, UtcOffset};

use super::summary::parse_timestamp;

/// Table cells collapse sequences longer than this to an item count.
const LITERAL_SEQUENCE_LIMIT: usize = 3;

/// Thousands-separated integer display: `12345` → `12,345`.
pub fn format_count(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();
    let grouped = group_digits(&digits);
    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Fixed-precision float display, e.g. `format_number(1.234, 2)` → `1.23`.
pub fn format_number(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Type-aware stringification for the raw metrics table: numbers get
/// thousands separators, short sequences render literally, longer ones
/// collapse to an item count, mappings to a key count.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Number(_) => format_json_number(value),
        Value::Array(items) => {
            if items.len() <= LITERAL_SEQUENCE_LIMIT {
                let rendered: Vec<String> = items.iter().map(display_scalar).collect();
                format!("[{}]", rendered.join(", "))
            } else {
                format!("[{} items]", items.len())
            }
        }
        Value::Object(map) => format!("{{{} key-value pairs}}", map.len()),
        other => display_scalar(other),
    }
}

/// Metadata/sample date display: an ISO datetime renders as
/// `YYYY-MM-DD HH:MM:SS UTC`, a plain date unchanged, anything else
/// verbatim.
pub fn display_date(raw: &str) -> String {
    if raw.contains('T') {
        if let Some(stamp) = parse_timestamp(raw) {
            let utc = stamp.to_offset(UtcOffset::UTC);
            let layout = format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC");
            if let Ok(formatted) = utc.format(&layout) {
                return formatted;
            }
        }
        return raw.to_string();
    }

    // Plain dates (and anything else) already read the way we'd print them.
    raw.to_string()
}

fn display_scalar(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(_) => format_json_number(value),
        other => other.to_string(),
    }
}

fn format_json_number(value: &Value) -> String {
    if let Some(integer) = value.as_i64() {
        return format_count(integer);
    }
    match value.as_f64() {
        Some(float) if float.is_finite() => {
            let rendered = float.to_string();
            let (sign, body) = match rendered.strip_prefix('-') {
                Some(rest) => ("-", rest),
                None => ("", rendered.as_str()),
            };
            match body.split_once('.') {
                Some((integer_part, fraction)) => {
                    format!("{sign}{}.{fraction}", group_digits(integer_part))
                }
                None => format!("{sign}{}", group_digits(body)),
            }
        }
        _ => value.to_string(),
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (index + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn counts_are_thousands_separated() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(12_345), "12,345");
        assert_eq!(format_count(1_234_567), "1,234,567");
        assert_eq!(format_count(-54_321), "-54,321");
    }

    #[test]
    fn numbers_in_table_cells_are_separated_too() {
        assert_eq!(display_value(&json!(1234567)), "1,234,567");
        assert_eq!(display_value(&json!(1234.5)), "1,234.5");
        // Integral floats (scientific notation in the source) group as well.
        assert_eq!(display_value(&json!(8.1e8)), "810,000,000");
    }

    #[test]
    fn short_sequences_render_literally() {
        assert_eq!(display_value(&json!([1, 2, 3])), "[1, 2, 3]");
        assert_eq!(display_value(&json!([])), "[]");
    }

    #[test]
    fn long_sequences_collapse_to_an_item_count() {
        assert_eq!(display_value(&json!([1, 2, 3, 4])), "[4 items]");
    }

    #[test]
    fn mappings_collapse_to_a_key_count() {
        assert_eq!(
            display_value(&json!({"a": 1, "b": 2})),
            "{2 key-value pairs}"
        );
    }

    #[test]
    fn scalars_render_plainly() {
        assert_eq!(display_value(&json!("QC passed")), "QC passed");
        assert_eq!(display_value(&json!(true)), "true");
        assert_eq!(display_value(&json!(null)), "null");
    }

    #[test]
    fn datetimes_display_as_utc() {
        assert_eq!(
            display_date("2024-01-15T10:30:00Z"),
            "2024-01-15 10:30:00 UTC"
        );
        assert_eq!(
            display_date("2024-01-15T12:30:00+02:00"),
            "2024-01-15 10:30:00 UTC"
        );
    }

    #[test]
    fn plain_dates_and_garbage_pass_through() {
        assert_eq!(display_date("2024-01-15"), "2024-01-15");
        assert_eq!(display_date("last tuesday"), "last tuesday");
    }

    #[test]
    fn format_number_fixes_decimals() {
        assert_eq!(format_number(1.2345, 2), "1.23");
        assert_eq!(format_number(2.0, 3), "2.000");
    }
}
