use serde_json::Value;

pub const MIN_GUESTS: i64 = 1;
pub const MAX_GUESTS: i64 = 99;

/// Trims a string field and treats empty-after-trim as absent.
pub fn clean_optional(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

/// Party size coercion mirroring the lenient wire format: JSON numbers are
/// truncated to integers and clamped to [1, 99]; anything else (missing,
/// strings, arrays) falls back to 1.
pub fn coerce_guests_count(value: Option<&Value>) -> i32 {
    let raw = value
        .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))
        .unwrap_or(MIN_GUESTS);
    raw.clamp(MIN_GUESTS, MAX_GUESTS) as i32
}

/// Guest names default to empty unless the payload carries an actual array;
/// non-string elements are dropped.
pub fn coerce_guest_names(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
