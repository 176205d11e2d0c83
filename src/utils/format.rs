/// Format a minute value with one decimal place. NaN is rendered as `nan`.
pub fn format_minutes(minutes: f64) -> String {
    if minutes.is_nan() {
        "nan".to_string()
    } else {
        format!("{:.1}", minutes)
    }
}

/// Format a table cell value with six decimal places, `NaN` when undefined
pub fn format_table_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{:.6}", value)
    }
}
