// Display formatting helpers
use chrono::{DateTime, Local, NaiveDateTime};

/// Shown wherever a value is missing.
pub const PLACEHOLDER: &str = "--";

const INPUT_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format a number the way the backend's JSON wrote it: whole values without a
/// fractional part, everything else with the shortest exact representation.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

pub fn format_optional(value: Option<f64>) -> String {
    value.map(format_number).unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Format a record timestamp for display.
///
/// Accepts ISO-8601 local times with or without seconds, and RFC 3339 with an
/// offset. Anything else is shown verbatim.
pub fn format_date_time(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format(DISPLAY_FORMAT).to_string();
    }

    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|parsed| parsed.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| raw.to_string())
}

pub fn format_updated_at(at: DateTime<Local>) -> String {
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn day_night_label(is_day: bool) -> &'static str {
    if is_day { "☀️ Day" } else { "🌙 Night" }
}
