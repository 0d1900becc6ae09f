use chrono::NaiveDateTime;

/// Format of `created_at` in API responses.
pub const API_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
/// Human format, e.g. `Nov 05, 2023 at 14:30`.
pub const DISPLAY_FORMAT: &str = "%b %d, %Y at %H:%M";
pub const UNKNOWN_TIME: &str = "an unknown time";

pub fn parse_api_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, API_TIMESTAMP_FORMAT).ok()
}

/// Render an optional API timestamp for display, or `an unknown time` when
/// it is absent or does not match the API format.
pub fn format_created_at(created_at: Option<&str>) -> String {
    match created_at.and_then(parse_api_timestamp) {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => UNKNOWN_TIME.to_string(),
    }
}
