//! Response formatting for display.
//!
//! Decides how a response body is rendered (JSON bodies go through the
//! streaming re-indenter, everything else is shown as lossy text) and
//! provides the small presentation helpers the UI shares: human-readable
//! sizes and durations.

pub mod json;

use crate::models::HttpResponse;
use std::time::Duration;

/// Checks whether a Content-Type value indicates JSON.
///
/// Case-insensitive substring match, so `application/json`,
/// `application/problem+json; charset=utf-8`, and friends all qualify.
pub fn is_json(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains("json")
}

/// Renders a response body for display.
///
/// JSON bodies (per the Content-Type header) are re-indented by the
/// streaming formatter; anything else is decoded as lossy UTF-8 text.
///
/// # Arguments
///
/// * `response` - The response snapshot to render
pub fn format_body(response: &HttpResponse) -> String {
    if response.body.is_empty() {
        return String::new();
    }

    if is_json(&response.content_type) {
        json::reindent(&response.body)
    } else {
        String::from_utf8_lossy(&response.body).into_owned()
    }
}

/// Formats a byte count as a human-readable size.
///
/// Sizes below 1024 bytes are exact; larger ones use binary units with one
/// decimal place.
///
/// # Examples
///
/// ```
/// use reqtui::formatter::format_size;
///
/// assert_eq!(format_size(512), "512 B");
/// assert_eq!(format_size(1536), "1.5 KB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNIT: u64 = 1024;
    if bytes < UNIT {
        return format!("{} B", bytes);
    }

    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }

    const UNITS: [&str; 6] = ["K", "M", "G", "T", "P", "E"];
    format!("{:.1} {}B", bytes as f64 / div as f64, UNITS[exp])
}

/// Formats a duration as milliseconds below one second, seconds above.
pub fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis < 1000 {
        format!("{}ms", millis)
    } else {
        format!("{:.2}s", duration.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;

    fn response(content_type: &str, body: &[u8]) -> HttpResponse {
        HttpResponse {
            status_code: 200,
            status_text: "OK".to_string(),
            headers: HashMap::new(),
            body: body.to_vec(),
            content_type: content_type.to_string(),
            duration: Duration::from_millis(10),
            request_time: Utc::now(),
            size: body.len(),
        }
    }

    #[test]
    fn test_is_json_variants() {
        assert!(is_json("application/json"));
        assert!(is_json("application/json; charset=utf-8"));
        assert!(is_json("application/problem+JSON"));
        assert!(!is_json("text/html"));
        assert!(!is_json(""));
    }

    #[test]
    fn test_format_body_json() {
        let response = response("application/json", br#"{"a":1}"#);
        assert_eq!(format_body(&response), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_format_body_plain_text() {
        let response = response("text/plain", b"hello world");
        assert_eq!(format_body(&response), "hello world");
    }

    #[test]
    fn test_format_body_empty() {
        let response = response("application/json", b"");
        assert_eq!(format_body(&response), "");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1024 * 1024), "1.0 MB");
        assert_eq!(format_size(5 * 1024 * 1024 * 1024), "5.0 GB");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(250)), "250ms");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
    }
}
