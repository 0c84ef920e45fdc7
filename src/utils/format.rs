//! Format - Console Formatting Utilities

use chrono::{DateTime, Local};

/// Format time with milliseconds
pub fn format_time_ms(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M:%S%.3f").to_string()
}

/// Truncate to at most `max_chars` characters, ending in "..." when cut
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    if max_chars <= 3 {
        return s.chars().take(max_chars).collect();
    }
    let mut out: String = s.chars().take(max_chars - 3).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn time_has_millis() {
        let dt = Local
            .with_ymd_and_hms(2024, 5, 1, 9, 3, 7)
            .single()
            .expect("unambiguous local time");
        assert_eq!(format_time_ms(&dt), "09:03:07.000");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("San Francisco", 20), "San Francisco");
        assert_eq!(truncate("San Francisco", 8), "San F...");
        assert_eq!(truncate("🍑💨🍑💨", 3), "🍑💨🍑");
    }
}
