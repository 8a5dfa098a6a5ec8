//! Dashboard utility functions
//!
//! Helpers shared by the rendering components

use crate::events::Source;
use ratatui::prelude::Color;

/// Get a ratatui color for an event source
pub fn get_source_color(source: &Source) -> Color {
    match source {
        Source::Loader => Color::Cyan,
        Source::ImageProbe => Color::Yellow,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some((date_part, time_part)) = timestamp.split_once(' ') {
        if let (Some(month_day), Some(hour_min_sec)) = (date_part.get(5..10), time_part.get(0..8))
        {
            return format!("{} {}", month_day, hour_min_sec);
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    // Replace verbose reqwest error dumps with short messages
    if msg.contains("Transport error") && msg.contains("timed out") {
        return "Directory request timed out".to_string();
    }
    if msg.contains("Transport error") {
        return "Directory unreachable".to_string();
    }
    msg.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(
            format_compact_timestamp("2026-10-16 09:41:07"),
            "10-16 09:41:07"
        );
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_clean_http_error_message() {
        assert_eq!(
            clean_http_error_message("Directory API error: Transport error: error sending request"),
            "Directory unreachable"
        );
        assert_eq!(
            clean_http_error_message("Directory API error: HTTP error with status 500: boom"),
            "Directory API error: HTTP error with status 500: boom"
        );
    }
}
