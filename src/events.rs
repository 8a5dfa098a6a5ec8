//! Event System
//!
//! Activity events published by the loader and the image probe

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Source {
    /// Fetches and reshapes directory records.
    Loader,
    /// Checks that avatar images resolve.
    ImageProbe,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn loader_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Loader, msg, event_type, log_level)
    }

    pub fn image_probe_with_level(
        msg: String,
        event_type: EventType,
        log_level: LogLevel,
    ) -> Self {
        Self::new(Source::ImageProbe, msg, event_type, log_level)
    }

    /// Forward the event to the `log` facade at its own level.
    pub fn log(&self) {
        log::log!(
            target: "employee_profile::events",
            self.log_level.into(),
            "[{}] {}",
            self.source,
            self.msg
        );
    }

    pub fn should_display(&self) -> bool {
        // Always show outcomes; everything else follows RUST_LOG
        if matches!(self.event_type, EventType::Success | EventType::Fallback)
            || self.log_level >= LogLevel::Info
        {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_events_always_display() {
        let event = Event::loader_with_level(
            "Loaded sample profile".to_string(),
            EventType::Fallback,
            LogLevel::Trace,
        );
        assert!(event.should_display());
    }

    #[test]
    fn test_event_display_format() {
        let event = Event::image_probe_with_level(
            "Avatar unavailable".to_string(),
            EventType::Error,
            LogLevel::Warn,
        );
        let rendered = event.to_string();
        assert!(rendered.starts_with("Error ["));
        assert!(rendered.ends_with("] Avatar unavailable"));
        assert_eq!(event.source, Source::ImageProbe);
    }
}
