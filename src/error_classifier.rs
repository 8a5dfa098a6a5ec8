use crate::directory::error::{DirectoryError, ImageLoadError};
use crate::logging::LogLevel;

/// Chooses how loudly a recovered failure is reported.
///
/// Nothing here changes control flow: every directory failure ends in the
/// sample-data fallback regardless of its level.
#[derive(Debug, Clone, Default)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_fetch_error(&self, error: &DirectoryError) -> LogLevel {
        match error {
            // Temporary server issues
            DirectoryError::Http { status, .. } if *status == 429 => LogLevel::Debug,
            DirectoryError::Http { status, .. } if (500..=599).contains(status) => {
                LogLevel::Warn
            }

            // Misconfigured endpoint: wrong path, auth required, gone
            DirectoryError::Http { .. } => LogLevel::Error,

            // The endpoint answered with something that is not a user list
            DirectoryError::Decode(_) => LogLevel::Error,
            DirectoryError::EmptyDirectory => LogLevel::Warn,

            // Network issues - usually temporary
            DirectoryError::Transport(_) => LogLevel::Warn,
        }
    }

    /// Broken avatars are cosmetic and always recovered by the placeholder.
    pub fn classify_image_error(&self, error: &ImageLoadError) -> LogLevel {
        match error {
            ImageLoadError::Transport(_) => LogLevel::Debug,
            ImageLoadError::Status(_) | ImageLoadError::NotAnImage(_) => LogLevel::Info,
        }
    }
}
