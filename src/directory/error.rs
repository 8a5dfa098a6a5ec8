//! Error handling for the directory module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Reqwest error, typically related to network issues or request timeouts.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The directory answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The body was not a JSON array of user records.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The directory returned no record a profile can be built from.
    #[error("Directory returned no usable user records")]
    EmptyDirectory,
}

impl DirectoryError {
    pub async fn from_response(response: reqwest::Response) -> DirectoryError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        DirectoryError::Http { status, message }
    }

    /// Whether the response body was the problem, as opposed to reaching the directory.
    pub fn is_malformed_response(&self) -> bool {
        matches!(
            self,
            DirectoryError::Decode(_) | DirectoryError::EmptyDirectory
        )
    }
}

/// Display-time failure of an image element. Never surfaced beyond the view.
#[derive(Debug, Error)]
pub enum ImageLoadError {
    #[error("Image request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Image request returned status {0}")]
    Status(u16),

    #[error("Resource is not an image (content type {0})")]
    NotAnImage(String),
}
