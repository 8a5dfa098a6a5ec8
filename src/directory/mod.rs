use crate::directory::error::{DirectoryError, ImageLoadError};
use crate::profile::DirectoryUser;

pub(crate) mod client;
pub use client::DirectoryClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// Source of candidate user records.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Directory: Send + Sync {
    /// Fetch every user record the directory exposes.
    async fn fetch_users(&self) -> Result<Vec<DirectoryUser>, DirectoryError>;
}

/// Checks whether an image URL resolves to an image.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ImageHost: Send + Sync {
    async fn check_image(&self, url: &str) -> Result<(), ImageLoadError>;
}
