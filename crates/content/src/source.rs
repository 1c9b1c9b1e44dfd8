//! Content sources
//!
//! A source yields the raw payloads; [`FileContentSource`] reads them from
//! JSON files on disk.

use crate::config::ContentConfig;
use crate::payload::{ServiceVideosPayload, VideoPayload};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

/// Content error types
#[derive(Debug, Error)]
pub enum ContentError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Content file is not valid JSON for its payload
    #[error("Invalid content in {}: {source}", .path.display())]
    InvalidJson {
        /// File that failed to parse
        path: PathBuf,
        /// Parser error
        #[source]
        source: serde_json::Error,
    },

    /// Localized strings could not be loaded
    #[error("Translation error: {0}")]
    Translation(#[from] i18n::TranslatorError),
}

/// Result type for content operations
pub type Result<T> = std::result::Result<T, ContentError>;

/// Provider of site content payloads
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Load the site video payload
    async fn video(&self) -> Result<VideoPayload>;

    /// Load the per-service video payload
    async fn service_videos(&self) -> Result<ServiceVideosPayload>;
}

/// Content source backed by JSON files
#[derive(Debug, Clone)]
pub struct FileContentSource {
    config: ContentConfig,
}

impl FileContentSource {
    /// Create a source for a configuration
    pub fn new(config: ContentConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    /// Read a payload, treating a missing file as "nothing published"
    async fn read_payload<T>(path: &Path) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let contents = match fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("Content file {} not found", path.display());
                return Ok(T::default());
            }
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&contents)
            .map_err(|source| ContentError::InvalidJson { path: path.to_path_buf(), source })
    }
}

#[async_trait]
impl ContentSource for FileContentSource {
    async fn video(&self) -> Result<VideoPayload> {
        Self::read_payload(&self.config.video_path()).await
    }

    async fn service_videos(&self) -> Result<ServiceVideosPayload> {
        Self::read_payload(&self.config.services_path()).await
    }
}
