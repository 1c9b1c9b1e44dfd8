//! Content location configuration

use std::path::PathBuf;

/// Where content files live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentConfig {
    /// Directory holding the content files
    pub root: PathBuf,
    /// File name of the site video payload
    pub video_file: String,
    /// File name of the per-service video payload
    pub services_file: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("content"),
            video_file: "video.json".to_string(),
            services_file: "service-videos.json".to_string(),
        }
    }
}

impl ContentConfig {
    /// Create a configuration rooted at a directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), ..Default::default() }
    }

    /// Set the site video file name
    pub fn video_file(mut self, name: impl Into<String>) -> Self {
        self.video_file = name.into();
        self
    }

    /// Set the service videos file name
    pub fn services_file(mut self, name: impl Into<String>) -> Self {
        self.services_file = name.into();
        self
    }

    /// Full path of the site video file
    pub fn video_path(&self) -> PathBuf {
        self.root.join(&self.video_file)
    }

    /// Full path of the service videos file
    pub fn services_path(&self) -> PathBuf {
        self.root.join(&self.services_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = ContentConfig::default();
        assert_eq!(config.video_path(), PathBuf::from("content/video.json"));
        assert_eq!(config.services_path(), PathBuf::from("content/service-videos.json"));
    }

    #[test]
    fn test_builder() {
        let config = ContentConfig::new("/srv/site/data")
            .video_file("intro.json")
            .services_file("services.json");
        assert_eq!(config.video_path(), PathBuf::from("/srv/site/data/intro.json"));
        assert_eq!(config.services_path(), PathBuf::from("/srv/site/data/services.json"));
    }
}
