//! Player decisions produced by the resolver

use serde::{Deserialize, Serialize};

/// How a video is played back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackMode {
    /// HTML5 `<video>` element with a `<source>` child
    Native,
    /// Third-party player in an `<iframe>`
    Iframe,
}

/// MIME type handed to a native video element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VideoMime {
    /// Progressive file (mp4, webm, ogg) or an extensionless CDN file
    #[serde(rename = "video/mp4")]
    Mp4,
    /// HLS manifest
    #[serde(rename = "application/x-mpegURL")]
    Hls,
}

impl VideoMime {
    /// Get the MIME type as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoMime::Mp4 => "video/mp4",
            VideoMime::Hls => "application/x-mpegURL",
        }
    }
}

/// Result of resolving a video reference
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ResolvedEmbed {
    /// Nothing playable; the caller must not render a player region
    #[default]
    NoEmbed,
    /// Directly playable file or stream
    NativeVideo {
        /// Source URL, unchanged from the reference
        url: String,
        /// MIME type for the `<source>` element
        #[serde(rename = "mimeType")]
        mime_type: VideoMime,
    },
    /// Embeddable third-party player
    IframeEmbed {
        /// Player URL
        url: String,
    },
}

impl ResolvedEmbed {
    /// Create a native video embed
    pub fn native(url: impl Into<String>, mime_type: VideoMime) -> Self {
        ResolvedEmbed::NativeVideo { url: url.into(), mime_type }
    }

    /// Create an iframe embed
    pub fn iframe(url: impl Into<String>) -> Self {
        ResolvedEmbed::IframeEmbed { url: url.into() }
    }

    /// Check if there is nothing to render
    pub fn is_none(&self) -> bool {
        matches!(self, ResolvedEmbed::NoEmbed)
    }

    /// Check if this is a native video
    pub fn is_native(&self) -> bool {
        matches!(self, ResolvedEmbed::NativeVideo { .. })
    }

    /// Check if this is an iframe embed
    pub fn is_iframe(&self) -> bool {
        matches!(self, ResolvedEmbed::IframeEmbed { .. })
    }

    /// URL to hand to the player, if any
    pub fn url(&self) -> Option<&str> {
        match self {
            ResolvedEmbed::NoEmbed => None,
            ResolvedEmbed::NativeVideo { url, .. } | ResolvedEmbed::IframeEmbed { url } => {
                Some(url.as_str())
            }
        }
    }

    /// MIME type for native playback
    pub fn mime_type(&self) -> Option<VideoMime> {
        match self {
            ResolvedEmbed::NativeVideo { mime_type, .. } => Some(*mime_type),
            _ => None,
        }
    }

    /// Playback mode, or `None` when nothing should be rendered
    pub fn playback_mode(&self) -> Option<PlaybackMode> {
        match self {
            ResolvedEmbed::NoEmbed => None,
            ResolvedEmbed::NativeVideo { .. } => Some(PlaybackMode::Native),
            ResolvedEmbed::IframeEmbed { .. } => Some(PlaybackMode::Iframe),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_as_str() {
        assert_eq!(VideoMime::Mp4.as_str(), "video/mp4");
        assert_eq!(VideoMime::Hls.as_str(), "application/x-mpegURL");
    }

    #[test]
    fn test_no_embed_accessors() {
        let embed = ResolvedEmbed::default();
        assert!(embed.is_none());
        assert!(!embed.is_native());
        assert!(!embed.is_iframe());
        assert_eq!(embed.url(), None);
        assert_eq!(embed.mime_type(), None);
        assert_eq!(embed.playback_mode(), None);
    }

    #[test]
    fn test_native_accessors() {
        let embed = ResolvedEmbed::native("https://example.com/a.mp4", VideoMime::Mp4);
        assert!(embed.is_native());
        assert_eq!(embed.url(), Some("https://example.com/a.mp4"));
        assert_eq!(embed.mime_type(), Some(VideoMime::Mp4));
        assert_eq!(embed.playback_mode(), Some(PlaybackMode::Native));
    }

    #[test]
    fn test_iframe_accessors() {
        let embed = ResolvedEmbed::iframe("https://player.vimeo.com/video/1");
        assert!(embed.is_iframe());
        assert_eq!(embed.url(), Some("https://player.vimeo.com/video/1"));
        assert_eq!(embed.mime_type(), None);
        assert_eq!(embed.playback_mode(), Some(PlaybackMode::Iframe));
    }

    #[test]
    fn test_serialization_shape() {
        let embed = ResolvedEmbed::native("https://cdn.example.com/master.m3u8", VideoMime::Hls);
        let json = serde_json::to_value(&embed).unwrap();
        assert_eq!(json["type"], "nativeVideo");
        assert_eq!(json["url"], "https://cdn.example.com/master.m3u8");
        assert_eq!(json["mimeType"], "application/x-mpegURL");

        let json = serde_json::to_value(ResolvedEmbed::NoEmbed).unwrap();
        assert_eq!(json["type"], "noEmbed");

        let back: ResolvedEmbed =
            serde_json::from_str(r#"{"type":"iframeEmbed","url":"https://x.test/embed/1"}"#)
                .unwrap();
        assert_eq!(back, ResolvedEmbed::iframe("https://x.test/embed/1"));
    }
}
