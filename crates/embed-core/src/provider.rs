//! Video provider patterns
//!
//! Each provider is a rule that either recognizes a URL and produces a
//! player decision, or passes. Rules are tried in a fixed order and the
//! first match wins. Whether a URL plays natively or in an iframe is decided
//! here and nowhere else.

use crate::embed::{PlaybackMode, ResolvedEmbed, VideoMime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static YOUTUBE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:youtube\.com/watch\?v=|youtube\.com/embed/|youtu\.be/)([A-Za-z0-9_-]{11})")
        .unwrap()
});

static VIMEO_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"vimeo\.com/(?:video/)?(\d+)").unwrap());

static APARAT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"aparat\.com/v/([A-Za-z0-9]+)").unwrap());

// Arvan Cloud VOD host with at least two path segments; scheme optional,
// protocol-relative allowed
static ARVAN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:https?:)?(?://)?[^/?#]+\.arvanvod\.ir/[^/?#]+/[^?#]+").unwrap()
});

// Extension must end the path, not the query or fragment
static FILE_EXT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[^?#]*\.(mp4|webm|ogg|m3u8)(?:[?#].*)?$").unwrap());

/// Provider that recognized a URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// YouTube watch, embed or short link
    YouTube,
    /// Vimeo video page
    Vimeo,
    /// Aparat video page
    Aparat,
    /// Direct file or Arvan Cloud stream
    DirectFile,
    /// URL that already points at an embeddable player
    Passthrough,
}

type Rule = fn(&str) -> Option<ResolvedEmbed>;

/// Rules in match order
const RULES: [(Provider, Rule); 5] = [
    (Provider::YouTube, youtube),
    (Provider::Vimeo, vimeo),
    (Provider::Aparat, aparat),
    (Provider::DirectFile, direct_file),
    (Provider::Passthrough, passthrough),
];

impl Provider {
    /// Get the provider as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::YouTube => "youtube",
            Provider::Vimeo => "vimeo",
            Provider::Aparat => "aparat",
            Provider::DirectFile => "directfile",
            Provider::Passthrough => "passthrough",
        }
    }

    /// Playback mode used for every URL this provider recognizes
    pub fn playback_mode(&self) -> PlaybackMode {
        match self {
            Provider::DirectFile => PlaybackMode::Native,
            _ => PlaybackMode::Iframe,
        }
    }
}

/// Run the rules against a URL and return the first match
pub fn match_url(url: &str) -> Option<(Provider, ResolvedEmbed)> {
    RULES.iter().find_map(|(provider, rule)| rule(url).map(|embed| (*provider, embed)))
}

fn youtube(url: &str) -> Option<ResolvedEmbed> {
    let id = YOUTUBE_RE.captures(url)?.get(1)?;
    Some(ResolvedEmbed::iframe(format!("https://www.youtube.com/embed/{}", id.as_str())))
}

fn vimeo(url: &str) -> Option<ResolvedEmbed> {
    let id = VIMEO_RE.captures(url)?.get(1)?;
    Some(ResolvedEmbed::iframe(format!("https://player.vimeo.com/video/{}", id.as_str())))
}

fn aparat(url: &str) -> Option<ResolvedEmbed> {
    let hash = APARAT_RE.captures(url)?.get(1)?;
    Some(ResolvedEmbed::iframe(format!(
        "https://www.aparat.com/video/video/embed/videohash/{}/vt/frame",
        hash.as_str()
    )))
}

fn direct_file(url: &str) -> Option<ResolvedEmbed> {
    let extension = FILE_EXT_RE.captures(url).and_then(|caps| caps.get(1));
    if extension.is_none() && !ARVAN_RE.is_match(url) {
        return None;
    }

    let mime_type = match extension {
        Some(ext) if ext.as_str().eq_ignore_ascii_case("m3u8") => VideoMime::Hls,
        _ => VideoMime::Mp4,
    };
    Some(ResolvedEmbed::native(url, mime_type))
}

fn passthrough(url: &str) -> Option<ResolvedEmbed> {
    url.contains("embed").then(|| ResolvedEmbed::iframe(url))
}
