//! Video catalog
//!
//! Resolves the videos published in site content for a page language. The
//! catalog keeps no state: content is re-read and re-resolved on every call,
//! so a language switch or content edit is picked up immediately.

use crate::source::{ContentSource, Result};
use embed_core::{ResolvedEmbed, VideoEmbedResolver};
use i18n::{Language, TextDirection, Translator};
use serde::Serialize;
use std::collections::BTreeMap;

/// Everything a page needs to render its video region
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSection {
    /// Page language
    pub language: Language,
    /// Text direction of the surrounding chrome
    pub direction: TextDirection,
    /// Section heading
    pub title: String,
    /// Text shown by browsers that cannot play the video
    pub unsupported_text: String,
    /// Player decision; never `NoEmbed`
    pub embed: ResolvedEmbed,
}

/// Resolves published videos through a content source
pub struct VideoCatalog<S> {
    source: S,
}

impl<S: ContentSource> VideoCatalog<S> {
    /// Create a catalog over a content source
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Resolve the site video for a language
    pub async fn page_video(&self, language: Language) -> Result<ResolvedEmbed> {
        let payload = self.source.video().await?;
        Ok(VideoEmbedResolver::resolve_optional(payload.reference(), language.code()))
    }

    /// Resolve the video of one service; unknown services have none
    pub async fn service_video(
        &self,
        service_id: &str,
        language: Language,
    ) -> Result<ResolvedEmbed> {
        let payload = self.source.service_videos().await?;
        Ok(VideoEmbedResolver::resolve_optional(payload.reference(service_id), language.code()))
    }

    /// Resolve every service video, leaving out services with nothing to play
    pub async fn service_videos(
        &self,
        language: Language,
    ) -> Result<BTreeMap<String, ResolvedEmbed>> {
        let payload = self.source.service_videos().await?;
        let videos = payload
            .references()
            .filter_map(|(id, reference)| {
                let embed = VideoEmbedResolver::resolve(reference, language.code());
                if embed.is_none() {
                    tracing::debug!("Service {} has no playable video for {}", id, language);
                    None
                } else {
                    Some((id.to_string(), embed))
                }
            })
            .collect();
        Ok(videos)
    }

    /// Build the localized video section, or `None` when the page must not
    /// show a player
    pub async fn video_section(&self, language: Language) -> Result<Option<VideoSection>> {
        let embed = self.page_video(language).await?;
        if embed.is_none() {
            return Ok(None);
        }

        let translator = Translator::new(language)?;
        Ok(Some(VideoSection {
            language,
            direction: language.direction(),
            title: translator.translate("video-section-title"),
            unsupported_text: translator.translate("video-unsupported-browser"),
            embed,
        }))
    }
}
