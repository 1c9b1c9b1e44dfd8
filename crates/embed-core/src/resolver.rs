//! Video embed resolver
//!
//! Entry point used by every page that shows a video. Resolution is a pure
//! function of the reference and the requested language: it never fails and
//! keeps no state between calls.

use crate::embed::ResolvedEmbed;
use crate::provider::{self, Provider};
use crate::reference::VideoReference;

/// Resolver turning video references into player decisions
pub struct VideoEmbedResolver;

impl VideoEmbedResolver {
    /// Resolve a reference for a preferred language
    ///
    /// Picks the URL for `preferred_lang` (falling back to English, then
    /// Persian) and matches it against the provider rules. Anything missing,
    /// empty or unrecognized resolves to [`ResolvedEmbed::NoEmbed`].
    pub fn resolve(reference: &VideoReference, preferred_lang: &str) -> ResolvedEmbed {
        match reference.select(preferred_lang) {
            Some(url) => Self::resolve_url(url),
            None => {
                tracing::trace!("No video URL for language {}", preferred_lang);
                ResolvedEmbed::NoEmbed
            }
        }
    }

    /// Resolve a reference that may be absent
    pub fn resolve_optional(
        reference: Option<&VideoReference>,
        preferred_lang: &str,
    ) -> ResolvedEmbed {
        reference
            .map(|reference| Self::resolve(reference, preferred_lang))
            .unwrap_or_default()
    }

    /// Resolve a single URL, skipping language selection
    ///
    /// The URL is matched as written; native and passthrough embeds carry it
    /// unchanged.
    pub fn resolve_url(url: &str) -> ResolvedEmbed {
        if url.is_empty() {
            return ResolvedEmbed::NoEmbed;
        }

        match provider::match_url(url) {
            Some((provider, embed)) => {
                tracing::debug!("Resolved {} video URL {}", provider.as_str(), url);
                embed
            }
            None => {
                tracing::trace!("Unrecognized video URL {}", url);
                ResolvedEmbed::NoEmbed
            }
        }
    }

    /// Detect which provider recognizes a URL
    pub fn detect(url: &str) -> Option<Provider> {
        provider::match_url(url).map(|(provider, _)| provider)
    }
}
