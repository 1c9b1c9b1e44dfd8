//! Video references as they appear in site content
//!
//! A reference is either one URL for every language or a map from language
//! code to URL.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// A video URL, optionally localized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VideoReference {
    /// Single URL shared by all languages
    Url(String),
    /// URL per language code (e.g. "en", "fa"); null and non-string entries
    /// are dropped
    Localized(#[serde(deserialize_with = "deserialize_entries")] BTreeMap<String, String>),
}

impl VideoReference {
    /// Create a reference shared by all languages
    pub fn url(url: impl Into<String>) -> Self {
        VideoReference::Url(url.into())
    }

    /// Create a localized reference from `(language, url)` pairs
    pub fn localized<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        VideoReference::Localized(
            entries.into_iter().map(|(lang, url)| (lang.into(), url.into())).collect(),
        )
    }

    /// Pick the URL to play for a language
    ///
    /// Localized references try the requested language, then English, then
    /// Persian. Missing and empty entries are skipped; anything else is
    /// returned as written. Returns `None` when no entry has a URL.
    pub fn select(&self, preferred_lang: &str) -> Option<&str> {
        match self {
            VideoReference::Url(url) => non_empty(url),
            VideoReference::Localized(entries) => i18n::fallback_chain(preferred_lang)
                .into_iter()
                .find_map(|code| entries.get(code).and_then(|url| non_empty(url))),
        }
    }

    /// Check if no language has a URL
    pub fn is_empty(&self) -> bool {
        match self {
            VideoReference::Url(url) => non_empty(url).is_none(),
            VideoReference::Localized(entries) => {
                entries.values().all(|url| non_empty(url).is_none())
            }
        }
    }
}

impl From<&str> for VideoReference {
    fn from(url: &str) -> Self {
        VideoReference::Url(url.to_string())
    }
}

impl From<String> for VideoReference {
    fn from(url: String) -> Self {
        VideoReference::Url(url)
    }
}

fn non_empty(url: &str) -> Option<&str> {
    (!url.is_empty()).then_some(url)
}

/// Map value that is either a URL or something to ignore
#[derive(Deserialize)]
#[serde(untagged)]
enum Entry {
    Url(String),
    Other(#[allow(dead_code)] IgnoredAny),
}

fn deserialize_entries<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries: BTreeMap<String, Entry> = BTreeMap::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .filter_map(|(lang, entry)| match entry {
            Entry::Url(url) => Some((lang, url)),
            Entry::Other(_) => None,
        })
        .collect())
}
