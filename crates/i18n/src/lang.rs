//! Site languages and language selection
//!
//! The site is published in English and Persian. Content entries that are
//! missing in the requested language fall back to English, then Persian.

use fluent_langneg::{convert_vec_str_to_langids_lossy, negotiate_languages, NegotiationStrategy};
use serde::{Deserialize, Serialize};
use unic_langid::{langid, LanguageIdentifier};

/// Fixed fallback order applied after the requested language
pub const FALLBACK_LANGUAGES: [&str; 2] = ["en", "fa"];

/// Writing direction of a language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    /// Left to right
    Ltr,
    /// Right to left
    Rtl,
}

impl TextDirection {
    /// Value for the HTML `dir` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

/// A language the site is published in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// English
    #[default]
    #[serde(rename = "en")]
    English,
    /// Persian (Farsi)
    #[serde(rename = "fa")]
    Persian,
}

impl Language {
    /// All supported languages, English first
    pub const ALL: [Language; 2] = [Language::English, Language::Persian];

    /// Language code used as a key in content files
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Persian => "fa",
        }
    }

    /// Name of the language written in that language
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Persian => "فارسی",
        }
    }

    /// Writing direction
    pub fn direction(&self) -> TextDirection {
        match self {
            Language::English => TextDirection::Ltr,
            Language::Persian => TextDirection::Rtl,
        }
    }

    /// Parse a language code or BCP-47 tag such as `fa-IR`
    ///
    /// Only the primary language subtag is considered. Returns `None` for
    /// unparseable tags and for languages the site is not published in.
    pub fn from_code(code: &str) -> Option<Self> {
        let id: LanguageIdentifier = code.trim().parse().ok()?;
        Self::from_langid(&id)
    }

    pub(crate) fn langid(&self) -> LanguageIdentifier {
        match self {
            Language::English => langid!("en"),
            Language::Persian => langid!("fa"),
        }
    }

    fn from_langid(id: &LanguageIdentifier) -> Option<Self> {
        match id.language.as_str() {
            "en" => Some(Language::English),
            "fa" => Some(Language::Persian),
            _ => None,
        }
    }
}

impl AsRef<str> for Language {
    fn as_ref(&self) -> &str {
        self.code()
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Pick the best site language for an ordered list of requested tags
///
/// Tags that fail to parse are skipped. Falls back to English when nothing
/// matches.
pub fn negotiate<S: AsRef<str>>(requested: &[S]) -> Language {
    let requested = convert_vec_str_to_langids_lossy(requested.iter().map(|s| s.as_ref()));
    let available: Vec<LanguageIdentifier> = Language::ALL.iter().map(Language::langid).collect();
    let default = Language::default().langid();

    negotiate_languages(&requested, &available, Some(&default), NegotiationStrategy::Lookup)
        .first()
        .and_then(|id| Language::from_langid(id))
        .unwrap_or_default()
}

/// Language keys to try, in order, when reading a per-language content entry
///
/// The requested language comes first, followed by [`FALLBACK_LANGUAGES`].
/// Duplicates are removed, so requesting `"en"` yields `["en", "fa"]`.
pub fn fallback_chain(preferred: &str) -> Vec<&str> {
    let mut chain = Vec::with_capacity(FALLBACK_LANGUAGES.len() + 1);
    chain.push(preferred);
    for code in FALLBACK_LANGUAGES {
        if !chain.contains(&code) {
            chain.push(code);
        }
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Persian.code(), "fa");
        assert_eq!(Language::Persian.to_string(), "fa");
    }

    #[test]
    fn test_default_language_is_english() {
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn test_direction() {
        assert_eq!(Language::English.direction(), TextDirection::Ltr);
        assert_eq!(Language::Persian.direction(), TextDirection::Rtl);
        assert_eq!(Language::Persian.direction().as_str(), "rtl");
    }

    #[test]
    fn test_native_name() {
        assert_eq!(Language::English.native_name(), "English");
        assert_eq!(Language::Persian.native_name(), "فارسی");
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Language::from_code("en"), Some(Language::English));
        assert_eq!(Language::from_code("fa"), Some(Language::Persian));
        assert_eq!(Language::from_code("fa-IR"), Some(Language::Persian));
        assert_eq!(Language::from_code("en-US"), Some(Language::English));
        assert_eq!(Language::from_code(" fa "), Some(Language::Persian));
    }

    #[test]
    fn test_from_code_unsupported() {
        assert_eq!(Language::from_code("de"), None);
        assert_eq!(Language::from_code(""), None);
        assert_eq!(Language::from_code("not a tag!"), None);
    }

    #[test]
    fn test_negotiate_prefers_first_supported() {
        assert_eq!(negotiate(&["fa-IR", "en-US"]), Language::Persian);
        assert_eq!(negotiate(&["de-DE", "en"]), Language::English);
        assert_eq!(negotiate(&["de", "fa"]), Language::Persian);
    }

    #[test]
    fn test_negotiate_falls_back_to_english() {
        assert_eq!(negotiate(&["de", "fr"]), Language::English);
        let empty: [&str; 0] = [];
        assert_eq!(negotiate(&empty), Language::English);
    }

    #[test]
    fn test_fallback_chain_other_language() {
        assert_eq!(fallback_chain("de"), vec!["de", "en", "fa"]);
    }

    #[test]
    fn test_fallback_chain_collapses_english() {
        assert_eq!(fallback_chain("en"), vec!["en", "fa"]);
    }

    #[test]
    fn test_fallback_chain_collapses_persian() {
        assert_eq!(fallback_chain("fa"), vec!["fa", "en"]);
    }

    #[test]
    fn test_language_serialization() {
        let json = serde_json::to_string(&Language::Persian).unwrap();
        assert_eq!(json, "\"fa\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::English);
    }
}
