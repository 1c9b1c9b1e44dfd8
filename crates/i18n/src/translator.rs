//! Localized strings for the video player section
//!
//! Strings are bundled as Fluent resources, one per site language.

use crate::lang::Language;
use fluent::{FluentBundle, FluentResource};
use thiserror::Error;

const EN_RESOURCE: &str = r#"
video-section-title = Watch our introduction
video-unsupported-browser = Your browser does not support embedded video.
"#;

const FA_RESOURCE: &str = r#"
video-section-title = ویدیوی معرفی ما را ببینید
video-unsupported-browser = مرورگر شما از پخش ویدیو پشتیبانی نمی‌کند.
"#;

/// Errors raised while building a translator
#[derive(Debug, Error)]
pub enum TranslatorError {
    /// A bundled resource failed to parse
    #[error("Failed to parse {language} resource: {count} error(s)")]
    Parse {
        /// Language of the resource
        language: Language,
        /// Number of parser errors
        count: usize,
    },

    /// A resource could not be added to the bundle
    #[error("Failed to load {language} resource: {count} error(s)")]
    Bundle {
        /// Language of the resource
        language: Language,
        /// Number of bundle errors
        count: usize,
    },
}

/// Result type for translator operations
pub type Result<T> = std::result::Result<T, TranslatorError>;

/// Message lookup for a single language
pub struct Translator {
    language: Language,
    bundle: FluentBundle<FluentResource>,
}

impl Translator {
    /// Create a translator for a language
    pub fn new(language: Language) -> Result<Self> {
        let source = match language {
            Language::English => EN_RESOURCE,
            Language::Persian => FA_RESOURCE,
        };

        let resource = FluentResource::try_new(source.to_string())
            .map_err(|(_, errors)| TranslatorError::Parse { language, count: errors.len() })?;

        let mut bundle = FluentBundle::new(vec![language.langid()]);
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|errors| TranslatorError::Bundle { language, count: errors.len() })?;

        Ok(Self { language, bundle })
    }

    /// Language this translator formats for
    pub fn language(&self) -> Language {
        self.language
    }

    /// Check whether a message id exists
    pub fn has_message(&self, id: &str) -> bool {
        self.bundle.has_message(id)
    }

    /// Format a message, returning the id itself when it is unknown
    pub fn translate(&self, id: &str) -> String {
        let pattern = match self.bundle.get_message(id).and_then(|msg| msg.value()) {
            Some(pattern) => pattern,
            None => {
                tracing::warn!("Missing {} translation for {}", self.language, id);
                return id.to_string();
            }
        };

        let mut errors = Vec::new();
        let value = self.bundle.format_pattern(pattern, None, &mut errors);
        if !errors.is_empty() {
            tracing::warn!("Formatting {} failed with {} error(s)", id, errors.len());
        }
        value.into_owned()
    }
}
