//! Internationalization for the bilingual site
//!
//! This crate provides the supported site languages, language negotiation,
//! the content fallback chain, and localized strings for the video player
//! section.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod lang;
pub mod translator;

pub use lang::{fallback_chain, negotiate, Language, TextDirection, FALLBACK_LANGUAGES};
pub use translator::{Translator, TranslatorError};
