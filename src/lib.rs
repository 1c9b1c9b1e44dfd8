//! Video embeds for the bilingual site
//!
//! Facade over the workspace crates: resolution lives in [`embed_core`],
//! languages in [`i18n`], and content loading in [`content`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use content;
pub use embed_core;
pub use i18n;

pub use content::{ContentConfig, FileContentSource, VideoCatalog, VideoSection};
pub use embed_core::{ResolvedEmbed, VideoEmbedResolver, VideoMime, VideoReference};
pub use i18n::Language;
