//! Video embed resolution for the bilingual site
//!
//! This crate turns the video references found in site content into a
//! player decision: a native `<video>` element, a third-party `<iframe>`
//! player, or nothing at all.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod embed;
pub mod provider;
pub mod reference;
pub mod resolver;

pub use embed::{PlaybackMode, ResolvedEmbed, VideoMime};
pub use provider::Provider;
pub use reference::VideoReference;
pub use resolver::VideoEmbedResolver;
