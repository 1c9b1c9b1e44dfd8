//! Site content loading
//!
//! This crate reads the JSON content files served to the site's pages and
//! resolves the videos they reference for a given language.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod config;
pub mod payload;
pub mod source;

pub use catalog::{VideoCatalog, VideoSection};
pub use config::ContentConfig;
pub use payload::{ServiceVideosPayload, VideoPayload};
pub use source::{ContentError, ContentSource, FileContentSource, Result};
