//! JSON payloads served to the site's pages

use embed_core::VideoReference;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Site video payload, `{ "success": true, "videoUrl": ... }`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoPayload {
    /// Whether a video is published
    #[serde(default)]
    pub success: bool,
    /// Video reference, plain or per language; unreadable values are `None`
    #[serde(
        default,
        deserialize_with = "deserialize_reference",
        skip_serializing_if = "Option::is_none"
    )]
    pub video_url: Option<VideoReference>,
}

impl VideoPayload {
    /// Create a successful payload
    pub fn new(reference: impl Into<VideoReference>) -> Self {
        Self { success: true, video_url: Some(reference.into()) }
    }

    /// Reference to play, if the payload is successful
    pub fn reference(&self) -> Option<&VideoReference> {
        if self.success {
            self.video_url.as_ref()
        } else {
            None
        }
    }
}

/// Per-service video payload, `{ "success": true, "videos": { id: ... } }`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServiceVideosPayload {
    /// Whether service videos are published
    #[serde(default)]
    pub success: bool,
    /// Video reference per service id; `null` or an unreadable value means
    /// no video
    #[serde(default, deserialize_with = "deserialize_references")]
    pub videos: BTreeMap<String, Option<VideoReference>>,
}

impl ServiceVideosPayload {
    /// Reference for a service, if the payload is successful
    pub fn reference(&self, service_id: &str) -> Option<&VideoReference> {
        if !self.success {
            return None;
        }
        self.videos.get(service_id).and_then(Option::as_ref)
    }

    /// All service references, if the payload is successful
    pub fn references(&self) -> impl Iterator<Item = (&str, &VideoReference)> {
        self.videos
            .iter()
            .filter(|_| self.success)
            .filter_map(|(id, reference)| reference.as_ref().map(|r| (id.as_str(), r)))
    }
}

fn reference_from_value(value: Value) -> Option<VideoReference> {
    if value.is_null() {
        return None;
    }
    match serde_json::from_value(value) {
        Ok(reference) => Some(reference),
        Err(e) => {
            tracing::warn!("Ignoring unreadable video reference: {}", e);
            None
        }
    }
}

fn deserialize_reference<'de, D>(deserializer: D) -> Result<Option<VideoReference>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(reference_from_value(value))
}

fn deserialize_references<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, Option<VideoReference>>, D::Error>
where
    D: Deserializer<'de>,
{
    let values: BTreeMap<String, Value> = BTreeMap::deserialize(deserializer)?;
    Ok(values.into_iter().map(|(id, value)| (id, reference_from_value(value))).collect())
}
