//! Export payload handed from the catalog side to the exporters
//!
//! Every field is optional: exporters apply their own defaults for missing
//! keys, which differ from the defaults of [`Track`](super::Track).

use serde::{Deserialize, Serialize};

/// Playlist data in the shape exporters consume
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Vec<TrackRecord>>,
}

/// One track entry of an [`ExportPayload`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,

    /// Duration in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
}

impl ExportPayload {
    /// True when no field is present at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.tracks.is_none()
    }

    /// Number of track entries, zero when `tracks` is missing
    pub fn track_count(&self) -> usize {
        self.tracks.as_ref().map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_payload_is_empty() {
        assert!(ExportPayload::default().is_empty());
        assert_eq!(ExportPayload::default().track_count(), 0);
    }

    #[test]
    fn test_payload_with_empty_tracks_is_not_empty() {
        let payload = ExportPayload {
            tracks: Some(Vec::new()),
            ..Default::default()
        };
        assert!(!payload.is_empty());
    }

    #[test]
    fn test_missing_fields_are_omitted() {
        let payload = ExportPayload {
            name: Some("Mix".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"name":"Mix"}"#);
    }
}
