use super::payload::ExportPayload;
use super::Track;
use crate::error::{Error, Result};

/// A playlist with its tracks in catalog order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    name: String,
    description: String,
    tracks: Vec<Track>,
}

impl Playlist {
    /// Build a playlist. Fails with [`Error::Validation`] when `name` is empty.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        tracks: Vec<Track>,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::Validation("Playlist name cannot be empty".to_string()));
        }

        Ok(Self {
            name,
            description: description.unwrap_or_default(),
            tracks,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Number of tracks in this playlist
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Flatten into the structure handed to exporters
    pub fn to_payload(&self) -> ExportPayload {
        ExportPayload {
            name: Some(self.name.clone()),
            description: Some(self.description.clone()),
            tracks: Some(self.tracks.iter().map(Track::to_record).collect()),
        }
    }
}
