use super::payload::TrackRecord;
use crate::error::{Error, Result};

pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const UNKNOWN_ALBUM: &str = "Unknown Album";

/// A single track of a playlist, as fetched from the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    title: String,
    artist: String,
    album: String,
    duration_ms: u64,
}

impl Track {
    /// Build a track, substituting defaults for a missing artist or album.
    ///
    /// Fails with [`Error::Validation`] when `title` is empty.
    pub fn new(
        title: impl Into<String>,
        artist: Option<String>,
        album: Option<String>,
        duration_ms: u64,
    ) -> Result<Self> {
        let title = title.into();
        if title.is_empty() {
            return Err(Error::Validation("Track title cannot be empty".to_string()));
        }

        Ok(Self {
            title,
            artist: non_empty_or(artist, UNKNOWN_ARTIST),
            album: non_empty_or(album, UNKNOWN_ALBUM),
            duration_ms,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn album(&self) -> &str {
        &self.album
    }

    /// Track duration in milliseconds
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Project this track onto the export payload
    pub fn to_record(&self) -> TrackRecord {
        TrackRecord {
            title: Some(self.title.clone()),
            artist: Some(self.artist.clone()),
            album: Some(self.album.clone()),
            duration: Some(self.duration_ms),
        }
    }
}

fn non_empty_or(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default.to_string(),
    }
}
