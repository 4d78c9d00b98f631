//! JSON response shapes of the catalog Web API

use crate::model::Track;
use serde::Deserialize;
use serde_json::Value;

pub const UNKNOWN_TRACK: &str = "Unknown Track";
pub const UNTITLED_PLAYLIST: &str = "Untitled";

/// Body of a successful token exchange
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Playlist metadata (`GET /playlists/{id}`), tracks are fetched separately
#[derive(Debug, Deserialize)]
pub struct PlaylistResponse {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// One page of `GET /playlists/{id}/tracks`
///
/// Items stay untyped so a single malformed entry cannot fail the page.
#[derive(Debug, Deserialize)]
pub struct TracksPage {
    #[serde(default)]
    pub items: Option<Vec<Value>>,

    /// Absolute URL of the next page, `None` on the last one
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireTrack {
    name: Option<String>,
    #[serde(default)]
    artists: Option<Vec<WireNamed>>,
    album: Option<WireNamed>,
    duration_ms: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct WireNamed {
    name: Option<String>,
}

/// What became of one entry of a tracks page
#[derive(Debug)]
pub enum ItemOutcome {
    Track(Track),
    /// The entry carried no track payload (e.g. a removed or local track)
    Missing,
    /// The payload could not be turned into a track
    Invalid(String),
}

/// Map one wire item (`{"track": {...}}`) to a track
pub fn map_item(item: Value) -> ItemOutcome {
    let track = match item {
        Value::Object(mut fields) => fields.remove("track"),
        _ => None,
    };

    let track = match track {
        None | Some(Value::Null) => return ItemOutcome::Missing,
        Some(Value::Object(ref fields)) if fields.is_empty() => return ItemOutcome::Missing,
        Some(value) => value,
    };

    let wire: WireTrack = match serde_json::from_value(track) {
        Ok(wire) => wire,
        Err(e) => return ItemOutcome::Invalid(e.to_string()),
    };

    let artist = wire
        .artists
        .and_then(|artists| artists.into_iter().next())
        .and_then(|artist| artist.name);
    let album = wire.album.and_then(|album| album.name);

    match Track::new(
        wire.name.unwrap_or_else(|| UNKNOWN_TRACK.to_string()),
        artist,
        album,
        wire.duration_ms.unwrap_or(0),
    ) {
        Ok(track) => ItemOutcome::Track(track),
        Err(e) => ItemOutcome::Invalid(e.to_string()),
    }
}
