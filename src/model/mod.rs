//! Playlist data model
//!
//! `Track` and `Playlist` are built from catalog responses and validated on
//! construction. `ExportPayload` is the flattened form exporters work with.

mod payload;
mod playlist;
mod track;

pub use payload::{ExportPayload, TrackRecord};
pub use playlist::Playlist;
pub use track::{Track, UNKNOWN_ALBUM, UNKNOWN_ARTIST};
