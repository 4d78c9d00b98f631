//! Playlist Exporter - catalog playlists to flat files
//!
//! This library fetches a playlist and its paginated track list from the
//! Spotify Web API and writes it as JSON, CSV or XML.

pub mod catalog;
pub mod error;
pub mod export;
pub mod model;

pub use catalog::{CatalogClient, ClientConfig, Credentials};
pub use error::{Error, Result};
pub use export::{ExportConfig, ExportFormat, ExportPipeline, Exporter};
pub use model::{ExportPayload, Playlist, Track, TrackRecord};
