//! Main export pipeline orchestration

use super::config::ExportConfig;
use super::organizer::OutputOrganizer;
use crate::catalog::{CatalogClient, HttpTransport};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Fetches one playlist from the catalog and writes it in the configured format
pub struct ExportPipeline<T: HttpTransport> {
    config: ExportConfig,
    organizer: OutputOrganizer,
    client: CatalogClient<T>,
}

impl<T: HttpTransport> ExportPipeline<T> {
    /// Create a new export pipeline
    pub fn new(config: ExportConfig, client: CatalogClient<T>) -> Self {
        let organizer = OutputOrganizer::new(config.output_dir.clone());

        Self {
            config,
            organizer,
            client,
        }
    }

    /// Run the complete export and return the path of the written file
    pub fn export(&mut self, playlist_id: &str) -> Result<PathBuf> {
        log::info!("Authenticating with the catalog service...");
        self.client.authenticate().context("Authentication step failed")?;
        log::info!("Authentication successful!");

        log::info!("Fetching playlist {}...", playlist_id);
        let playlist = self
            .client
            .get_playlist(playlist_id)
            .with_context(|| format!("Failed to fetch playlist {}", playlist_id))?;
        log::info!(
            "Successfully fetched playlist: {} ({} tracks)",
            playlist.name(),
            playlist.len()
        );

        let payload = playlist.to_payload();
        let format = self.config.format;
        log::debug!("Using {} exporter", format);

        self.organizer
            .init()
            .context("Failed to prepare output directory")?;
        let path = self
            .organizer
            .export_path(playlist.name(), format.extension());

        log::info!("Exporting playlist to {} format...", format.name().to_uppercase());
        format
            .exporter()
            .export(&payload, &path)
            .with_context(|| format!("Failed to export playlist to {:?}", path))?;

        log::info!("Playlist successfully exported to {:?}", path);
        Ok(path)
    }
}
