//! Catalog Web API client

use super::config::{ClientConfig, Credentials};
use super::transport::{HttpResponse, HttpTransport, ReqwestTransport};
use super::wire::{self, ItemOutcome, PlaylistResponse, TokenResponse, TracksPage};
use crate::error::{Error, Result};
use crate::model::{Playlist, Track};
use serde::de::DeserializeOwned;

/// Client for the playlist endpoints of the catalog Web API.
///
/// Authenticates with the client-credential grant. Data calls authenticate
/// lazily when no token is held yet.
pub struct CatalogClient<T: HttpTransport = ReqwestTransport> {
    credentials: Credentials,
    config: ClientConfig,
    transport: T,
    access_token: Option<String>,
}

impl CatalogClient<ReqwestTransport> {
    /// Create a client that talks HTTP through reqwest
    pub fn new(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config.timeout)
            .map_err(|e| Error::Configuration(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::with_transport(credentials, config, transport))
    }
}

impl<T: HttpTransport> CatalogClient<T> {
    /// Create a client over any transport
    pub fn with_transport(credentials: Credentials, config: ClientConfig, transport: T) -> Self {
        log::debug!("Catalog client initialized for {}", config.api_base);
        Self {
            credentials,
            config,
            transport,
            access_token: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Drop the stored token so the next data call authenticates again
    pub fn clear_token(&mut self) {
        self.access_token = None;
    }

    /// Exchange the client credentials for an access token
    pub fn authenticate(&mut self) -> Result<()> {
        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", self.credentials.client_id()),
            ("client_secret", self.credentials.client_secret()),
        ];

        let response = self
            .transport
            .post_form(&self.config.token_url, &form)
            .map_err(|e| {
                log::error!("Network error during authentication: {}", e);
                Error::Authentication(format!("Network error during authentication: {}", e))
            })?;

        match response.status {
            200 => {
                let token: TokenResponse = serde_json::from_str(&response.body).map_err(|e| {
                    log::error!("Malformed token response: {}", e);
                    Error::Authentication(format!("Malformed token response: {}", e))
                })?;
                self.access_token = Some(token.access_token);
                log::info!("Successfully authenticated with the catalog service");
                Ok(())
            }
            401 => {
                log::error!("Authentication failed: invalid credentials");
                Err(Error::Authentication("Invalid credentials".to_string()))
            }
            status => {
                log::error!("Authentication failed with status {}", status);
                Err(Error::Authentication(format!(
                    "Authentication failed: {}",
                    status
                )))
            }
        }
    }

    /// Fetch playlist metadata and every track of the playlist
    pub fn get_playlist(&mut self, playlist_id: &str) -> Result<Playlist> {
        validate_playlist_id(playlist_id)?;
        let token = self.ensure_token()?;

        let url = format!(
            "{}/playlists/{}",
            self.config.api_base,
            urlencoding::encode(playlist_id)
        );

        let response = self.transport.get_authorized(&url, &token).map_err(|e| {
            log::error!("Network error fetching playlist: {}", e);
            Error::api(None, format!("Network error fetching playlist: {}", e))
        })?;

        match response.status {
            200 => {
                let meta: PlaylistResponse = parse_body(&response, "playlist")?;
                log::info!("Successfully fetched playlist: {}", playlist_id);

                let tracks = self.get_tracks(playlist_id)?;
                Playlist::new(
                    meta.name
                        .unwrap_or_else(|| wire::UNTITLED_PLAYLIST.to_string()),
                    meta.description,
                    tracks,
                )
            }
            404 => {
                log::error!("Playlist not found: {}", playlist_id);
                Err(Error::api(
                    Some(404),
                    format!("Playlist not found: {}", playlist_id),
                ))
            }
            401 => {
                log::error!("Unauthorized: invalid or expired token");
                Err(Error::Authentication(
                    "Invalid or expired authentication token".to_string(),
                ))
            }
            status => {
                log::error!("Failed to fetch playlist: {}", status);
                Err(Error::api(
                    Some(status),
                    format!("Failed to fetch playlist: {}", status),
                ))
            }
        }
    }

    /// Fetch all tracks of a playlist, following `next` links until the
    /// last page.
    ///
    /// Items without a usable track payload are skipped. Any failed page
    /// aborts the whole fetch.
    pub fn get_tracks(&mut self, playlist_id: &str) -> Result<Vec<Track>> {
        validate_playlist_id(playlist_id)?;
        let token = self.ensure_token()?;

        let mut tracks = Vec::new();
        let mut pages = 0usize;
        let mut next = Some(format!(
            "{}/playlists/{}/tracks",
            self.config.api_base,
            urlencoding::encode(playlist_id)
        ));

        // Terminates only when the service stops sending `next`
        while let Some(url) = next.take() {
            let response = self.transport.get_authorized(&url, &token).map_err(|e| {
                log::error!("Network error fetching tracks: {}", e);
                Error::api(None, format!("Network error fetching tracks: {}", e))
            })?;

            if response.status != 200 {
                log::error!("Failed to fetch tracks: {}", response.status);
                return Err(Error::api(
                    Some(response.status),
                    format!("Failed to fetch tracks: {}", response.status),
                ));
            }

            let page: TracksPage = parse_body(&response, "tracks page")?;
            pages += 1;

            for item in page.items.unwrap_or_default() {
                match wire::map_item(item) {
                    ItemOutcome::Track(track) => tracks.push(track),
                    ItemOutcome::Missing => {
                        log::warn!("Skipping playlist item without track data");
                    }
                    ItemOutcome::Invalid(reason) => {
                        log::warn!("Skipping invalid track: {}", reason);
                    }
                }
            }

            log::debug!(
                "Fetched page {} of tracks. Total so far: {}",
                pages,
                tracks.len()
            );
            next = page.next;
        }

        log::info!(
            "Successfully fetched {} tracks from playlist {}",
            tracks.len(),
            playlist_id
        );
        Ok(tracks)
    }

    fn ensure_token(&mut self) -> Result<String> {
        if self.access_token.is_none() {
            self.authenticate()?;
        }
        self.access_token
            .clone()
            .ok_or_else(|| Error::Authentication("No access token available".to_string()))
    }
}

fn validate_playlist_id(playlist_id: &str) -> Result<()> {
    if playlist_id.trim().is_empty() {
        return Err(Error::Validation("Playlist ID cannot be empty".to_string()));
    }
    Ok(())
}

fn parse_body<D: DeserializeOwned>(response: &HttpResponse, what: &str) -> Result<D> {
    serde_json::from_str(&response.body).map_err(|e| {
        log::error!("Malformed {} response: {}", what, e);
        Error::api(Some(response.status), format!("Malformed {} response: {}", what, e))
    })
}
