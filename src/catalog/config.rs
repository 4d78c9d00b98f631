//! Credentials and endpoint configuration for the catalog client

use crate::error::{Error, Result};
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const CLIENT_ID_VAR: &str = "SPOTIFY_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "SPOTIFY_CLIENT_SECRET";
pub const REDIRECT_URI_VAR: &str = "SPOTIFY_REDIRECT_URI";

/// Client-credential pair used for the token exchange
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: String,

    /// Accepted for completeness; the client-credential flow never uses it
    redirect_uri: Option<String>,
}

impl Credentials {
    /// Validate explicit credential values.
    ///
    /// Fails with [`Error::Configuration`] when the id or secret is missing
    /// or blank.
    pub fn new(
        client_id: Option<String>,
        client_secret: Option<String>,
        redirect_uri: Option<String>,
    ) -> Result<Self> {
        match (present(client_id), present(client_secret)) {
            (Some(client_id), Some(client_secret)) => Ok(Self {
                client_id,
                client_secret,
                redirect_uri: present(redirect_uri),
            }),
            _ => Err(Error::Configuration(
                "Spotify credentials (client_id and client_secret) are required".to_string(),
            )),
        }
    }

    /// Read credentials from `SPOTIFY_CLIENT_ID`, `SPOTIFY_CLIENT_SECRET`
    /// and `SPOTIFY_REDIRECT_URI`
    pub fn from_env() -> Result<Self> {
        Self::resolve(None, None, None)
    }

    /// Prefer explicit values, falling back to the environment for each
    /// missing one
    pub fn resolve(
        client_id: Option<String>,
        client_secret: Option<String>,
        redirect_uri: Option<String>,
    ) -> Result<Self> {
        Self::resolve_with(client_id, client_secret, redirect_uri, |key| {
            std::env::var(key).ok()
        })
    }

    fn resolve_with<F>(
        client_id: Option<String>,
        client_secret: Option<String>,
        redirect_uri: Option<String>,
        lookup: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::new(
            present(client_id).or_else(|| lookup(CLIENT_ID_VAR)),
            present(client_secret).or_else(|| lookup(CLIENT_SECRET_VAR)),
            present(redirect_uri).or_else(|| lookup(REDIRECT_URI_VAR)),
        )
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn redirect_uri(&self) -> Option<&str> {
        self.redirect_uri.as_deref()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .finish()
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Endpoints and limits for the catalog client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Web API, without a trailing slash
    pub api_base: String,

    /// Token endpoint for the client-credential exchange
    pub token_url: String,

    /// Upper bound for every single request
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Point the client at another API base URL
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Point the client at another token endpoint
    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_explicit_credentials() {
        let creds = Credentials::new(
            Some("id".to_string()),
            Some("secret".to_string()),
            None,
        )
        .unwrap();

        assert_eq!(creds.client_id(), "id");
        assert_eq!(creds.client_secret(), "secret");
        assert!(creds.redirect_uri().is_none());
    }

    #[test]
    fn test_missing_secret_is_configuration_error() {
        let err = Credentials::new(Some("id".to_string()), None, None).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));

        let err = Credentials::new(None, Some("secret".to_string()), None).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_blank_values_count_as_missing() {
        let err = Credentials::new(Some("  ".to_string()), Some("secret".to_string()), None)
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_resolve_falls_back_to_lookup() {
        let lookup = |key: &str| match key {
            CLIENT_ID_VAR => Some("env-id".to_string()),
            CLIENT_SECRET_VAR => Some("env-secret".to_string()),
            REDIRECT_URI_VAR => Some("http://localhost/callback".to_string()),
            _ => None,
        };

        let creds =
            Credentials::resolve_with(Some("cli-id".to_string()), None, None, lookup).unwrap();
        assert_eq!(creds.client_id(), "cli-id");
        assert_eq!(creds.client_secret(), "env-secret");
        assert_eq!(creds.redirect_uri(), Some("http://localhost/callback"));
    }

    #[test]
    fn test_resolve_without_anything_fails() {
        let err = Credentials::resolve_with(None, None, None, no_env).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let creds =
            Credentials::new(Some("id".to_string()), Some("hunter2".to_string()), None).unwrap();
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_client_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.token_url, DEFAULT_TOKEN_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_api_base_trailing_slash_trimmed() {
        let config = ClientConfig::new().with_api_base("http://127.0.0.1:8080/v1/");
        assert_eq!(config.api_base, "http://127.0.0.1:8080/v1");
    }
}
