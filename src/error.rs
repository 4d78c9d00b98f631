//! Error types shared by the catalog client and the exporters

use thiserror::Error;

/// Everything that can go wrong while fetching or exporting a playlist.
///
/// Each variant corresponds to one class of failure that the command line
/// reports with its own message. Malformed individual track items are not
/// errors: the client skips them while paginating.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or blank credentials. Raised at construction time.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Token exchange failed, or the service rejected the bearer token.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Non-auth HTTP failure or transport failure during a data request.
    #[error("API error: {message}")]
    Api {
        /// HTTP status, when the service answered at all
        status: Option<u16>,
        message: String,
    },

    /// Malformed input to a public operation.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// File system failure while writing an export.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn api(status: Option<u16>, message: impl Into<String>) -> Self {
        Error::Api {
            status,
            message: message.into(),
        }
    }

    /// Short label for the class of failure, used in command line output
    pub fn label(&self) -> &'static str {
        match self {
            Error::Configuration(_) => "Configuration error",
            Error::Authentication(_) => "Authentication failed",
            Error::Api { .. } => "API error",
            Error::Validation(_) => "Invalid input",
            Error::Io(_) => "File write failed",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
