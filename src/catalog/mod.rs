//! Catalog service access
//!
//! Authenticates with the client-credential grant and fetches playlists,
//! following cursor pagination for the track list.

pub mod client;
pub mod config;
pub mod transport;
mod wire;

pub use client::CatalogClient;
pub use config::{ClientConfig, Credentials};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport, TransportError};
