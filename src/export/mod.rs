//! Playlist export formats and orchestration
//!
//! Every format implements [`Exporter`] over an [`ExportPayload`].
//! [`ExportFormat`] selects the implementation by name.

pub mod config;
pub mod csv;
pub mod json;
pub mod organizer;
pub mod pipeline;
pub mod xml;

pub use config::ExportConfig;
pub use organizer::{sanitize_filename, OutputOrganizer};
pub use pipeline::ExportPipeline;

use crate::error::{Error, Result};
use crate::model::ExportPayload;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Writes an export payload to a file in one particular format
pub trait Exporter {
    /// Serialize `data` into the file at `path`, creating missing parent
    /// directories first
    fn export(&self, data: &ExportPayload, path: &Path) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
    Xml,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Json, ExportFormat::Csv, ExportFormat::Xml];

    /// Look a format up by its name (`json`, `csv`, `xml`), ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Xml => "xml",
        }
    }

    /// File extension of the output, without the dot
    pub fn extension(&self) -> &'static str {
        self.name()
    }

    /// The exporter writing this format
    pub fn exporter(&self) -> Box<dyn Exporter> {
        match self {
            ExportFormat::Json => Box::new(json::JsonExporter::new()),
            ExportFormat::Csv => Box::new(csv::CsvExporter::new()),
            ExportFormat::Xml => Box::new(xml::XmlExporter::new()),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| {
            Error::Validation(format!(
                "Unsupported export format '{}' (expected json, csv or xml)",
                s
            ))
        })
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Shared precondition of every format
pub(crate) fn ensure_not_empty(data: &ExportPayload) -> Result<()> {
    if data.is_empty() {
        return Err(Error::Validation("Data cannot be empty".to_string()));
    }
    Ok(())
}

pub(crate) fn ensure_tracks(data: &ExportPayload) -> Result<()> {
    if data.tracks.is_none() {
        return Err(Error::Validation("Data must contain tracks".to_string()));
    }
    Ok(())
}

/// Write a rendered export, creating parent directories as needed
pub(crate) fn write_output(path: &Path, contents: &[u8], format: ExportFormat) -> Result<()> {
    let result = (|| -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, contents)
    })();

    result.map_err(|e| {
        log::error!(
            "Failed to write {} file {:?}: {}",
            format.name().to_uppercase(),
            path,
            e
        );
        Error::Io(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_lookup_by_name() {
        assert_eq!(ExportFormat::from_name("json"), Some(ExportFormat::Json));
        assert_eq!(ExportFormat::from_name("CSV"), Some(ExportFormat::Csv));
        assert_eq!("xml".parse::<ExportFormat>().unwrap(), ExportFormat::Xml);
        assert!(ExportFormat::from_name("yaml").is_none());
        assert!(matches!(
            "yaml".parse::<ExportFormat>().unwrap_err(),
            Error::Validation(_)
        ));
    }

    #[test]
    fn test_extension_matches_name() {
        for format in ExportFormat::ALL {
            assert_eq!(format.extension(), format.to_string());
        }
    }

    #[test]
    fn test_every_format_rejects_empty_payload() {
        let dir = tempfile::TempDir::new().unwrap();
        for format in ExportFormat::ALL {
            let path = dir.path().join(format!("out.{}", format.extension()));
            let err = format
                .exporter()
                .export(&ExportPayload::default(), &path)
                .unwrap_err();
            assert!(matches!(err, Error::Validation(_)), "{}", format);
            assert!(!path.exists());
        }
    }

    #[test]
    fn test_write_output_creates_parents() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("a").join("b").join("out.json");

        write_output(&path, b"{}", ExportFormat::Json).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_write_output_failure_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "not a directory").unwrap();

        let err = write_output(&blocker.join("out.csv"), b"x", ExportFormat::Csv).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
