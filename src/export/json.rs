//! JSON export

use super::{ensure_not_empty, write_output, ExportFormat, Exporter};
use crate::error::{Error, Result};
use crate::model::ExportPayload;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::Path;

/// Writes the payload verbatim as 4-space indented JSON
#[derive(Debug, Default)]
pub struct JsonExporter;

impl JsonExporter {
    pub fn new() -> Self {
        Self
    }

    /// Render the payload without touching the file system
    pub fn render(&self, data: &ExportPayload) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
        data.serialize(&mut serializer)
            .map_err(|e| Error::Io(std::io::Error::other(e)))?;
        Ok(out)
    }
}

impl Exporter for JsonExporter {
    fn export(&self, data: &ExportPayload, path: &Path) -> Result<()> {
        ensure_not_empty(data)?;

        let rendered = self.render(data)?;
        write_output(path, &rendered, ExportFormat::Json)?;

        log::info!(
            "Successfully exported {} tracks to JSON: {:?}",
            data.track_count(),
            path
        );
        Ok(())
    }
}
