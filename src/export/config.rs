//! Export configuration

use super::ExportFormat;
use std::path::PathBuf;

/// Configuration for the export process
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Directory the export file is written into
    pub output_dir: PathBuf,

    /// Output format (JSON unless told otherwise)
    pub format: ExportFormat,
}

impl ExportConfig {
    /// Create a new export configuration
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            format: ExportFormat::Json,
        }
    }

    /// Set the output format
    pub fn with_format(mut self, format: ExportFormat) -> Self {
        self.format = format;
        self
    }
}
