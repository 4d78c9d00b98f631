//! Output directory layout and file naming

use crate::error::{Error, Result};
use std::fs;
use std::path::PathBuf;

const FALLBACK_NAME: &str = "playlist";
const RESERVED: [char; 7] = ['<', '>', ':', '"', '|', '?', '*'];

/// Decides where an export lands inside the output directory
pub struct OutputOrganizer {
    output_dir: PathBuf,
}

impl OutputOrganizer {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Create the output directory if it does not exist yet
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir).map_err(|e| {
            log::error!("Failed to create output directory {:?}: {}", self.output_dir, e);
            Error::Io(e)
        })?;
        log::debug!("Output directory ready at {:?}", self.output_dir);
        Ok(())
    }

    /// Path of the export file for a playlist name and extension
    pub fn export_path(&self, playlist_name: &str, extension: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", sanitize_filename(playlist_name), extension))
    }
}

/// Turn a playlist name into a safe file stem.
///
/// Path separators, `..` and characters reserved on common file systems are
/// removed, then surrounding dots and spaces are trimmed. Falls back to
/// `playlist` when nothing is left.
pub fn sanitize_filename(name: &str) -> String {
    let without_separators = name.replace(&['/', '\\'][..], "").replace("..", "");
    let cleaned: String = without_separators
        .chars()
        .filter(|c| !RESERVED.contains(c))
        .collect();
    let trimmed = cleaned.trim_matches(|c: char| c == '.' || c == ' ');

    if trimmed.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}
