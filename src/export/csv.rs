//! CSV export: one row per track

use super::{ensure_not_empty, ensure_tracks, write_output, ExportFormat, Exporter};
use crate::error::Result;
use crate::model::ExportPayload;
use std::path::Path;

pub const HEADER: [&str; 4] = ["Track Title", "Artist", "Album", "Duration (ms)"];

const UNKNOWN: &str = "Unknown";
const LINE_END: &str = "\r\n";

/// Writes the track list as comma-separated rows under a fixed header
#[derive(Debug, Default)]
pub struct CsvExporter;

impl CsvExporter {
    pub fn new() -> Self {
        Self
    }

    /// Render the payload without touching the file system
    pub fn render(&self, data: &ExportPayload) -> String {
        let mut out = String::new();
        push_row(&mut out, HEADER.iter().copied());

        for track in data.tracks.iter().flatten() {
            let duration = track.duration.unwrap_or(0).to_string();
            push_row(
                &mut out,
                [
                    track.title.as_deref().unwrap_or(UNKNOWN),
                    track.artist.as_deref().unwrap_or(UNKNOWN),
                    track.album.as_deref().unwrap_or(UNKNOWN),
                    duration.as_str(),
                ],
            );
        }
        out
    }
}

impl Exporter for CsvExporter {
    fn export(&self, data: &ExportPayload, path: &Path) -> Result<()> {
        ensure_not_empty(data)?;
        ensure_tracks(data)?;

        let count = data.track_count();
        if count == 0 {
            log::warn!("No tracks to export");
        }

        write_output(path, self.render(data).as_bytes(), ExportFormat::Csv)?;

        log::info!("Successfully exported {} tracks to CSV: {:?}", count, path);
        Ok(())
    }
}

fn push_row<'a>(out: &mut String, fields: impl IntoIterator<Item = &'a str>) {
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_field(out, field);
    }
    out.push_str(LINE_END);
}

/// Quote a field only when it contains a delimiter, quote or line break
fn push_field(out: &mut String, field: &str) {
    if field.contains(&[',', '"', '\r', '\n'][..]) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TrackRecord;

    fn payload(tracks: Vec<TrackRecord>) -> ExportPayload {
        ExportPayload {
            name: Some("Mix".to_string()),
            description: Some(String::new()),
            tracks: Some(tracks),
        }
    }

    #[test]
    fn test_header_only_for_empty_tracks() {
        let rendered = CsvExporter::new().render(&payload(Vec::new()));
        assert_eq!(rendered, "Track Title,Artist,Album,Duration (ms)\r\n");
    }

    #[test]
    fn test_missing_fields_use_row_defaults() {
        let rendered = CsvExporter::new().render(&payload(vec![TrackRecord::default()]));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], "Unknown,Unknown,Unknown,0");
    }

    #[test]
    fn test_special_characters_are_quoted() {
        let rendered = CsvExporter::new().render(&payload(vec![TrackRecord {
            title: Some("Hello, World".to_string()),
            artist: Some("The \"Quoted\"".to_string()),
            album: Some("Plain".to_string()),
            duration: Some(5),
        }]));

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], r#""Hello, World","The ""Quoted""",Plain,5"#);
    }

    #[test]
    fn test_embedded_newline_is_quoted() {
        let mut out = String::new();
        push_field(&mut out, "two\nlines");
        assert_eq!(out, "\"two\nlines\"");
    }
}
