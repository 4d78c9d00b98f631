//! XML export
//!
//! Layout:
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <playlist name=".." description="..">
//!   <tracks><track><title/><artist/><album/><duration/></track>...</tracks>
//! </playlist>
//! ```
//! (written without indentation)

use super::{ensure_not_empty, ensure_tracks, write_output, ExportFormat, Exporter};
use crate::error::{Error, Result};
use crate::model::{ExportPayload, TrackRecord};
use quick_xml::escape::escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::path::Path;

const UNTITLED: &str = "Untitled";
const UNKNOWN: &str = "Unknown";

/// Writes the playlist as an XML document, escaping all markup characters
#[derive(Debug, Default)]
pub struct XmlExporter;

impl XmlExporter {
    pub fn new() -> Self {
        Self
    }

    /// Render the payload without touching the file system
    pub fn render(&self, data: &ExportPayload) -> Result<Vec<u8>> {
        let mut writer = Writer::new(Vec::new());

        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_error)?;
        writer.get_mut().push(b'\n');

        let mut root = BytesStart::new("playlist");
        let name = escape_attribute(data.name.as_deref().unwrap_or(UNTITLED));
        let description = escape_attribute(data.description.as_deref().unwrap_or(""));
        root.push_attribute(Attribute::from((&b"name"[..], name.as_bytes())));
        root.push_attribute(Attribute::from((&b"description"[..], description.as_bytes())));
        writer.write_event(Event::Start(root)).map_err(xml_error)?;

        writer
            .write_event(Event::Start(BytesStart::new("tracks")))
            .map_err(xml_error)?;
        for track in data.tracks.iter().flatten() {
            write_track(&mut writer, track)?;
        }
        writer
            .write_event(Event::End(BytesEnd::new("tracks")))
            .map_err(xml_error)?;

        writer
            .write_event(Event::End(BytesEnd::new("playlist")))
            .map_err(xml_error)?;

        Ok(writer.into_inner())
    }
}

impl Exporter for XmlExporter {
    fn export(&self, data: &ExportPayload, path: &Path) -> Result<()> {
        ensure_not_empty(data)?;
        ensure_tracks(data)?;

        let rendered = self.render(data)?;
        write_output(path, &rendered, ExportFormat::Xml)?;

        log::info!(
            "Successfully exported {} tracks to XML: {:?}",
            data.track_count(),
            path
        );
        Ok(())
    }
}

fn write_track(writer: &mut Writer<Vec<u8>>, track: &TrackRecord) -> Result<()> {
    let duration = track.duration.unwrap_or(0).to_string();

    writer
        .write_event(Event::Start(BytesStart::new("track")))
        .map_err(xml_error)?;
    write_text_element(writer, "title", track.title.as_deref().unwrap_or(UNKNOWN))?;
    write_text_element(writer, "artist", track.artist.as_deref().unwrap_or(UNKNOWN))?;
    write_text_element(writer, "album", track.album.as_deref().unwrap_or(UNKNOWN))?;
    write_text_element(writer, "duration", &duration)?;
    writer
        .write_event(Event::End(BytesEnd::new("track")))
        .map_err(xml_error)?;
    Ok(())
}

fn write_text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(xml_error)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(xml_error)?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(xml_error)?;
    Ok(())
}

/// Escape markup characters plus whitespace that parsers would otherwise
/// normalize to spaces inside attribute values
fn escape_attribute(value: &str) -> String {
    escape(value)
        .replace('\n', "&#10;")
        .replace('\r', "&#13;")
        .replace('\t', "&#9;")
}

fn xml_error<E>(err: E) -> Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    Error::Io(std::io::Error::other(err))
}
