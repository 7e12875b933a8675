use codestudio_common::{BufferKind, Sources};
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Entry names at the archive root, in write order
pub const ARCHIVE_ENTRIES: [&str; 3] = [
    BufferKind::ALL[0].file_name(),
    BufferKind::ALL[1].file_name(),
    BufferKind::ALL[2].file_name(),
];

const FALLBACK_NAME: &str = "project";

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("Failed to generate archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Archive IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Archive entry '{0}' is missing")]
    MissingEntry(String),

    #[error("Archive entry '{0}' is not UTF-8 text")]
    InvalidText(String),
}

/// A finished archive ready to hand to the host for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedArchive {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ExportedArchive {
    /// Package `sources` under a download name derived from `project_name`
    pub fn new(project_name: &str, sources: &Sources) -> Result<Self, ArchiveError> {
        let bytes = build_archive(sources)?;
        let file_name = archive_file_name(project_name);
        info!(file_name = %file_name, bytes = bytes.len(), "Generated archive");
        Ok(Self { file_name, bytes })
    }

    /// Write into `dir` under the download name, returning the full path
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf, ArchiveError> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

/// Zip the three buffers, deflate-compressed, at the archive root
pub fn build_archive(sources: &Sources) -> Result<Vec<u8>, ArchiveError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for kind in BufferKind::ALL {
        let contents = sources.get(kind);
        writer.start_file(kind.file_name(), options)?;
        writer.write_all(contents.as_bytes())?;
        debug!(entry = kind.file_name(), bytes = contents.len(), "Added archive entry");
    }

    Ok(writer.finish()?.into_inner())
}

/// Read the three entries back out of archive bytes
pub fn read_archive(bytes: &[u8]) -> Result<Sources, ArchiveError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut sources = Sources::default();

    for kind in BufferKind::ALL {
        let name = kind.file_name();
        let mut entry = archive.by_name(name).map_err(|e| match e {
            zip::result::ZipError::FileNotFound => ArchiveError::MissingEntry(name.to_string()),
            other => ArchiveError::Zip(other),
        })?;

        let mut raw = Vec::new();
        entry.read_to_end(&mut raw)?;
        let text = String::from_utf8(raw).map_err(|_| ArchiveError::InvalidText(name.to_string()))?;
        sources.set(kind, text);
    }

    Ok(sources)
}

/// Download name for a project: `<name>.zip` with path-hostile characters
/// replaced by `-`
pub fn archive_file_name(project_name: &str) -> String {
    let cleaned: String = project_name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect();
    let cleaned = cleaned.trim_matches('.');

    if cleaned.is_empty() {
        format!("{}.zip", FALLBACK_NAME)
    } else {
        format!("{}.zip", cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_follow_buffer_file_names() {
        assert_eq!(ARCHIVE_ENTRIES, BufferKind::ALL.map(BufferKind::file_name));
        assert_eq!(ARCHIVE_ENTRIES, ["index.html", "styles.css", "script.js"]);
    }

    #[test]
    fn test_file_name_keeps_readable_names() {
        assert_eq!(archive_file_name("My Site"), "My Site.zip");
        assert_eq!(archive_file_name("Лендинг"), "Лендинг.zip");
    }

    #[test]
    fn test_file_name_replaces_separators() {
        assert_eq!(archive_file_name("a/b\\c"), "a-b-c.zip");
        assert_eq!(archive_file_name("what?*"), "what--.zip");
    }

    #[test]
    fn test_file_name_falls_back_when_nothing_left() {
        assert_eq!(archive_file_name("   "), "project.zip");
        assert_eq!(archive_file_name(".."), "project.zip");
    }

    #[test]
    fn test_read_rejects_garbage() {
        assert!(matches!(
            read_archive(b"definitely not a zip"),
            Err(ArchiveError::Zip(_))
        ));
    }
}
