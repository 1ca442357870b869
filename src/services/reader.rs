use crate::error::{MagazineDataError, Result};
use crate::types::SourceMetadata;
use chrono::Utc;
use std::fs;
use std::path::Path;
use tracing::info;

pub struct SourceReader;

impl SourceReader {
    /// Reads a whole input dump into memory with line endings folded to `\n`.
    pub fn read(path: &Path) -> Result<(String, SourceMetadata)> {
        info!("Reading file: {}", path.display());

        let raw = fs::read_to_string(path).map_err(|source| MagazineDataError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;
        let content = Self::normalize_newlines(&raw);

        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        let metadata = SourceMetadata {
            filename,
            path: path.to_path_buf(),
            total_lines: content.lines().count(),
            read_at: Utc::now(),
        };

        Ok((content, metadata))
    }

    /// Turns `\r\n` and lone `\r` into `\n`.
    pub fn normalize_newlines(content: &str) -> String {
        if !content.contains('\r') {
            return content.to_string();
        }
        content.replace("\r\n", "\n").replace('\r', "\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_records_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("magazine_dump.txt");
        fs::write(&path, "one\ntwo\n\x0cthree").unwrap();

        let (content, metadata) = SourceReader::read(&path).unwrap();
        assert_eq!(content, "one\ntwo\n\x0cthree");
        assert_eq!(metadata.filename, "magazine_dump.txt");
        assert_eq!(metadata.total_lines, 3);
        assert_eq!(metadata.path, path);
        assert!(metadata.read_at <= Utc::now());
    }

    #[test]
    fn test_crlf_and_bare_cr_become_newlines() {
        assert_eq!(SourceReader::normalize_newlines("a\r\nb\rc\n"), "a\nb\nc\n");
        assert_eq!(SourceReader::normalize_newlines("\r\r\n\x0c"), "\n\n\x0c");
        assert_eq!(SourceReader::normalize_newlines("plain\n"), "plain\n");
    }

    #[test]
    fn test_read_folds_line_endings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pdf_images.list");
        fs::write(&path, "head\r---\r\n1 2 image 3\r").unwrap();

        let (content, metadata) = SourceReader::read(&path).unwrap();
        assert_eq!(content, "head\n---\n1 2 image 3\n");
        assert_eq!(metadata.total_lines, 3);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pdf_images.list");

        match SourceReader::read(&path) {
            Err(MagazineDataError::ReadInput { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected ReadInput error, got {:?}", other),
        }
    }
}
