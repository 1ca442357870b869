use crate::error::Result;
use crate::services::SourceReader;
use crate::types::{ImageIndexMap, SourceMetadata};
use regex::Regex;
use std::path::Path;
use tracing::{debug, info};

/// Parses `pdfimages -list` output into an image → page map.
///
/// Everything up to and including the dashed separator under the column
/// headers is ignored. Each following row is read as
/// `<page> <num> <type> ...`; rows that do not fit are dropped silently.
pub struct ImageIndexParser {
    separator_pattern: Regex,
}

impl ImageIndexParser {
    const MIN_FIELDS: usize = 4;

    pub fn new() -> Self {
        Self {
            separator_pattern: Regex::new(r"^---").unwrap(),
        }
    }

    pub fn parse_file(&self, path: &Path) -> Result<(ImageIndexMap, SourceMetadata)> {
        let (content, metadata) = SourceReader::read(path)?;
        let mapping = self.parse_listing(&content);

        info!(
            "Mapped {} images from {} ({} lines)",
            mapping.len(),
            metadata.filename,
            metadata.total_lines
        );

        Ok((mapping, metadata))
    }

    pub fn parse_listing(&self, content: &str) -> ImageIndexMap {
        let mut mapping = ImageIndexMap::new();
        let mut past_header = false;
        let mut accepted = 0usize;

        for (line_idx, line) in content.lines().enumerate() {
            if self.separator_pattern.is_match(line) {
                past_header = true;
                continue;
            }
            if !past_header {
                continue;
            }

            match Self::parse_row(line) {
                Some((page, image)) => {
                    mapping.insert(image, page);
                    accepted += 1;
                }
                None => debug!("Skipping listing line {}: {:?}", line_idx + 1, line),
            }
        }

        debug!("Accepted {} listing rows", accepted);
        mapping
    }

    /// Returns `(page, image)` for a data row.
    fn parse_row(line: &str) -> Option<(u32, u32)> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < Self::MIN_FIELDS {
            return None;
        }

        let Ok(page) = fields[0].parse::<u32>() else {
            return None;
        };
        let Ok(image) = fields[1].parse::<u32>() else {
            return None;
        };

        Some((page, image))
    }
}

impl Default for ImageIndexParser {
    fn default() -> Self {
        Self::new()
    }
}
