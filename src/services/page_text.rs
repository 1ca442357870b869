use crate::error::Result;
use crate::services::SourceReader;
use crate::types::{PageTextMap, SourceMetadata};
use std::path::Path;
use tracing::info;

/// `pdftotext` ends every page with a form feed.
const PAGE_BREAK: char = '\x0c';

pub struct PageTextParser;

impl PageTextParser {
    pub fn parse_file(path: &Path) -> Result<(PageTextMap, SourceMetadata)> {
        let (content, metadata) = SourceReader::read(path)?;
        let pages = Self::parse_dump(&content);

        info!("Found {} pages in {}", pages.len(), metadata.filename);

        Ok((pages, metadata))
    }

    /// Numbers pages by position, so a trailing form feed still produces a
    /// final empty page.
    pub fn parse_dump(content: &str) -> PageTextMap {
        content
            .split(PAGE_BREAK)
            .zip(1u32..)
            .map(|(text, page)| (page, text.trim().to_string()))
            .collect()
    }
}
