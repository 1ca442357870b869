use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Image number → page number, in the order rows appear in the listing.
///
/// The image number is the `num` column of `pdfimages -list`. The front end
/// loads assets named `<num>.jpg`, which assumes the extracted files were
/// numbered the same way. Nothing here checks that assumption.
pub type ImageIndexMap = IndexMap<u32, u32>;

/// 1-based page number → trimmed page text.
pub type PageTextMap = BTreeMap<u32, String>;

/// One page of the generated dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagazinePage {
    pub page: u32,
    pub text: String,
    pub images: Vec<u32>,
}

impl MagazinePage {
    pub fn new(page: u32, text: impl Into<String>) -> Self {
        Self {
            page,
            text: text.into(),
            images: Vec::new(),
        }
    }
}

/// Pages sorted ascending by page number.
pub type MagazineDataset = Vec<MagazinePage>;

/// Describes one input dump as it was read.
#[derive(Debug, Clone)]
pub struct SourceMetadata {
    pub filename: String,
    pub path: PathBuf,
    pub total_lines: usize,
    pub read_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetStats {
    pub pages: usize,
    pub images: usize,
    pub pages_without_text: usize,
    /// Text pages that carry no image and so are left out of the dataset.
    pub text_pages_dropped: usize,
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub image_list: PathBuf,
    pub text_dump: PathBuf,
    pub output: PathBuf,
}

impl GenerateConfig {
    pub const DEFAULT_IMAGE_LIST: &'static str = "pdf_images.list";
    pub const DEFAULT_TEXT_DUMP: &'static str = "magazine_dump.txt";
    pub const DEFAULT_OUTPUT: &'static str = "src/data/magazine-data.ts";
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            image_list: PathBuf::from(Self::DEFAULT_IMAGE_LIST),
            text_dump: PathBuf::from(Self::DEFAULT_TEXT_DUMP),
            output: PathBuf::from(Self::DEFAULT_OUTPUT),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub image_list: SourceMetadata,
    pub text_dump: SourceMetadata,
    pub stats: DatasetStats,
    pub output: PathBuf,
}
