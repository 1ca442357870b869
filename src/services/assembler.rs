use crate::error::{MagazineDataError, Result};
use crate::services::ascii_json::to_ascii_pretty_string;
use crate::types::{DatasetStats, ImageIndexMap, MagazineDataset, MagazinePage, PageTextMap};
use indexmap::IndexMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

const PAGE_INTERFACE: &str = "\
export interface MagazinePage {
  page: number;
  text: string;
  images: number[];
}

";

const DATASET_PREFIX: &str = "export const magazineData: MagazinePage[] = ";

pub struct DatasetAssembler;

impl DatasetAssembler {
    /// Groups images by page and attaches each page's text.
    ///
    /// Pages without images are left out even when they have text. Image
    /// order within a page follows the iteration order of `images`.
    pub fn assemble(images: &ImageIndexMap, texts: &PageTextMap) -> MagazineDataset {
        let mut pages: IndexMap<u32, MagazinePage> = IndexMap::new();

        for (&image, &page) in images {
            pages
                .entry(page)
                .or_insert_with(|| {
                    let text = texts.get(&page).map(String::as_str).unwrap_or_default();
                    MagazinePage::new(page, text)
                })
                .images
                .push(image);
        }

        let mut dataset: MagazineDataset = pages.into_values().collect();
        dataset.sort_by_key(|p| p.page);

        debug!("Assembled {} pages from {} images", dataset.len(), images.len());
        dataset
    }

    /// Renders the dataset as a TypeScript module.
    pub fn render(dataset: &[MagazinePage]) -> Result<String> {
        let json = to_ascii_pretty_string(dataset)?;

        let capacity = PAGE_INTERFACE.len() + DATASET_PREFIX.len() + json.len() + 1;
        let mut content = String::with_capacity(capacity);
        content.push_str(PAGE_INTERFACE);
        content.push_str(DATASET_PREFIX);
        content.push_str(&json);
        content.push(';');

        Ok(content)
    }

    /// Overwrites `output_path` with the rendered module.
    pub fn write_dataset(output_path: &Path, dataset: &[MagazinePage]) -> Result<()> {
        let content = Self::render(dataset)?;

        fs::write(output_path, content).map_err(|source| MagazineDataError::WriteOutput {
            path: output_path.to_path_buf(),
            source,
        })?;

        info!("Wrote {} pages to {}", dataset.len(), output_path.display());
        Ok(())
    }

    pub fn stats(dataset: &[MagazinePage], texts: &PageTextMap) -> DatasetStats {
        let text_pages_dropped = texts
            .iter()
            .filter(|(_, text)| !text.is_empty())
            .filter(|(page, _)| dataset.binary_search_by_key(*page, |p| p.page).is_err())
            .count();

        DatasetStats {
            pages: dataset.len(),
            images: dataset.iter().map(|p| p.images.len()).sum(),
            pages_without_text: dataset.iter().filter(|p| p.text.is_empty()).count(),
            text_pages_dropped,
        }
    }
}
