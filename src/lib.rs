//! # Magazine Dataset
//!
//! Builds the front-end dataset for the school magazine from two poppler
//! dumps: the `pdfimages -list` image listing and the `pdftotext` page text.
//! Images are grouped by the page they appear on, each page carries its
//! text, and the result is written out as a TypeScript module.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use magazine_dataset::{generate, GenerateConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let report = generate(&GenerateConfig::default())?;
//!     println!("{} pages, {} images", report.stats.pages, report.stats.images);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod services;
pub mod types;

pub use error::{MagazineDataError, Result};
pub use services::{DatasetAssembler, ImageIndexParser, PageTextParser, SourceReader};
pub use types::{
    DatasetStats, GenerateConfig, GenerateReport, ImageIndexMap, MagazineDataset, MagazinePage,
    PageTextMap, SourceMetadata,
};

use tracing::info;

/// Reads both dumps, assembles the dataset and overwrites the output file.
pub fn generate(config: &GenerateConfig) -> Result<GenerateReport> {
    let (images, image_list) = ImageIndexParser::new().parse_file(&config.image_list)?;
    let (texts, text_dump) = PageTextParser::parse_file(&config.text_dump)?;

    let dataset = DatasetAssembler::assemble(&images, &texts);
    DatasetAssembler::write_dataset(&config.output, &dataset)?;

    let stats = DatasetAssembler::stats(&dataset, &texts);
    info!(
        "Dataset has {} pages with {} images ({} without text, {} text pages dropped)",
        stats.pages, stats.images, stats.pages_without_text, stats.text_pages_dropped
    );

    Ok(GenerateReport {
        image_list,
        text_dump,
        stats,
        output: config.output.clone(),
    })
}
