pub mod ascii_json;
pub mod assembler;
pub mod image_index;
pub mod page_text;
pub mod reader;

pub use assembler::DatasetAssembler;
pub use image_index::ImageIndexParser;
pub use page_text::PageTextParser;
pub use reader::SourceReader;
