mod ocr_engine;
mod page_image;
mod page_renderer;

pub use ocr_engine::{OcrEngine, OcrEngineError};
pub use page_image::PageImage;
pub use page_renderer::{PageRenderError, PageRenderer};
