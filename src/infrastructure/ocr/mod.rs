mod mock_ocr_engine;
mod ocr_engine_factory;
mod tesseract_engine;

pub use mock_ocr_engine::MockOcrEngine;
pub use ocr_engine_factory::{OcrEngineFactory, OcrEngineFactoryError};
pub use tesseract_engine::TesseractEngine;
