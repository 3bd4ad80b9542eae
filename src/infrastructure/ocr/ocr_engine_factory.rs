use std::sync::Arc;

use crate::application::ports::OcrEngine;
use crate::presentation::config::{OcrProvider, OcrSettings};

use super::mock_ocr_engine::MockOcrEngine;
use super::tesseract_engine::TesseractEngine;

#[derive(Debug, thiserror::Error)]
pub enum OcrEngineFactoryError {
    #[error("ocr engine initialization failed: {0}")]
    InitializationFailed(String),
}

pub struct OcrEngineFactory;

impl OcrEngineFactory {
    pub fn create(settings: &OcrSettings) -> Result<Arc<dyn OcrEngine>, OcrEngineFactoryError> {
        match settings.provider {
            OcrProvider::Tesseract => {
                tracing::info!(language = %settings.language, "Loading Tesseract OCR engine");
                let engine = TesseractEngine::new(&settings.language, settings.datapath.as_deref())
                    .map_err(|e| OcrEngineFactoryError::InitializationFailed(e.to_string()))?;
                Ok(Arc::new(engine))
            }
            OcrProvider::Mock => {
                tracing::info!("Loading mock OCR engine");
                Ok(Arc::new(MockOcrEngine))
            }
        }
    }
}
