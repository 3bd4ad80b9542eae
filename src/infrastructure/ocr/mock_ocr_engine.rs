use crate::application::ports::{OcrEngine, OcrEngineError, PageImage};

/// Treats the page bytes as UTF-8 text and returns them unchanged. Lets the
/// whole pipeline run without a tesseract install when OCR_PROVIDER=mock.
pub struct MockOcrEngine;

#[async_trait::async_trait]
impl OcrEngine for MockOcrEngine {
    async fn recognize_text(&self, image: &PageImage) -> Result<String, OcrEngineError> {
        String::from_utf8(image.as_bytes().to_vec())
            .map_err(|e| OcrEngineError::RecognitionFailed(e.to_string()))
    }
}
