use async_trait::async_trait;

use super::page_image::PageImage;

/// Character recognition over one rendered page. Implementations are opaque
/// to the pipeline: the engine either returns the recognized text or fails
/// the whole request.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    async fn recognize_text(&self, image: &PageImage) -> Result<String, OcrEngineError>;
}

#[derive(Debug, thiserror::Error)]
pub enum OcrEngineError {
    #[error("recognition failed: {0}")]
    RecognitionFailed(String),
    #[error("ocr engine unavailable: {0}")]
    Unavailable(String),
}
