use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::application::ports::{OcrEngine, OcrEngineError, PageImage, PageRenderer};
use crate::domain::{Document, DocumentKind};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("unreadable document: {0}")]
    UnreadableDocument(String),

    #[error("ocr engine error: {0}")]
    Ocr(#[from] OcrEngineError),

    #[error("text extraction timed out after {0:?}")]
    Timeout(Duration),
}

/// Turns raw document bytes into plain text. PDFs are rendered to one image
/// per page and recognized page by page; images go straight to the OCR
/// engine. The whole extraction runs under a single deadline.
pub struct TextExtractionService {
    renderer: Arc<dyn PageRenderer>,
    ocr_engine: Arc<dyn OcrEngine>,
    timeout: Duration,
}

impl TextExtractionService {
    pub fn new(
        renderer: Arc<dyn PageRenderer>,
        ocr_engine: Arc<dyn OcrEngine>,
        timeout: Duration,
    ) -> Self {
        Self {
            renderer,
            ocr_engine,
            timeout,
        }
    }

    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
            kind = document.kind.as_str(),
        )
    )]
    pub async fn extract(&self, data: &[u8], document: &Document) -> Result<String, ExtractionError> {
        tokio::time::timeout(self.timeout, self.extract_by_kind(data, document.kind))
            .await
            .map_err(|_| ExtractionError::Timeout(self.timeout))?
    }

    async fn extract_by_kind(
        &self,
        data: &[u8],
        kind: DocumentKind,
    ) -> Result<String, ExtractionError> {
        match kind {
            DocumentKind::Pdf => self.extract_from_pdf(data).await,
            DocumentKind::Image => self.extract_from_image(data).await,
        }
    }

    async fn extract_from_pdf(&self, data: &[u8]) -> Result<String, ExtractionError> {
        let pages = self
            .renderer
            .render_pages(data)
            .await
            .map_err(|e| ExtractionError::UnreadableDocument(e.to_string()))?;

        tracing::debug!(page_count = pages.len(), "Rendered PDF pages");

        let mut page_texts = Vec::with_capacity(pages.len());
        for (index, page) in pages.iter().enumerate() {
            let text = self.ocr_engine.recognize_text(page).await?;
            tracing::trace!(page = index, chars = text.len(), "Recognized page");
            page_texts.push(text);
        }

        Ok(page_texts.join("\n"))
    }

    async fn extract_from_image(&self, data: &[u8]) -> Result<String, ExtractionError> {
        // Decode up front so a corrupt upload is reported as unreadable
        // rather than as an OCR failure.
        image::load_from_memory(data)
            .map_err(|e| ExtractionError::UnreadableDocument(format!("image decode failed: {e}")))?;

        let page = PageImage::new(data.to_vec());
        let text = self.ocr_engine.recognize_text(&page).await?;
        Ok(text)
    }
}
