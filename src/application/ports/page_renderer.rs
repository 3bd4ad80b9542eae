use async_trait::async_trait;

use super::page_image::PageImage;

/// Rasterizes a PDF into one image per page, in page order.
#[async_trait]
pub trait PageRenderer: Send + Sync {
    async fn render_pages(&self, data: &[u8]) -> Result<Vec<PageImage>, PageRenderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PageRenderError {
    #[error("invalid pdf: {0}")]
    InvalidPdf(String),
    #[error("page render failed: {0}")]
    RenderFailed(String),
}
