use async_trait::async_trait;
use image::ImageFormat;
use pdfium_render::prelude::*;

use crate::application::ports::{PageImage, PageRenderError, PageRenderer};

/// Renders every page of a PDF to a PNG buffer via the system pdfium
/// library. Rasterization is CPU-bound, so each call binds pdfium on the
/// blocking pool and a panic there is reported as a render failure instead
/// of taking the worker down.
pub struct PdfiumRenderer {
    dpi: f32,
}

impl PdfiumRenderer {
    pub fn new(dpi: f32) -> Self {
        Self { dpi }
    }
}

#[async_trait]
impl PageRenderer for PdfiumRenderer {
    async fn render_pages(&self, data: &[u8]) -> Result<Vec<PageImage>, PageRenderError> {
        let data = data.to_vec();
        let dpi = self.dpi;

        tokio::task::spawn_blocking(move || {
            std::panic::catch_unwind(|| rasterize_pages(&data, dpi)).unwrap_or_else(|_| {
                Err(PageRenderError::RenderFailed(
                    "panic during PDF rasterization".to_string(),
                ))
            })
        })
        .await
        .map_err(|e| PageRenderError::RenderFailed(format!("task join error: {e}")))?
    }
}

fn rasterize_pages(data: &[u8], dpi: f32) -> Result<Vec<PageImage>, PageRenderError> {
    let pdfium = Pdfium::new(
        Pdfium::bind_to_system_library()
            .map_err(|e| PageRenderError::RenderFailed(format!("pdfium bind failed: {e}")))?,
    );

    let doc = pdfium
        .load_pdf_from_byte_slice(data, None)
        .map_err(|e| PageRenderError::InvalidPdf(format!("pdfium open failed: {e}")))?;

    let page_count = doc.pages().len() as usize;
    let mut pages: Vec<PageImage> = Vec::with_capacity(page_count);

    for index in 0..page_count {
        let page = doc.pages().get(index as u16).map_err(|e| {
            PageRenderError::RenderFailed(format!("page {index} access failed: {e}"))
        })?;

        let width = (page.width().value * dpi / 72.0) as i32;
        let height = (page.height().value * dpi / 72.0) as i32;

        let bitmap = page
            .render_with_config(
                &PdfRenderConfig::new()
                    .set_target_width(width)
                    .set_target_height(height),
            )
            .map_err(|e| {
                PageRenderError::RenderFailed(format!("render page {index} failed: {e}"))
            })?;

        let mut png_bytes: Vec<u8> = Vec::new();
        bitmap
            .as_image()
            .write_to(&mut std::io::Cursor::new(&mut png_bytes), ImageFormat::Png)
            .map_err(|e| {
                PageRenderError::RenderFailed(format!("PNG encode page {index} failed: {e}"))
            })?;

        pages.push(PageImage::new(png_bytes));
    }

    Ok(pages)
}
