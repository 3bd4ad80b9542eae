mod pdfium_renderer;

pub use pdfium_renderer::PdfiumRenderer;
