use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use invoice_engine::application::services::{InvoiceProcessingService, TextExtractionService};
use invoice_engine::infrastructure::observability::{TracingConfig, init_tracing};
use invoice_engine::infrastructure::ocr::OcrEngineFactory;
use invoice_engine::infrastructure::pdf::PdfiumRenderer;
use invoice_engine::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    init_tracing(TracingConfig::default(), settings.server.port);

    let ocr_engine = OcrEngineFactory::create(&settings.ocr)?;
    let renderer = Arc::new(PdfiumRenderer::new(settings.extraction.render_dpi));

    let extraction_service =
        TextExtractionService::new(renderer, ocr_engine, settings.extraction.timeout);
    let processing_service = Arc::new(InvoiceProcessingService::new(extraction_service));

    let state = AppState { processing_service };
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
