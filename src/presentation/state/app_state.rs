use std::sync::Arc;

use crate::application::services::InvoiceProcessingService;

#[derive(Clone)]
pub struct AppState {
    pub processing_service: Arc<InvoiceProcessingService>,
}
