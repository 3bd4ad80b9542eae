mod amount;
mod extraction_service;
mod field_parser;
mod field_validator;
mod processing_service;
mod risk_scorer;

pub use extraction_service::{ExtractionError, TextExtractionService};
pub use field_parser::parse_fields;
pub use field_validator::validate_fields;
pub use processing_service::{InvoiceProcessingService, ProcessedInvoice};
pub use risk_scorer::assess_risk;
