mod document;
mod invoice;
mod risk;
mod validation;

pub use document::{Document, DocumentId, DocumentKind};
pub use invoice::{InvoiceField, InvoiceFields};
pub use risk::{RiskAssessment, RiskLevel};
pub use validation::ValidationReport;
