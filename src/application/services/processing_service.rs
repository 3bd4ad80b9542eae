use crate::domain::{Document, InvoiceFields, RiskAssessment, ValidationReport};

use super::extraction_service::{ExtractionError, TextExtractionService};
use super::field_parser::parse_fields;
use super::field_validator::validate_fields;
use super::risk_scorer::assess_risk;

/// Everything the pipeline produces for one invoice.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedInvoice {
    pub fields: InvoiceFields,
    pub validation: ValidationReport,
    pub risk: RiskAssessment,
}

/// Runs the full pipeline: extract text, parse fields, validate, score.
/// Only extraction can fail; an invoice where nothing parsed still yields a
/// (failing) validation report and a risk assessment.
pub struct InvoiceProcessingService {
    extractor: TextExtractionService,
}

impl InvoiceProcessingService {
    pub fn new(extractor: TextExtractionService) -> Self {
        Self { extractor }
    }

    #[tracing::instrument(
        skip(self, data),
        fields(document_id = %document.id.as_uuid(), filename = %document.filename)
    )]
    pub async fn process(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<ProcessedInvoice, ExtractionError> {
        let text = self.extractor.extract(data, document).await?;
        tracing::debug!(chars = text.len(), "Extracted text");

        let fields = parse_fields(&text);
        let validation = validate_fields(&fields);
        let risk = assess_risk(&fields);

        tracing::info!(
            is_valid = validation.is_valid,
            risk_score = risk.risk_score,
            risk_level = risk.risk_level.as_str(),
            "Processed invoice"
        );

        Ok(ProcessedInvoice {
            fields,
            validation,
            risk,
        })
    }
}
