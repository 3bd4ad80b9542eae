use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{InvoiceField, InvoiceFields, ValidationReport};

use super::amount::parse_decimal;

/// Unlike the parser, format checks here are case-sensitive; a lowercase
/// invoice number parses fine but is flagged as suspicious.
static INVOICE_NUMBER_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9\-]+$").unwrap());

/// Accepted date shapes, matched from the start of the value.
static DATE_FORMATS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"^\d{1,2}/\d{1,2}/\d{2,4}").unwrap(),
        Regex::new(r"^\d{1,2}-\d{1,2}-\d{2,4}").unwrap(),
        Regex::new(r"^\d{4}-\d{1,2}-\d{1,2}").unwrap(),
    ]
});

/// Checks the parsed fields for completeness and plausibility. Errors make
/// the invoice invalid; warnings do not. Messages are produced in a fixed
/// order: invoice number, date, total amount, then the name warnings.
pub fn validate_fields(fields: &InvoiceFields) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    match fields.get(InvoiceField::InvoiceNumber) {
        None => errors.push("Missing invoice number".to_string()),
        Some(number) if !INVOICE_NUMBER_FORMAT.is_match(number) => {
            warnings.push("Invoice number format may be incorrect".to_string());
        }
        Some(_) => {}
    }

    match fields.get(InvoiceField::Date) {
        None => errors.push("Missing invoice date".to_string()),
        Some(date) if !is_known_date_format(date) => {
            warnings.push("Invoice date format may be incorrect".to_string());
        }
        Some(_) => {}
    }

    match fields.get(InvoiceField::TotalAmount) {
        None => errors.push("Missing total amount".to_string()),
        Some(raw) => match parse_decimal(raw) {
            Some(amount) if amount <= 0.0 => {
                errors.push("Total amount must be greater than 0".to_string());
            }
            Some(_) => {}
            None => errors.push("Invalid total amount format".to_string()),
        },
    }

    if fields.get(InvoiceField::BuyerName).is_none() {
        warnings.push("Missing buyer name".to_string());
    }
    if fields.get(InvoiceField::SellerName).is_none() {
        warnings.push("Missing seller name".to_string());
    }

    ValidationReport::new(errors, warnings)
}

fn is_known_date_format(date: &str) -> bool {
    DATE_FORMATS.iter().any(|format| format.is_match(date))
}
