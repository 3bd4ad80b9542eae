use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::domain::{InvoiceField, InvoiceFields};

/// Label-anchored capture patterns, one per field, in `InvoiceField::ALL`
/// order. Labels match case-insensitively; capture group 1 keeps the
/// original case. The patterns are evaluated independently against the full
/// text, so one field's label may overlap another's match.
static FIELD_PATTERNS: LazyLock<[(InvoiceField, Regex); 6]> = LazyLock::new(|| {
    [
        (
            InvoiceField::InvoiceNumber,
            label_pattern(r"(?:Invoice\s*(?:No|Number|#)?\s*[:]?\s*)([A-Z0-9\-]+)"),
        ),
        (
            InvoiceField::Date,
            label_pattern(r"(?:Date\s*[:]?\s*)(\d{1,2}[/\-]\d{1,2}[/\-]\d{2,4})"),
        ),
        (
            InvoiceField::DueDate,
            label_pattern(r"(?:Due\s*Date\s*[:]?\s*)(\d{1,2}[/\-]\d{1,2}[/\-]\d{2,4})"),
        ),
        (
            InvoiceField::TotalAmount,
            label_pattern(r"(?:Total\s*[:]?\s*)(?:USD|USDT|USDC)?\s*\$?\s*([\d,]+\.?\d*)"),
        ),
        (
            InvoiceField::BuyerName,
            label_pattern(r"(?:Bill\s*To|Customer|Buyer)[\s:]*([^\n]+)"),
        ),
        (
            InvoiceField::SellerName,
            label_pattern(r"(?:From|Seller|Vendor)[\s:]*([^\n]+)"),
        ),
    ]
});

fn label_pattern(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("field pattern is a valid regex")
}

/// Extracts the closed field set from OCR text. Pure and infallible: a field
/// whose pattern finds no match is simply absent. First match wins.
pub fn parse_fields(text: &str) -> InvoiceFields {
    let mut fields = InvoiceFields::default();

    for (field, pattern) in FIELD_PATTERNS.iter() {
        let value = pattern
            .captures(text)
            .and_then(|captures| captures.get(1))
            .map(|capture| capture.as_str().to_string());
        fields.set(*field, value);
    }

    fields
}
