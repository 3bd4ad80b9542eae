use crate::domain::{InvoiceField, InvoiceFields, RiskAssessment};

use super::amount::parse_decimal;

const MISSING_CRITICAL_PENALTY: u32 = 30;
const HIGH_VALUE_PENALTY: u32 = 20;
const NON_POSITIVE_PENALTY: u32 = 50;
const UNPARSEABLE_AMOUNT_PENALTY: u32 = 40;
const HIGH_VALUE_THRESHOLD: f64 = 100_000.0;

/// Scores an invoice with additive heuristics over the parsed fields.
/// Completeness and amount checks fire independently, so a missing amount
/// contributes to the critical-fields penalty without also counting as an
/// amount problem.
pub fn assess_risk(fields: &InvoiceFields) -> RiskAssessment {
    let mut score = 0;
    let mut factors = Vec::new();

    let missing: Vec<&str> = InvoiceField::CRITICAL
        .iter()
        .copied()
        .filter(|field| fields.get(*field).is_none())
        .map(|field| field.as_str())
        .collect();
    if !missing.is_empty() {
        score += MISSING_CRITICAL_PENALTY;
        factors.push(format!("Missing critical fields: {}", missing.join(", ")));
    }

    if let Some(raw) = fields.get(InvoiceField::TotalAmount) {
        match parse_decimal(raw) {
            Some(amount) if amount > HIGH_VALUE_THRESHOLD => {
                score += HIGH_VALUE_PENALTY;
                factors.push("High value transaction (>$100,000)".to_string());
            }
            Some(amount) if amount <= 0.0 => {
                score += NON_POSITIVE_PENALTY;
                factors.push("Invalid amount".to_string());
            }
            Some(_) => {}
            None => {
                score += UNPARSEABLE_AMOUNT_PENALTY;
                factors.push("Invalid amount format".to_string());
            }
        }
    }

    RiskAssessment::new(score, factors)
}
