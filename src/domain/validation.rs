use serde::Serialize;

/// Outcome of the field validation pass. `is_valid` holds exactly when
/// `errors` is empty; warnings never affect validity. Entries appear in the
/// fixed check order of the validator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}
