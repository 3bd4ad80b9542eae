pub mod observability;
pub mod ocr;
pub mod pdf;
