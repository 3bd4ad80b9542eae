/// Parses a captured amount string as a decimal number. Commas are treated
/// as thousands separators and stripped before parsing; anything that is not
/// a plain decimal after that is rejected.
pub(crate) fn parse_decimal(raw: &str) -> Option<f64> {
    raw.replace(',', "").parse::<f64>().ok()
}
