use invoice_engine::application::services::validate_fields;
use invoice_engine::domain::InvoiceFields;

fn complete_fields() -> InvoiceFields {
    InvoiceFields {
        invoice_number: Some("INV-2024-001".to_string()),
        date: Some("01/15/2024".to_string()),
        due_date: Some("02/15/2024".to_string()),
        total_amount: Some("1,250.00".to_string()),
        buyer_name: Some("Acme Corp".to_string()),
        seller_name: Some("Vendor Inc".to_string()),
    }
}

#[test]
fn given_complete_fields_when_validating_then_report_is_clean() {
    let report = validate_fields(&complete_fields());

    assert!(report.is_valid);
    assert!(report.errors.is_empty());
    assert!(report.warnings.is_empty());
}

#[test]
fn given_no_fields_when_validating_then_reports_all_missing_in_order() {
    let report = validate_fields(&InvoiceFields::default());

    assert!(!report.is_valid);
    assert_eq!(
        report.errors,
        vec![
            "Missing invoice number",
            "Missing invoice date",
            "Missing total amount",
        ]
    );
    assert_eq!(
        report.warnings,
        vec!["Missing buyer name", "Missing seller name"]
    );
}

#[test]
fn given_lowercase_invoice_number_when_validating_then_warns_about_format() {
    let fields = InvoiceFields {
        invoice_number: Some("inv-77".to_string()),
        ..complete_fields()
    };

    let report = validate_fields(&fields);

    assert!(report.is_valid);
    assert_eq!(report.warnings, vec!["Invoice number format may be incorrect"]);
}

#[test]
fn given_invoice_number_with_spaces_when_validating_then_warns_about_format() {
    let fields = InvoiceFields {
        invoice_number: Some("INV 2024".to_string()),
        ..complete_fields()
    };

    let report = validate_fields(&fields);

    assert_eq!(report.warnings, vec!["Invoice number format may be incorrect"]);
}

#[test]
fn given_iso_date_when_validating_then_accepts_format() {
    let fields = InvoiceFields {
        date: Some("2024-01-15".to_string()),
        ..complete_fields()
    };

    let report = validate_fields(&fields);

    assert!(report.warnings.is_empty());
}

#[test]
fn given_dashed_date_when_validating_then_accepts_format() {
    let fields = InvoiceFields {
        date: Some("3-5-24".to_string()),
        ..complete_fields()
    };

    let report = validate_fields(&fields);

    assert!(report.warnings.is_empty());
}

#[test]
fn given_written_out_date_when_validating_then_warns_about_format() {
    let fields = InvoiceFields {
        date: Some("January 15, 2024".to_string()),
        ..complete_fields()
    };

    let report = validate_fields(&fields);

    assert!(report.is_valid);
    assert_eq!(report.warnings, vec!["Invoice date format may be incorrect"]);
}

#[test]
fn given_zero_total_when_validating_then_reports_non_positive_amount() {
    let fields = InvoiceFields {
        total_amount: Some("0".to_string()),
        ..complete_fields()
    };

    let report = validate_fields(&fields);

    assert!(!report.is_valid);
    assert_eq!(report.errors, vec!["Total amount must be greater than 0"]);
}

#[test]
fn given_negative_total_when_validating_then_reports_non_positive_amount() {
    let fields = InvoiceFields {
        total_amount: Some("-5".to_string()),
        ..complete_fields()
    };

    let report = validate_fields(&fields);

    assert_eq!(report.errors, vec!["Total amount must be greater than 0"]);
}

#[test]
fn given_unparseable_total_when_validating_then_reports_invalid_format() {
    let fields = InvoiceFields {
        total_amount: Some("abc".to_string()),
        ..complete_fields()
    };

    let report = validate_fields(&fields);

    assert!(!report.is_valid);
    assert_eq!(report.errors, vec!["Invalid total amount format"]);
}

#[test]
fn given_comma_separated_total_when_validating_then_parses_cleanly() {
    let fields = InvoiceFields {
        total_amount: Some("1,250,000.00".to_string()),
        ..complete_fields()
    };

    let report = validate_fields(&fields);

    assert!(report.errors.is_empty());
}

#[test]
fn given_missing_names_when_validating_then_only_warns() {
    let fields = InvoiceFields {
        buyer_name: None,
        seller_name: None,
        ..complete_fields()
    };

    let report = validate_fields(&fields);

    assert!(report.is_valid);
    assert_eq!(
        report.warnings,
        vec!["Missing buyer name", "Missing seller name"]
    );
}

#[test]
fn given_same_fields_when_validating_twice_then_reports_are_identical() {
    let fields = complete_fields();

    assert_eq!(validate_fields(&fields), validate_fields(&fields));
}
