use serde::Serialize;

/// The closed set of fields the parser knows how to extract. `ALL` is the
/// parse/report order; `CRITICAL` is the order risk factors list missing
/// fields in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvoiceField {
    InvoiceNumber,
    Date,
    DueDate,
    TotalAmount,
    BuyerName,
    SellerName,
}

impl InvoiceField {
    pub const ALL: [InvoiceField; 6] = [
        InvoiceField::InvoiceNumber,
        InvoiceField::Date,
        InvoiceField::DueDate,
        InvoiceField::TotalAmount,
        InvoiceField::BuyerName,
        InvoiceField::SellerName,
    ];

    pub const CRITICAL: [InvoiceField; 3] = [
        InvoiceField::InvoiceNumber,
        InvoiceField::TotalAmount,
        InvoiceField::Date,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceField::InvoiceNumber => "invoice_number",
            InvoiceField::Date => "date",
            InvoiceField::DueDate => "due_date",
            InvoiceField::TotalAmount => "total_amount",
            InvoiceField::BuyerName => "buyer_name",
            InvoiceField::SellerName => "seller_name",
        }
    }
}

/// Parsed invoice fields. Every field is always representable; `None` means
/// the pattern found no match, which is distinct from an empty capture.
/// Serializes with all six keys present (`null` when absent).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceFields {
    pub invoice_number: Option<String>,
    pub date: Option<String>,
    pub due_date: Option<String>,
    pub total_amount: Option<String>,
    pub buyer_name: Option<String>,
    pub seller_name: Option<String>,
}

impl InvoiceFields {
    pub fn get(&self, field: InvoiceField) -> Option<&str> {
        match field {
            InvoiceField::InvoiceNumber => self.invoice_number.as_deref(),
            InvoiceField::Date => self.date.as_deref(),
            InvoiceField::DueDate => self.due_date.as_deref(),
            InvoiceField::TotalAmount => self.total_amount.as_deref(),
            InvoiceField::BuyerName => self.buyer_name.as_deref(),
            InvoiceField::SellerName => self.seller_name.as_deref(),
        }
    }

    pub fn set(&mut self, field: InvoiceField, value: Option<String>) {
        let slot = match field {
            InvoiceField::InvoiceNumber => &mut self.invoice_number,
            InvoiceField::Date => &mut self.date,
            InvoiceField::DueDate => &mut self.due_date,
            InvoiceField::TotalAmount => &mut self.total_amount,
            InvoiceField::BuyerName => &mut self.buyer_name,
            InvoiceField::SellerName => &mut self.seller_name,
        };
        *slot = value;
    }
}
