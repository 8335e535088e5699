//! Line items and their editable fields

use crate::models::ProductId;
use crate::money::parse_or_zero;
use rust_decimal::Decimal;
use std::fmt;

/// Identity of a row within one form; never reused after removal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u64);

impl RowId {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Editable numeric fields of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    Quantity,
    PurchasePrice,
    SellingPrice,
    VatPercent,
}

/// Text as typed plus the number read from it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldInput {
    raw: String,
    value: Decimal,
}

impl FieldInput {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let value = parse_or_zero(&raw);
        Self { raw, value }
    }

    /// Text as entered, submitted verbatim
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Parsed value; empty or unparsable text reads as 0
    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }
}

/// One purchase-order row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub product_id: Option<ProductId>,
    pub quantity: FieldInput,
    pub purchase_price: FieldInput,
    pub selling_price: FieldInput,
    pub vat_percent: FieldInput,
}

impl Default for LineItem {
    /// Fresh row: no product, quantity 1, prices unset, no VAT
    fn default() -> Self {
        Self {
            product_id: None,
            quantity: FieldInput::new("1"),
            purchase_price: FieldInput::default(),
            selling_price: FieldInput::default(),
            vat_percent: FieldInput::new("0"),
        }
    }
}

impl LineItem {
    pub fn field(&self, field: RowField) -> &FieldInput {
        match field {
            RowField::Quantity => &self.quantity,
            RowField::PurchasePrice => &self.purchase_price,
            RowField::SellingPrice => &self.selling_price,
            RowField::VatPercent => &self.vat_percent,
        }
    }

    pub fn set_field(&mut self, field: RowField, raw: impl Into<String>) {
        let input = FieldInput::new(raw);
        match field {
            RowField::Quantity => self.quantity = input,
            RowField::PurchasePrice => self.purchase_price = input,
            RowField::SellingPrice => self.selling_price = input,
            RowField::VatPercent => self.vat_percent = input,
        }
    }
}
