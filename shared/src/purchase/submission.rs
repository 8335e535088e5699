//! Purchase-order form submission
//!
//! The server binds repeated form keys as lists, so each row contributes
//! one value to each of five keys and index `i` of every list describes
//! row `i`.

use super::line_item::LineItem;

pub const PRODUCT_IDS: &str = "productIds";
pub const QUANTITIES: &str = "quantities";
pub const PURCHASE_PRICES: &str = "purchasePrices";
pub const SELLING_PRICES: &str = "sellingPrices";
pub const VAT_AMOUNTS: &str = "vatAmounts";

/// Keys owned by the flattened line items
pub const LINE_ITEM_KEYS: [&str; 5] = [
    PRODUCT_IDS,
    QUANTITIES,
    PURCHASE_PRICES,
    SELLING_PRICES,
    VAT_AMOUNTS,
];

/// Line items flattened into five index-aligned value lists
///
/// Values are the field text as entered; a row without a product
/// contributes an empty product id. `vat_amounts` carries each row's
/// VAT percentage, under the key the server expects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineItemFields {
    pub product_ids: Vec<String>,
    pub quantities: Vec<String>,
    pub purchase_prices: Vec<String>,
    pub selling_prices: Vec<String>,
    pub vat_amounts: Vec<String>,
}

impl LineItemFields {
    /// Flatten rows in order
    pub fn from_items<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a LineItem>,
    {
        let mut fields = Self::default();
        for item in items {
            fields
                .product_ids
                .push(item.product_id.map(|id| id.to_string()).unwrap_or_default());
            fields.quantities.push(item.quantity.raw().to_string());
            fields.purchase_prices.push(item.purchase_price.raw().to_string());
            fields.selling_prices.push(item.selling_price.raw().to_string());
            fields.vat_amounts.push(item.vat_percent.raw().to_string());
        }
        fields
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.product_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.product_ids.is_empty()
    }

    /// Name/value pairs, row by row
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::with_capacity(self.len() * LINE_ITEM_KEYS.len());
        for i in 0..self.len() {
            pairs.push((PRODUCT_IDS, self.product_ids[i].as_str()));
            pairs.push((QUANTITIES, self.quantities[i].as_str()));
            pairs.push((PURCHASE_PRICES, self.purchase_prices[i].as_str()));
            pairs.push((SELLING_PRICES, self.selling_prices[i].as_str()));
            pairs.push((VAT_AMOUNTS, self.vat_amounts[i].as_str()));
        }
        pairs
    }
}

/// Outgoing purchase-order form body as ordered name/value pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurchaseOrderSubmission {
    fields: Vec<(String, String)>,
}

impl PurchaseOrderSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a single-valued field, replacing any earlier value
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.fields.retain(|(n, _)| *n != name);
        self.fields.push((name, value.into()));
    }

    /// Replace the flattened line items.
    ///
    /// Previously attached line-item values are removed first, so
    /// attaching again never duplicates entries.
    pub fn attach_line_items(&mut self, items: &LineItemFields) {
        self.detach_line_items();
        self.fields.extend(
            items
                .pairs()
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string())),
        );
    }

    /// Remove every line-item value
    pub fn detach_line_items(&mut self) {
        self.fields
            .retain(|(name, _)| !LINE_ITEM_KEYS.contains(&name.as_str()));
    }

    /// All pairs in submission order
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Every value submitted under `name`, in order
    pub fn values(&self, name: &str) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }
}
