//! Order details as returned by `GET /order/details/{id}`

use crate::money::{add_or_zero, format_money, mul_or_zero};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One sold item of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailItem {
    pub product_name: String,
    pub quantity: Decimal,
    pub price: Decimal,
}

/// Order header, customer and items
///
/// Walk-in orders carry empty or missing customer fields; missing
/// amounts read as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderDetails {
    pub invoice_number: Option<String>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_address: Option<String>,
    pub order_date: Option<String>,
    pub amount_paid: Option<Decimal>,
    pub amount_due: Option<Decimal>,
    pub items: Vec<OrderDetailItem>,
}

/// Rendered item row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderDetailRow {
    pub product_name: String,
    pub quantity: String,
    pub price: String,
    pub line_total: String,
}

/// Render-ready order details
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderDetailsView {
    pub invoice_number: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub order_date: String,
    pub rows: Vec<OrderDetailRow>,
    /// Running total of quantity x price over all rows
    pub total: String,
    pub amount_paid: String,
    pub amount_due: String,
}

impl OrderDetailsView {
    pub fn from_details(details: &OrderDetails) -> Self {
        let mut total = Decimal::ZERO;
        let rows = details
            .items
            .iter()
            .map(|item| {
                let line_total = mul_or_zero(item.quantity, item.price);
                total = add_or_zero(total, line_total);
                OrderDetailRow {
                    product_name: item.product_name.clone(),
                    quantity: item.quantity.normalize().to_string(),
                    price: format_money(item.price),
                    line_total: format_money(line_total),
                }
            })
            .collect();

        Self {
            invoice_number: details.invoice_number.clone().unwrap_or_default(),
            customer_name: details.customer_name.clone().unwrap_or_default(),
            customer_phone: details.customer_phone.clone().unwrap_or_default(),
            customer_address: details.customer_address.clone().unwrap_or_default(),
            order_date: details.order_date.clone().unwrap_or_default(),
            rows,
            total: format_money(total),
            amount_paid: format_money(details.amount_paid.unwrap_or_default()),
            amount_due: format_money(details.amount_due.unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "invoiceNumber": "INV-20250101-004",
        "customerName": "Walk-in Customer",
        "customerPhone": "",
        "customerAddress": "",
        "orderDate": "2025-01-01",
        "amountPaid": 50,
        "amountDue": 12.5,
        "items": [
            {"productName": "Tea", "quantity": 2, "price": 15.25},
            {"productName": "Biscuit", "quantity": 3, "price": 10}
        ]
    }"#;

    #[test]
    fn test_render_rows_and_running_total() {
        let details: OrderDetails = serde_json::from_str(SAMPLE).unwrap();
        let view = OrderDetailsView::from_details(&details);

        assert_eq!(view.invoice_number, "INV-20250101-004");
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].quantity, "2");
        assert_eq!(view.rows[0].price, "15.25");
        assert_eq!(view.rows[0].line_total, "30.50");
        assert_eq!(view.rows[1].line_total, "30.00");
        assert_eq!(view.total, "60.50");
        assert_eq!(view.amount_paid, "50.00");
        assert_eq!(view.amount_due, "12.50");
    }

    #[test]
    fn test_missing_fields_render_empty() {
        let details: OrderDetails =
            serde_json::from_str(r#"{"customerName": null, "amountPaid": null, "items": []}"#).unwrap();
        let view = OrderDetailsView::from_details(&details);

        assert_eq!(view.customer_name, "");
        assert_eq!(view.amount_paid, "0.00");
        assert_eq!(view.total, "0.00");
        assert!(view.rows.is_empty());
    }
}
