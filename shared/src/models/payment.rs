//! Payment Model

use super::OrderId;
use crate::error::{OrderError, OrderResult};
use crate::money::parse_number;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Validated payment for `POST /pos/receivePayment`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequest {
    pub order_id: OrderId,
    pub amount_paid: Decimal,
    /// CASH, MFS, BANK
    pub payment_method: Option<String>,
    /// Financial account receiving the money (e.g. "Cash at Hand")
    pub account_name: Option<String>,
}

impl PaymentRequest {
    /// Validate the amount typed by the user.
    ///
    /// Empty, unparsable, zero and negative amounts are rejected and no
    /// request is built.
    pub fn new(order_id: OrderId, raw_amount: &str) -> OrderResult<Self> {
        match parse_number(raw_amount) {
            Some(amount) if amount > Decimal::ZERO => Ok(Self {
                order_id,
                amount_paid: amount,
                payment_method: None,
                account_name: None,
            }),
            _ => Err(OrderError::InvalidPaymentAmount),
        }
    }

    pub fn with_payment_method(mut self, method: impl Into<String>) -> Self {
        self.payment_method = Some(method.into());
        self
    }

    pub fn with_account_name(mut self, account: impl Into<String>) -> Self {
        self.account_name = Some(account.into());
        self
    }

    /// Form-encoded body fields
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("orderId", self.order_id.to_string()),
            ("amountPaid", self.amount_paid.normalize().to_string()),
        ];
        if let Some(method) = &self.payment_method {
            fields.push(("paymentMethod", method.clone()));
        }
        if let Some(account) = &self.account_name {
            fields.push(("finAccName", account.clone()));
        }
        fields
    }
}

/// Server echo after a payment is recorded
///
/// Informational only; the page reloads to show the authoritative state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentReceipt {
    pub amount_paid: Option<Decimal>,
    pub amount_due: Option<Decimal>,
}
