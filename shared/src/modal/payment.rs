//! Receive-payment modal

use crate::error::{OrderError, OrderResult};
use crate::models::{OrderId, PaymentRequest};
use crate::money::{format_money, parse_or_zero, round_money, sub_or_zero};
use crate::purchase::FieldInput;
use rust_decimal::Decimal;
use serde::Serialize;

/// Message shown when the server rejects or never answers a payment
pub const PAYMENT_FAILED_MESSAGE: &str = "Error processing payment";

/// Submit control state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SubmitState {
    /// Editable, confirm enabled
    #[default]
    Idle,
    /// Request in flight, confirm disabled
    Submitting,
    /// Server accepted; the page reloads
    Completed,
}

/// Render-ready payment modal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentModalView {
    pub order_id: OrderId,
    pub invoice_number: String,
    pub grand_total: String,
    pub current_due: String,
    pub remaining_due: String,
    pub submit_enabled: bool,
    pub error: Option<String>,
}

/// Payment dialog for one order
#[derive(Debug, Clone)]
pub struct PaymentModal {
    order_id: OrderId,
    invoice_number: String,
    grand_total: Decimal,
    current_due: Decimal,
    amount: FieldInput,
    payment_method: Option<String>,
    account_name: Option<String>,
    state: SubmitState,
    error: Option<String>,
}

impl PaymentModal {
    /// Open for an order. Grand total and due come from the order list
    /// as text; unparsable values read as 0.
    pub fn open(order_id: OrderId, invoice_number: impl Into<String>, grand_total: &str, amount_due: &str) -> Self {
        Self {
            order_id,
            invoice_number: invoice_number.into(),
            grand_total: round_money(parse_or_zero(grand_total)),
            current_due: round_money(parse_or_zero(amount_due)),
            amount: FieldInput::default(),
            payment_method: None,
            account_name: None,
            state: SubmitState::Idle,
            error: None,
        }
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_amount(&mut self, raw: &str) {
        self.amount = FieldInput::new(raw);
    }

    pub fn set_payment_method(&mut self, method: Option<String>) {
        self.payment_method = method;
    }

    pub fn set_account_name(&mut self, account: Option<String>) {
        self.account_name = account;
    }

    /// Due after the typed amount, never shown below 0
    pub fn remaining_due(&self) -> Decimal {
        round_money(sub_or_zero(self.current_due, self.amount.value()).max(Decimal::ZERO))
    }

    pub fn view(&self) -> PaymentModalView {
        PaymentModalView {
            order_id: self.order_id,
            invoice_number: self.invoice_number.clone(),
            grand_total: format_money(self.grand_total),
            current_due: format_money(self.current_due),
            remaining_due: format_money(self.remaining_due()),
            submit_enabled: self.state == SubmitState::Idle,
            error: self.error.clone(),
        }
    }

    /// Validate the amount and disable the confirm control.
    ///
    /// Invalid amounts leave the modal editable and build no request. Once
    /// a payment is accepted the modal refuses further submits.
    pub fn begin_submit(&mut self) -> OrderResult<PaymentRequest> {
        match self.state {
            SubmitState::Idle => {}
            SubmitState::Submitting => return Err(OrderError::PaymentPending),
            SubmitState::Completed => return Err(OrderError::PaymentCompleted),
        }

        let mut request = match PaymentRequest::new(self.order_id, self.amount.raw()) {
            Ok(request) => request,
            Err(e) => {
                self.error = Some(e.to_string());
                return Err(e);
            }
        };
        if let Some(method) = &self.payment_method {
            request = request.with_payment_method(method.clone());
        }
        if let Some(account) = &self.account_name {
            request = request.with_account_name(account.clone());
        }

        self.state = SubmitState::Submitting;
        self.error = None;
        Ok(request)
    }

    /// Server accepted the payment. Returns the confirmation message.
    pub fn complete(&mut self, request: &PaymentRequest) -> String {
        self.state = SubmitState::Completed;
        format!("Payment of {} received!", format_money(request.amount_paid))
    }

    /// Server rejected or was unreachable: re-enable and show the error
    pub fn fail(&mut self) {
        self.state = SubmitState::Idle;
        self.error = Some(PAYMENT_FAILED_MESSAGE.to_string());
    }
}
