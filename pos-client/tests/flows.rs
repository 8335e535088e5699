// pos-client/tests/flows.rs
// Flows against an in-memory backend

use async_trait::async_trait;
use pos_client::flows::{
    POS_HOME_PATH, customer_error_message, fetch_order_details, save_customer, show_order_details,
    submit_payment, submit_purchase_order,
};
use pos_client::{ClientError, ClientResult, PosBackend};
use rust_decimal_macros::dec;
use shared::purchase::{PRODUCT_IDS, QUANTITIES};
use shared::{
    Catalog, CustomerForm, OrderDetails, OrderDetailsModal, OrderError, OrderId, PaymentModal, PaymentReceipt,
    PaymentRequest, Product, PurchaseOrderForm, PurchaseOrderSubmission, RowField, SubmitState,
};
use std::sync::Mutex;

/// Records every call; fails on demand
#[derive(Default)]
struct FakeBackend {
    fail: bool,
    payments: Mutex<Vec<PaymentRequest>>,
    customers: Mutex<Vec<String>>,
    submissions: Mutex<Vec<PurchaseOrderSubmission>>,
}

impl FakeBackend {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl PosBackend for FakeBackend {
    async fn fetch_order_details(&self, order_id: OrderId) -> ClientResult<OrderDetails> {
        Ok(OrderDetails {
            invoice_number: Some(format!("INV-{order_id}")),
            ..OrderDetails::default()
        })
    }

    async fn receive_payment(&self, request: &PaymentRequest) -> ClientResult<PaymentReceipt> {
        self.payments.lock().unwrap().push(request.clone());
        if self.fail {
            return Err(ClientError::Internal("database down".to_string()));
        }
        Ok(PaymentReceipt {
            amount_paid: Some(request.amount_paid),
            amount_due: Some(dec!(0)),
        })
    }

    async fn create_customer(&self, _action: &str, form: &CustomerForm) -> ClientResult<()> {
        self.customers.lock().unwrap().push(form.name.clone());
        if self.fail {
            return Err(ClientError::Rejected {
                status: 400,
                body: "Email already exists".to_string(),
            });
        }
        Ok(())
    }

    async fn submit_purchase_order(&self, submission: &PurchaseOrderSubmission) -> ClientResult<()> {
        self.submissions.lock().unwrap().push(submission.clone());
        if self.fail {
            return Err(ClientError::Validation("Invalid prices".to_string()));
        }
        Ok(())
    }
}

// ========== Payment ==========

#[tokio::test]
async fn test_zero_payment_sends_no_request() {
    let backend = FakeBackend::default();
    let mut modal = PaymentModal::open(4, "INV-4", "50", "50");
    modal.set_amount("0");

    let err = submit_payment(&backend, &mut modal).await.unwrap_err();

    assert!(matches!(err, ClientError::Order(OrderError::InvalidPaymentAmount)));
    assert!(backend.payments.lock().unwrap().is_empty());
    assert_eq!(modal.state(), SubmitState::Idle);
}

#[tokio::test]
async fn test_payment_success_completes_modal() {
    let backend = FakeBackend::default();
    let mut modal = PaymentModal::open(4, "INV-4", "50", "50");
    modal.set_amount("20");

    let outcome = submit_payment(&backend, &mut modal).await.unwrap();

    assert_eq!(outcome.message, "Payment of 20.00 received!");
    assert_eq!(outcome.receipt.amount_paid, Some(dec!(20)));
    assert_eq!(modal.state(), SubmitState::Completed);

    let payments = backend.payments.lock().unwrap();
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].order_id, 4);
}

#[tokio::test]
async fn test_payment_failure_reenables_modal() {
    let backend = FakeBackend::failing();
    let mut modal = PaymentModal::open(4, "INV-4", "50", "50");
    modal.set_amount("20");

    let err = submit_payment(&backend, &mut modal).await.unwrap_err();

    assert!(matches!(err, ClientError::Internal(_)));
    assert_eq!(modal.state(), SubmitState::Idle);
    assert!(modal.view().submit_enabled);
    assert_eq!(modal.error(), Some("Error processing payment"));
    // Exactly one attempt, no automatic retry
    assert_eq!(backend.payments.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_completed_payment_is_not_sent_twice() {
    let backend = FakeBackend::default();
    let mut modal = PaymentModal::open(9, "INV-9", "120", "45.5");
    modal.set_amount("10");

    submit_payment(&backend, &mut modal).await.unwrap();
    let err = submit_payment(&backend, &mut modal).await.unwrap_err();

    assert!(matches!(err, ClientError::Order(OrderError::PaymentCompleted)));
    assert_eq!(modal.state(), SubmitState::Completed);
    assert_eq!(backend.payments.lock().unwrap().len(), 1);
}

// ========== Order Details ==========

#[tokio::test]
async fn test_show_order_details() {
    let backend = FakeBackend::default();
    let mut modal = OrderDetailsModal::new();

    let view = show_order_details(&backend, &mut modal, 12).await.unwrap().unwrap();
    assert_eq!(view.invoice_number, "INV-12");
    assert_eq!(view.total, "0.00");
}

#[tokio::test]
async fn test_late_response_for_previous_order_is_dropped() {
    let backend = FakeBackend::default();
    let mut modal = OrderDetailsModal::new();

    let first = modal.open(1);
    let second = modal.open(2);
    let (first, first_details) = fetch_order_details(&backend, first).await.unwrap();
    let (second, second_details) = fetch_order_details(&backend, second).await.unwrap();

    // Second response arrives first, then the stale one
    assert!(modal.accept(second, &second_details).is_some());
    assert!(modal.accept(first, &first_details).is_none());
    assert_eq!(modal.view().unwrap().invoice_number, "INV-2");
}

// ========== Customers ==========

#[tokio::test]
async fn test_save_customer_navigates_home() {
    let backend = FakeBackend::default();
    let form = CustomerForm::new("Rahim", "01711000000", "rahim@example.com", "Dhaka");

    let saved = save_customer(&backend, "/customers/save", &form).await.unwrap();
    assert_eq!(saved.redirect_to, POS_HOME_PATH);
}

#[tokio::test]
async fn test_invalid_customer_is_not_posted() {
    let backend = FakeBackend::default();
    let form = CustomerForm::new("Rahim", "", "rahim@example.com", "Dhaka");

    let err = save_customer(&backend, "/customers/save", &form).await.unwrap_err();

    assert!(matches!(err, ClientError::Order(OrderError::MissingCustomerField("phoneNumber"))));
    assert!(backend.customers.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_rejected_customer_message() {
    let backend = FakeBackend::failing();
    let form = CustomerForm::new("Rahim", "01711000000", "rahim@example.com", "Dhaka");

    let err = save_customer(&backend, "/customers/save", &form).await.unwrap_err();
    assert_eq!(customer_error_message(&err), "Error saving customer: Email already exists");
    assert_eq!(
        customer_error_message(&ClientError::Internal("connection reset".to_string())),
        "Error saving customer. See console."
    );
}

// ========== Purchase Orders ==========

fn make_form() -> PurchaseOrderForm {
    let mut form = PurchaseOrderForm::with_catalog(Catalog::new(vec![
        Product::new(1, "Rice 5kg", 12),
        Product::new(2, "Soybean Oil 1L", 30),
    ]));
    let first = form.row_ids()[0];
    let second = form.add_row().unwrap();
    form.select_product(first, Some(1)).unwrap();
    form.select_product(second, Some(2)).unwrap();
    form.update_field(first, RowField::PurchasePrice, "100").unwrap();
    form.update_field(second, RowField::Quantity, "4").unwrap();
    form.update_field(second, RowField::PurchasePrice, "150").unwrap();
    form
}

#[tokio::test]
async fn test_purchase_order_retry_does_not_duplicate_items() {
    let backend = FakeBackend::failing();
    let form = make_form();
    let mut submission = PurchaseOrderSubmission::new();
    submission.set_field("supplier", "3");

    assert!(submit_purchase_order(&backend, &form, &mut submission).await.is_err());
    assert!(submit_purchase_order(&backend, &form, &mut submission).await.is_err());

    let submissions = backend.submissions.lock().unwrap();
    assert_eq!(submissions.len(), 2);
    let last = &submissions[1];
    assert_eq!(last.values(PRODUCT_IDS), vec!["1", "2"]);
    assert_eq!(last.values(QUANTITIES), vec!["1", "4"]);
    assert_eq!(last.values("supplier"), vec!["3"]);
}

#[tokio::test]
async fn test_purchase_order_without_product_is_not_posted() {
    let backend = FakeBackend::default();
    let mut form = make_form();
    form.add_row().unwrap();
    let mut submission = PurchaseOrderSubmission::new();

    let err = submit_purchase_order(&backend, &form, &mut submission).await.unwrap_err();

    assert!(matches!(err, ClientError::Order(OrderError::MissingProduct(_))));
    assert!(backend.submissions.lock().unwrap().is_empty());
}
