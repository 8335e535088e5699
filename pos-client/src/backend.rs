//! Server seam used by the flows

use crate::{ClientResult, HttpClient};
use async_trait::async_trait;
use shared::{CustomerForm, OrderDetails, OrderId, PaymentReceipt, PaymentRequest, PurchaseOrderSubmission};

/// Operations the POS server offers to this client
#[async_trait]
pub trait PosBackend: Send + Sync {
    /// Order header, customer and items for the details modal
    async fn fetch_order_details(&self, order_id: OrderId) -> ClientResult<OrderDetails>;

    /// Record a payment against an order
    async fn receive_payment(&self, request: &PaymentRequest) -> ClientResult<PaymentReceipt>;

    /// Create a customer by posting the customer form to `action`
    async fn create_customer(&self, action: &str, form: &CustomerForm) -> ClientResult<()>;

    /// Save a purchase order
    async fn submit_purchase_order(&self, submission: &PurchaseOrderSubmission) -> ClientResult<()>;
}

#[async_trait]
impl PosBackend for HttpClient {
    async fn fetch_order_details(&self, order_id: OrderId) -> ClientResult<OrderDetails> {
        HttpClient::fetch_order_details(self, order_id).await
    }

    async fn receive_payment(&self, request: &PaymentRequest) -> ClientResult<PaymentReceipt> {
        HttpClient::receive_payment(self, request).await
    }

    async fn create_customer(&self, action: &str, form: &CustomerForm) -> ClientResult<()> {
        HttpClient::create_customer(self, action, form).await
    }

    async fn submit_purchase_order(&self, submission: &PurchaseOrderSubmission) -> ClientResult<()> {
        HttpClient::submit_purchase_order(self, submission).await
    }
}
