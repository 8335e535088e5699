//! User-triggered flows
//!
//! Each flow validates locally, calls the server once and reports what
//! the page should do next. Failures leave the local state editable;
//! nothing is retried.

use crate::{ClientError, ClientResult, PosBackend};
use shared::{
    CustomerForm, FetchTicket, OrderDetails, OrderDetailsModal, OrderDetailsView, OrderId, PaymentModal,
    PaymentReceipt, PurchaseOrderForm, PurchaseOrderSubmission,
};

/// Where the page goes after a customer is saved
pub const POS_HOME_PATH: &str = "/pos";

/// Accepted payment. The page reloads to show the server's figures.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentOutcome {
    /// Confirmation shown before reloading
    pub message: String,
    /// Server echo, informational only
    pub receipt: PaymentReceipt,
}

/// Saved customer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerSaved {
    /// Path to navigate to
    pub redirect_to: String,
}

/// Submit the payment typed into the modal.
///
/// Invalid amounts fail with `ClientError::Order` before any request. On
/// a server failure the modal is re-enabled with an error shown.
pub async fn submit_payment<B>(backend: &B, modal: &mut PaymentModal) -> ClientResult<PaymentOutcome>
where
    B: PosBackend + ?Sized,
{
    let request = modal.begin_submit()?;

    match backend.receive_payment(&request).await {
        Ok(receipt) => {
            let message = modal.complete(&request);
            Ok(PaymentOutcome { message, receipt })
        }
        Err(e) => {
            tracing::error!(order_id = request.order_id, error = %e, "Payment failed");
            modal.fail();
            Err(e)
        }
    }
}

/// Fetch the details for a modal ticket.
///
/// Returns the ticket with the response so the caller can hand both to
/// [`OrderDetailsModal::accept`], which drops stale responses.
pub async fn fetch_order_details<B>(backend: &B, ticket: FetchTicket) -> ClientResult<(FetchTicket, OrderDetails)>
where
    B: PosBackend + ?Sized,
{
    let details = backend.fetch_order_details(ticket.order_id()).await?;
    Ok((ticket, details))
}

/// Open the modal for an order, fetch and render
pub async fn show_order_details<B>(
    backend: &B,
    modal: &mut OrderDetailsModal,
    order_id: OrderId,
) -> ClientResult<Option<OrderDetailsView>>
where
    B: PosBackend + ?Sized,
{
    let ticket = modal.open(order_id);
    let (ticket, details) = fetch_order_details(backend, ticket).await?;
    Ok(modal.accept(ticket, &details).cloned())
}

/// Validate and post the customer form
pub async fn save_customer<B>(backend: &B, action: &str, form: &CustomerForm) -> ClientResult<CustomerSaved>
where
    B: PosBackend + ?Sized,
{
    form.validate()?;
    backend.create_customer(action, form).await?;
    Ok(CustomerSaved {
        redirect_to: POS_HOME_PATH.to_string(),
    })
}

/// Alert text for a failed customer save
pub fn customer_error_message(error: &ClientError) -> String {
    match error {
        ClientError::Rejected { body, .. } => format!("Error saving customer: {}", body),
        ClientError::Order(e) => e.to_string(),
        _ => "Error saving customer. See console.".to_string(),
    }
}

/// Validate the form, refresh `submission` with the current rows and post it.
///
/// Reusing the same `submission` across attempts never duplicates line
/// items.
pub async fn submit_purchase_order<B>(
    backend: &B,
    form: &PurchaseOrderForm,
    submission: &mut PurchaseOrderSubmission,
) -> ClientResult<()>
where
    B: PosBackend + ?Sized,
{
    form.validate_for_submit()?;
    form.fill_submission(submission);
    backend.submit_purchase_order(submission).await
}
