//! User input errors
//!
//! Every variant carries the message shown to the user. The operation
//! that produced it is aborted without partial effect.

use crate::purchase::RowId;
use thiserror::Error;

/// Errors raised by local validation of user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The product catalog is empty, rows cannot be added
    #[error("No products available. Please add products first.")]
    EmptyCatalog,

    /// The referenced row is not (or no longer) part of the form
    #[error("Row {0} not found")]
    UnknownRow(RowId),

    /// Payment amount is missing, unparsable, zero or negative
    #[error("Please enter a valid amount")]
    InvalidPaymentAmount,

    /// A payment for this modal is already in flight
    #[error("Payment is already being processed")]
    PaymentPending,

    /// The modal's payment was accepted; it stays closed until reload
    #[error("Payment has already been received")]
    PaymentCompleted,

    /// Purchase order has no line items
    #[error("No products selected for purchase!")]
    NoLineItems,

    /// A line item has no product selected
    #[error("Please select a product for row {0}")]
    MissingProduct(RowId),

    /// A required customer field is blank
    #[error("Customer {0} is required")]
    MissingCustomerField(&'static str),
}

/// Result type for local validation
pub type OrderResult<T> = Result<T, OrderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            OrderError::EmptyCatalog.to_string(),
            "No products available. Please add products first."
        );
        assert_eq!(
            OrderError::InvalidPaymentAmount.to_string(),
            "Please enter a valid amount"
        );
        assert_eq!(
            OrderError::MissingCustomerField("email").to_string(),
            "Customer email is required"
        );
    }
}
