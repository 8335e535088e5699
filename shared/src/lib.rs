//! Shared types for the Salesync POS client layer
//!
//! Domain state and pure logic used by the HTTP client crate:
//! product catalog, purchase-order line items and totals, form
//! submission flattening, payment validation and modal view models.

pub mod error;
pub mod modal;
pub mod models;
pub mod money;
pub mod purchase;

// Re-exports
pub use error::{OrderError, OrderResult};
pub use modal::{FetchTicket, OrderDetailsModal, PaymentModal, SubmitState};
pub use models::{
    Catalog, CustomerForm, CustomerId, CustomerOption, CustomerOptions, OrderDetails, OrderDetailsView,
    OrderId, PaymentReceipt, PaymentRequest, Product, ProductId,
};
pub use purchase::{
    FormView, LineItem, LineItemFields, OrderTotals, PurchaseOrderForm, PurchaseOrderSubmission,
    RowField, RowId, RowView,
};
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};
