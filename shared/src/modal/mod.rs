//! Modal state
//!
//! State behind the order-details and receive-payment dialogs of the
//! orders page. Network calls live in the client crate; these types
//! only decide what is shown and what may be sent.

mod order_details;
mod payment;

pub use order_details::*;
pub use payment::*;
