//! Data models
//!
//! Reference data and request/response shapes exchanged with the
//! POS server. Wire names follow the server's camelCase JSON and form
//! field names.

pub mod customer;
pub mod order_details;
pub mod payment;
pub mod product;

// Re-exports
pub use customer::*;
pub use order_details::*;
pub use payment::*;
pub use product::*;

/// Server-side order identifier
pub type OrderId = i64;
