//! POS Client - HTTP client for the Salesync server
//!
//! Provides network calls to the order, payment, customer and
//! purchase-order endpoints, and the flows that drive the form and
//! modal state from `shared` through them.

pub mod backend;
pub mod config;
pub mod error;
pub mod flows;
pub mod http;

pub use backend::PosBackend;
pub use config::{ClientConfig, EndpointPaths};
pub use error::{ClientError, ClientResult};
pub use flows::{CustomerSaved, PaymentOutcome};
pub use http::HttpClient;
