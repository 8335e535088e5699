//! Purchase Order Module
//!
//! Line-item registry and totals for the purchase-order form:
//! - `line_item`: per-row field values and identity
//! - `calculator`: row figures and order totals, recomputed from scratch
//! - `form`: the row registry driving edits and rendering
//! - `submission`: flattening rows into the server's form fields

mod calculator;
mod form;
mod line_item;
mod submission;

pub use calculator::*;
pub use form::*;
pub use line_item::*;
pub use submission::*;
