//! Order-details modal
//!
//! Fetches are not cancelled when the modal is reopened for another
//! order. Each open hands out a ticket; a response is rendered only if
//! its ticket is still the current one.

use crate::models::{OrderDetails, OrderDetailsView, OrderId};

/// Identifies one open of the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    order_id: OrderId,
    generation: u64,
}

impl FetchTicket {
    pub fn order_id(&self) -> OrderId {
        self.order_id
    }
}

/// Order-details dialog
#[derive(Debug, Clone, Default)]
pub struct OrderDetailsModal {
    current: Option<FetchTicket>,
    generation: u64,
    view: Option<OrderDetailsView>,
}

impl OrderDetailsModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the modal and target it at `order_id`
    pub fn open(&mut self, order_id: OrderId) -> FetchTicket {
        self.generation += 1;
        let ticket = FetchTicket {
            order_id,
            generation: self.generation,
        };
        self.current = Some(ticket);
        self.view = None;
        ticket
    }

    /// Render a fetched response if `ticket` is still current.
    ///
    /// Returns `None` for stale responses, which leave the modal untouched.
    pub fn accept(&mut self, ticket: FetchTicket, details: &OrderDetails) -> Option<&OrderDetailsView> {
        if self.current != Some(ticket) {
            tracing::debug!(
                order_id = ticket.order_id,
                "Discarding stale order details response"
            );
            return None;
        }
        self.view = Some(OrderDetailsView::from_details(details));
        self.view.as_ref()
    }

    pub fn close(&mut self) {
        self.current = None;
        self.view = None;
    }

    /// Order the modal currently shows or waits for
    pub fn target(&self) -> Option<OrderId> {
        self.current.map(|t| t.order_id)
    }

    pub fn view(&self) -> Option<&OrderDetailsView> {
        self.view.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderDetailItem;
    use rust_decimal_macros::dec;

    fn make_details(invoice: &str) -> OrderDetails {
        OrderDetails {
            invoice_number: Some(invoice.to_string()),
            items: vec![OrderDetailItem {
                product_name: "Tea".to_string(),
                quantity: dec!(2),
                price: dec!(15),
            }],
            ..OrderDetails::default()
        }
    }

    #[test]
    fn test_current_response_renders() {
        let mut modal = OrderDetailsModal::new();
        let ticket = modal.open(1);

        let view = modal.accept(ticket, &make_details("INV-1")).unwrap();
        assert_eq!(view.invoice_number, "INV-1");
        assert_eq!(view.total, "30.00");
        assert_eq!(modal.target(), Some(1));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut modal = OrderDetailsModal::new();
        let first = modal.open(1);
        let second = modal.open(2);

        assert!(modal.accept(first, &make_details("INV-1")).is_none());
        assert!(modal.view().is_none());

        modal.accept(second, &make_details("INV-2")).unwrap();
        assert!(modal.accept(first, &make_details("INV-1")).is_none());
        assert_eq!(modal.view().unwrap().invoice_number, "INV-2");
    }

    #[test]
    fn test_reopening_same_order_invalidates_old_ticket() {
        let mut modal = OrderDetailsModal::new();
        let first = modal.open(5);
        let second = modal.open(5);

        assert_ne!(first, second);
        assert!(modal.accept(first, &make_details("old")).is_none());
        assert!(modal.accept(second, &make_details("new")).is_some());
    }

    #[test]
    fn test_closed_modal_ignores_responses() {
        let mut modal = OrderDetailsModal::new();
        let ticket = modal.open(3);
        modal.close();

        assert!(modal.accept(ticket, &make_details("INV-3")).is_none());
        assert_eq!(modal.target(), None);
    }
}
