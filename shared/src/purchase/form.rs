//! Purchase-order form state
//!
//! The row list is the single source of truth. Row figures and order
//! totals are derived from it on demand, never cached, so a display
//! built from [`PurchaseOrderForm::render`] always matches the rows.

use super::calculator::{LineFigures, OrderTotals, TotalsView, line_figures, order_totals};
use super::line_item::{FieldInput, LineItem, RowField, RowId};
use super::submission::{LineItemFields, PurchaseOrderSubmission};
use crate::error::{OrderError, OrderResult};
use crate::models::{Catalog, ProductId, ProductOption};
use crate::money::format_money;
use serde::Serialize;

/// Form field carrying the order discount
pub const DISCOUNT_FIELD: &str = "discount";
/// Form field carrying the amount paid up front
pub const AMOUNT_PAID_FIELD: &str = "amountPaid";

#[derive(Debug, Clone)]
struct Row {
    id: RowId,
    item: LineItem,
    /// Stock shown next to the selection; `None` until a selection is made
    stock: Option<i64>,
}

/// Display values of one row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub id: u64,
    pub product_id: Option<ProductId>,
    pub stock: Option<i64>,
    pub subtotal: String,
    pub subtotal_with_vat: String,
}

/// Everything a purchase-order display shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub rows: Vec<RowView>,
    pub totals: TotalsView,
    pub can_add_rows: bool,
}

/// Line-item registry with order-level inputs
#[derive(Debug, Clone)]
pub struct PurchaseOrderForm {
    catalog: Catalog,
    rows: Vec<Row>,
    next_id: u64,
    discount: FieldInput,
    amount_paid: FieldInput,
}

impl Default for PurchaseOrderForm {
    fn default() -> Self {
        Self::new()
    }
}

impl PurchaseOrderForm {
    /// Empty form without a catalog; call [`initialize`](Self::initialize) before adding rows
    pub fn new() -> Self {
        Self {
            catalog: Catalog::default(),
            rows: Vec::new(),
            next_id: 1,
            discount: FieldInput::default(),
            amount_paid: FieldInput::default(),
        }
    }

    /// Create a form and initialize it with `catalog`
    pub fn with_catalog(catalog: Catalog) -> Self {
        let mut form = Self::new();
        form.initialize(catalog);
        form
    }

    /// Install the session catalog.
    ///
    /// An empty catalog disables row adding. Existing rows are kept;
    /// a form without rows gets one empty row when products exist.
    pub fn initialize(&mut self, catalog: Catalog) {
        self.catalog = catalog;

        if self.catalog.is_empty() {
            tracing::warn!("No products available, adding rows is disabled");
            return;
        }
        tracing::debug!(products = self.catalog.len(), "Product catalog loaded");

        if self.rows.is_empty() {
            let id = self.push_row();
            tracing::debug!(row = %id, "Auto-added first row");
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn can_add_rows(&self) -> bool {
        !self.catalog.is_empty()
    }

    /// Selection choices offered on every row
    pub fn product_options(&self) -> Vec<ProductOption> {
        self.catalog.options()
    }

    // ========== Row Lifecycle ==========

    /// Append a row in its default state
    pub fn add_row(&mut self) -> OrderResult<RowId> {
        if self.catalog.is_empty() {
            tracing::warn!("Add row refused: product catalog is empty");
            return Err(OrderError::EmptyCatalog);
        }
        let id = self.push_row();
        tracing::debug!(row = %id, rows = self.rows.len(), "Row added");
        Ok(id)
    }

    /// Delete a row and return the recomputed totals
    pub fn remove_row(&mut self, id: RowId) -> OrderResult<OrderTotals> {
        let index = self.index_of(id)?;
        self.rows.remove(index);
        tracing::debug!(row = %id, rows = self.rows.len(), "Row removed");
        Ok(self.recompute_totals())
    }

    /// Choose a product for a row; the row then shows that product's stock.
    ///
    /// Display only: no stock is reserved or decremented.
    pub fn select_product(&mut self, id: RowId, product_id: Option<ProductId>) -> OrderResult<()> {
        let stock = self.catalog.stock_for(product_id);
        let row = self.row_mut(id)?;
        row.item.product_id = product_id;
        row.stock = Some(stock);
        Ok(())
    }

    /// Apply an edit to one numeric field and recompute
    pub fn update_field(&mut self, id: RowId, field: RowField, raw: &str) -> OrderResult<(RowView, OrderTotals)> {
        self.row_mut(id)?.item.set_field(field, raw);
        self.recompute_row(id)
    }

    pub fn set_discount(&mut self, raw: &str) -> OrderTotals {
        self.discount = FieldInput::new(raw);
        self.recompute_totals()
    }

    pub fn set_amount_paid(&mut self, raw: &str) -> OrderTotals {
        self.amount_paid = FieldInput::new(raw);
        self.recompute_totals()
    }

    // ========== Totals ==========

    /// Figures of one row as displayed, followed by fresh order totals
    pub fn recompute_row(&self, id: RowId) -> OrderResult<(RowView, OrderTotals)> {
        let row = &self.rows[self.index_of(id)?];
        let view = Self::row_view(row, &line_figures(&row.item));
        Ok((view, self.recompute_totals()))
    }

    /// Totals over the current rows
    pub fn recompute_totals(&self) -> OrderTotals {
        let totals = order_totals(
            self.rows.iter().map(|row| line_figures(&row.item)),
            self.discount.value(),
            self.amount_paid.value(),
        );
        tracing::trace!(
            total = %totals.total,
            grand_total = %totals.grand_total,
            amount_due = %totals.amount_due,
            "Totals recomputed"
        );
        totals
    }

    /// Every row and the totals, ready to display
    pub fn render(&self) -> FormView {
        FormView {
            rows: self
                .rows
                .iter()
                .map(|row| Self::row_view(row, &line_figures(&row.item)))
                .collect(),
            totals: self.recompute_totals().view(),
            can_add_rows: self.can_add_rows(),
        }
    }

    // ========== Accessors ==========

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, id: RowId) -> Option<&LineItem> {
        self.rows.iter().find(|r| r.id == id).map(|r| &r.item)
    }

    /// Row ids in display order
    pub fn row_ids(&self) -> Vec<RowId> {
        self.rows.iter().map(|r| r.id).collect()
    }

    /// Rows in display order
    pub fn rows(&self) -> impl Iterator<Item = (RowId, &LineItem)> {
        self.rows.iter().map(|r| (r.id, &r.item))
    }

    pub fn discount(&self) -> &FieldInput {
        &self.discount
    }

    pub fn amount_paid(&self) -> &FieldInput {
        &self.amount_paid
    }

    // ========== Submission ==========

    /// Flatten rows into the five index-aligned value lists
    pub fn flatten(&self) -> LineItemFields {
        LineItemFields::from_items(self.rows.iter().map(|r| &r.item))
    }

    /// Checks the browser form applied before posting: at least one row,
    /// and a product chosen on every row
    pub fn validate_for_submit(&self) -> OrderResult<()> {
        if self.rows.is_empty() {
            return Err(OrderError::NoLineItems);
        }
        if let Some(row) = self.rows.iter().find(|r| r.item.product_id.is_none()) {
            return Err(OrderError::MissingProduct(row.id));
        }
        Ok(())
    }

    /// Build the outgoing form body: discount, amount paid and line items
    pub fn to_submission(&self) -> PurchaseOrderSubmission {
        let mut submission = PurchaseOrderSubmission::new();
        self.fill_submission(&mut submission);
        submission
    }

    /// Refresh an existing form body with the current state, replacing
    /// any line items attached by an earlier attempt
    pub fn fill_submission(&self, submission: &mut PurchaseOrderSubmission) {
        submission.set_field(DISCOUNT_FIELD, self.discount.raw());
        submission.set_field(AMOUNT_PAID_FIELD, self.amount_paid.raw());
        submission.attach_line_items(&self.flatten());
    }

    // ========== Internals ==========

    fn push_row(&mut self) -> RowId {
        let id = RowId::new(self.next_id);
        self.next_id += 1;
        self.rows.push(Row {
            id,
            item: LineItem::default(),
            stock: None,
        });
        id
    }

    fn index_of(&self, id: RowId) -> OrderResult<usize> {
        self.rows
            .iter()
            .position(|r| r.id == id)
            .ok_or(OrderError::UnknownRow(id))
    }

    fn row_mut(&mut self, id: RowId) -> OrderResult<&mut Row> {
        self.rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(OrderError::UnknownRow(id))
    }

    fn row_view(row: &Row, figures: &LineFigures) -> RowView {
        RowView {
            id: row.id.value(),
            product_id: row.item.product_id,
            stock: row.stock,
            subtotal: format_money(figures.subtotal),
            subtotal_with_vat: format_money(figures.subtotal_with_vat),
        }
    }
}

// ==================== Tests ====================
