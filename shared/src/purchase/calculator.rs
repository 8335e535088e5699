//! Line-Item and Order Totals Calculator
//!
//! Per row:
//! - subtotal = quantity x purchase price
//! - VAT amount = subtotal x VAT% / 100
//! - subtotal with VAT = subtotal + VAT amount
//!
//! Per order:
//! - total = sum of row subtotals with VAT (each rounded as displayed)
//! - grand total = total - discount
//! - amount due = grand total - amount paid, never clamped
//!
//! Everything is recomputed from the current rows on every call.

use super::line_item::LineItem;
use crate::money::{add_or_zero, format_money, mul_or_zero, round_money, sub_or_zero};
use rust_decimal::Decimal;
use serde::Serialize;

/// Unrounded figures of one row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineFigures {
    /// quantity x purchase price
    pub subtotal: Decimal,
    /// subtotal x VAT% / 100
    pub vat_amount: Decimal,
    /// subtotal + VAT amount
    pub subtotal_with_vat: Decimal,
}

/// Calculate the figures of one row
///
/// Unparsable quantity, purchase price or VAT reads as 0. The selling
/// price does not take part.
pub fn line_figures(item: &LineItem) -> LineFigures {
    let subtotal = mul_or_zero(item.quantity.value(), item.purchase_price.value());
    let vat_amount = mul_or_zero(subtotal, item.vat_percent.value()) / Decimal::ONE_HUNDRED;
    let subtotal_with_vat = add_or_zero(subtotal, vat_amount);

    LineFigures {
        subtotal,
        vat_amount,
        subtotal_with_vat,
    }
}

/// Order totals, each rounded to 2 decimal places
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderTotals {
    /// Sum of row subtotals before VAT
    pub subtotal: Decimal,
    /// Sum of row VAT amounts
    pub vat_total: Decimal,
    /// Sum of row subtotals with VAT
    pub total: Decimal,
    /// Total after discount
    pub grand_total: Decimal,
    /// Grand total minus amount paid; negative on overpayment
    pub amount_due: Decimal,
}

/// Calculate order totals from row figures
///
/// # Calculation Steps
/// 1. Round each row's subtotal with VAT to 2 dp (the figure shown on the row) and sum
/// 2. Subtract the discount for the grand total
/// 3. Subtract the amount paid for the amount due
pub fn order_totals<I>(lines: I, discount: Decimal, amount_paid: Decimal) -> OrderTotals
where
    I: IntoIterator<Item = LineFigures>,
{
    let mut subtotal = Decimal::ZERO;
    let mut vat_total = Decimal::ZERO;
    let mut total = Decimal::ZERO;

    for line in lines {
        subtotal = add_or_zero(subtotal, line.subtotal);
        vat_total = add_or_zero(vat_total, line.vat_amount);
        total = add_or_zero(total, round_money(line.subtotal_with_vat));
    }

    let grand_total = sub_or_zero(total, discount);
    let amount_due = sub_or_zero(grand_total, amount_paid);

    OrderTotals {
        subtotal: round_money(subtotal),
        vat_total: round_money(vat_total),
        total: round_money(total),
        grand_total: round_money(grand_total),
        amount_due: round_money(amount_due),
    }
}

/// Display strings for the totals panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TotalsView {
    pub subtotal: String,
    pub vat_total: String,
    pub total: String,
    pub grand_total: String,
    pub amount_due: String,
}

impl OrderTotals {
    pub fn view(&self) -> TotalsView {
        TotalsView {
            subtotal: format_money(self.subtotal),
            vat_total: format_money(self.vat_total),
            total: format_money(self.total),
            grand_total: format_money(self.grand_total),
            amount_due: format_money(self.amount_due),
        }
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::purchase::RowField;
    use rust_decimal_macros::dec;

    fn make_item(quantity: &str, purchase_price: &str, vat: &str) -> LineItem {
        let mut item = LineItem::default();
        item.set_field(RowField::Quantity, quantity);
        item.set_field(RowField::PurchasePrice, purchase_price);
        item.set_field(RowField::VatPercent, vat);
        item
    }

    // ==================== Row Tests ====================

    #[test]
    fn test_row_with_vat() {
        // 2 x $10 = $20, 10% VAT = $2, $22 with VAT
        let figures = line_figures(&make_item("2", "10", "10"));

        assert_eq!(figures.subtotal, dec!(20));
        assert_eq!(figures.vat_amount, dec!(2));
        assert_eq!(figures.subtotal_with_vat, dec!(22));
    }

    #[test]
    fn test_row_unparsable_fields_are_zero() {
        let figures = line_figures(&make_item("abc", "10", ""));
        assert_eq!(figures, LineFigures::default());

        let figures = line_figures(&make_item("3", "", "15"));
        assert_eq!(figures.subtotal_with_vat, Decimal::ZERO);
    }

    #[test]
    fn test_row_ignores_selling_price() {
        let mut item = make_item("1", "5", "0");
        item.set_field(RowField::SellingPrice, "99");
        assert_eq!(line_figures(&item).subtotal_with_vat, dec!(5));
    }

    // ==================== Order Tests ====================

    #[test]
    fn test_order_discount_and_payment() {
        // $22 total, $5 discount -> $17, $10 paid -> $7 due
        let lines = [line_figures(&make_item("2", "10", "10"))];
        let totals = order_totals(lines, dec!(5), dec!(10));

        assert_eq!(totals.subtotal, dec!(20));
        assert_eq!(totals.vat_total, dec!(2));
        assert_eq!(totals.total, dec!(22));
        assert_eq!(totals.grand_total, dec!(17));
        assert_eq!(totals.amount_due, dec!(7));

        let view = totals.view();
        assert_eq!(view.total, "22.00");
        assert_eq!(view.grand_total, "17.00");
        assert_eq!(view.amount_due, "7.00");
    }

    #[test]
    fn test_two_rows_sum() {
        let lines = [
            line_figures(&make_item("2", "10", "10")),
            line_figures(&make_item("4", "2", "0")),
        ];
        let totals = order_totals(lines, Decimal::ZERO, Decimal::ZERO);

        assert_eq!(totals.total, dec!(30));
        assert_eq!(totals.view().total, "30.00");
    }

    #[test]
    fn test_overpayment_is_negative() {
        let lines = [line_figures(&make_item("1", "10", "0"))];
        let totals = order_totals(lines, Decimal::ZERO, dec!(25));

        assert_eq!(totals.amount_due, dec!(-15));
        assert_eq!(totals.view().amount_due, "-15.00");
    }

    #[test]
    fn test_no_rows() {
        let totals = order_totals(std::iter::empty(), dec!(5), dec!(0));

        assert_eq!(totals.total, Decimal::ZERO);
        assert_eq!(totals.grand_total, dec!(-5));
        assert_eq!(totals.amount_due, dec!(-5));
    }

    #[test]
    fn test_total_sums_displayed_row_figures() {
        // 1 x 0.335 -> 0.34 shown on each row, total 0.68 (not round(0.67))
        let lines = [
            line_figures(&make_item("1", "0.335", "0")),
            line_figures(&make_item("1", "0.335", "0")),
        ];
        let totals = order_totals(lines, Decimal::ZERO, Decimal::ZERO);

        assert_eq!(totals.total, dec!(0.68));
        assert_eq!(totals.subtotal, dec!(0.67));
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let lines = vec![
            line_figures(&make_item("3", "7.15", "5")),
            line_figures(&make_item("1", "2.50", "7.5")),
        ];
        let first = order_totals(lines.clone(), dec!(1.25), dec!(3));
        let second = order_totals(lines, dec!(1.25), dec!(3));
        assert_eq!(first, second);
    }
}
