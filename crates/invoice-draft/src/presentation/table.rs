use crate::model::{format_currency, DraftView};
use std::fmt::Write;

/// Renders the line items and the summary block as plain text.
///
/// ```text
/// Item                 Type     Qty   Unit Price       Total
/// Gold Ring            Product    2      ₹100.00     ₹200.00
/// ...
///                                       Subtotal:     ₹250.00
/// ```
pub fn render_table(view: &DraftView, currency: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<20} {:<8} {:>4} {:>12} {:>12}",
        "Item", "Type", "Qty", "Unit Price", "Total"
    );
    if view.items.is_empty() {
        let _ = writeln!(out, "(no items)");
    }
    for line in &view.items {
        let _ = writeln!(
            out,
            "{:<20} {:<8} {:>4} {:>12} {:>12}",
            line.name,
            line.kind().to_string(),
            line.quantity,
            format_currency(line.unit_price, currency),
            format_currency(line.line_total(), currency),
        );
    }

    let totals = &view.totals;
    for (label, amount) in [
        ("Subtotal:", totals.subtotal),
        ("Discount:", totals.discount),
        ("Tax (10%):", totals.tax_amount),
        ("Total:", totals.total_amount),
    ] {
        let _ = writeln!(
            out,
            "{:>47} {:>12}",
            label,
            format_currency(amount, currency)
        );
    }
    out
}
